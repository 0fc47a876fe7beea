use crate::{cancel::CancelToken, reporter::Reporter};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Finished,
    Cancelled,
}

/// Prints `N...` down to `1...`, one tick apart. The token is checked before
/// each tick and while waiting.
pub fn run(ticks: u32, tick: Duration, cancel: &CancelToken, reporter: &dyn Reporter) -> Countdown {
    for i in (1..=ticks).rev() {
        if cancel.is_cancelled() {
            return Countdown::Cancelled;
        }
        reporter.line(&format!("{i}..."));
        if !cancel.sleep(tick) {
            return Countdown::Cancelled;
        }
    }
    if cancel.is_cancelled() {
        Countdown::Cancelled
    } else {
        Countdown::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[test]
    fn counts_down_one_line_per_tick() {
        let reporter = MemoryReporter::new();
        let result = run(3, Duration::ZERO, &CancelToken::new(), &reporter);
        assert_eq!(result, Countdown::Finished);
        assert_eq!(reporter.lines(), vec!["3...", "2...", "1..."]);
    }

    #[test]
    fn zero_ticks_finishes_silently() {
        let reporter = MemoryReporter::new();
        assert_eq!(run(0, Duration::ZERO, &CancelToken::new(), &reporter), Countdown::Finished);
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn cancelled_token_stops_before_first_tick() {
        let reporter = MemoryReporter::new();
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(run(3, Duration::ZERO, &cancel, &reporter), Countdown::Cancelled);
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn cancel_mid_countdown() {
        let reporter = MemoryReporter::new();
        let cancel = CancelToken::new();
        let remote = cancel.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(30));
            remote.cancel();
        });
        let result = run(3, Duration::from_secs(5), &cancel, &reporter);
        handle.join().unwrap();
        assert_eq!(result, Countdown::Cancelled);
        assert_eq!(reporter.lines(), vec!["3..."]);
    }
}
