use crate::{
    adapter::PlatformAdapter,
    cancel::CancelToken,
    commands::{
        countdown::{self, Countdown},
        list_apps::list_running_gui_applications,
    },
    config::AutomationConfig,
    report::{CloseReport, FailedApp},
    reporter::Reporter,
};

/// Quits every running GUI app not in `config.excluded`, after a
/// cancellable countdown. Individual quit failures are reported and skipped.
pub fn close_all_gui_applications(
    adapter: &dyn PlatformAdapter,
    config: &AutomationConfig,
    cancel: &CancelToken,
    reporter: &dyn Reporter,
) -> CloseReport {
    reporter.line("Getting list of running GUI applications...");
    let running = list_running_gui_applications(adapter, reporter);
    let to_close: Vec<String> = config
        .excluded
        .filter(&running)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut report = CloseReport { to_close, ..CloseReport::default() };
    if report.to_close.is_empty() {
        reporter.line("No GUI applications to close.");
        return report;
    }

    reporter.blank();
    reporter.line(&format!("Found {} applications to close:", report.to_close.len()));
    for app in &report.to_close {
        reporter.info(&format!("- {app}"));
    }

    reporter.blank();
    reporter.line(&format!(
        "Starting countdown: {} seconds to cancel (Ctrl+C)...",
        config.countdown
    ));
    if countdown::run(config.countdown, config.tick, cancel, reporter) == Countdown::Cancelled {
        return cancelled(report, reporter);
    }

    reporter.blank();
    reporter.line("Closing applications...");
    for app in report.to_close.clone() {
        if cancel.is_cancelled() {
            return cancelled(report, reporter);
        }
        match adapter.quit(&app) {
            Ok(()) => {
                reporter.success(&format!("Closed {app}"));
                report.closed.push(app);
            }
            Err(e) => {
                tracing::debug!(app = %app, code = e.code.as_str(), "quit failed");
                reporter.failure(&format!("Failed to close {app}: {e}"));
                report.failed.push(FailedApp { app, error: e.to_string() });
            }
        }
        if !cancel.sleep(config.quit_pause) {
            return cancelled(report, reporter);
        }
    }

    if !cancel.sleep(config.after_close_pause) {
        return cancelled(report, reporter);
    }
    reporter.blank();
    reporter.line("All applications closed.");
    report
}

/// Apps already quit stay quit; the rest are left running.
fn cancelled(mut report: CloseReport, reporter: &dyn Reporter) -> CloseReport {
    reporter.blank();
    reporter.line("Cancelled by user.");
    report.cancelled = true;
    report
}
