use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

const SLICE: Duration = Duration::from_millis(50);

/// Cooperative cancellation flag shared between the interrupt watcher and
/// whichever operation is currently running.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Sleeps for `duration` in short slices. Returns `false` if the token
    /// was cancelled before the full duration elapsed.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep(SLICE.min(deadline - now));
        }
    }

    /// Spawns a thread that turns Ctrl+C into a cancellation of this token.
    /// The handler is installed before this returns. A second Ctrl+C exits
    /// the process with status 130.
    pub fn cancel_on_interrupt(&self) -> std::io::Result<()> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()?;
        let mut listener = {
            let _guard = rt.enter();
            interrupt::Listener::register()?
        };
        let token = self.clone();
        std::thread::Builder::new()
            .name("interrupt-watcher".into())
            .spawn(move || {
                rt.block_on(async move {
                    while listener.next().await {
                        if token.is_cancelled() {
                            std::process::exit(130);
                        }
                        tracing::debug!("interrupt received, cancelling");
                        token.cancel();
                    }
                    tracing::warn!("interrupt listener closed");
                });
            })?;
        Ok(())
    }
}

#[cfg(unix)]
mod interrupt {
    use tokio::signal::unix::{signal, Signal, SignalKind};

    pub struct Listener(Signal);

    impl Listener {
        /// Needs a runtime context; SIGINT is routed to the listener on return.
        pub fn register() -> std::io::Result<Self> {
            Ok(Self(signal(SignalKind::interrupt())?))
        }

        pub async fn next(&mut self) -> bool {
            self.0.recv().await.is_some()
        }
    }
}

#[cfg(windows)]
mod interrupt {
    use tokio::signal::windows::{ctrl_c, CtrlC};

    pub struct Listener(CtrlC);

    impl Listener {
        pub fn register() -> std::io::Result<Self> {
            Ok(Self(ctrl_c()?))
        }

        pub async fn next(&mut self) -> bool {
            self.0.recv().await.is_some()
        }
    }
}
