use crate::{
    adapter::PlatformAdapter, cancel::CancelToken, config::AutomationConfig, error::AdapterError,
};
use std::time::Instant;

/// Polls until `process` has a window, backing off from
/// `config.poll_interval` to `config.max_poll_interval`.
pub fn wait_for_window(
    adapter: &dyn PlatformAdapter,
    process: &str,
    config: &AutomationConfig,
    cancel: &CancelToken,
) -> Result<(), AdapterError> {
    let start = Instant::now();
    let mut interval = config.poll_interval;

    loop {
        match adapter.has_window(process) {
            Ok(true) => {
                tracing::debug!(process, elapsed_ms = start.elapsed().as_millis() as u64, "window ready");
                return Ok(());
            }
            Ok(false) => {}
            Err(e) => tracing::debug!(process, error = %e, "window poll failed"),
        }

        if start.elapsed() >= config.window_timeout {
            return Err(AdapterError::timeout(format!(
                "No window for {process} appeared within {} ms",
                config.window_timeout.as_millis()
            )));
        }
        if !cancel.sleep(interval) {
            return Err(AdapterError::cancelled());
        }
        interval = (interval * 3 / 2).min(config.max_poll_interval);
    }
}
