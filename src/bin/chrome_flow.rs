//! Closes every GUI app and opens only Chrome, maximized.

use desk_reset_core::{
    commands::run_workflow::run_workflow, AutomationConfig, CancelToken, ConsoleReporter, Workflow,
};
use desk_reset_macos::MacOSAdapter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cancel = CancelToken::new();
    if let Err(e) = cancel.cancel_on_interrupt() {
        tracing::warn!(error = %e, "Ctrl+C will terminate instead of cancelling");
    }

    let report = run_workflow(
        &MacOSAdapter::new(),
        &Workflow::chrome_only(),
        &AutomationConfig::default(),
        &cancel,
        &ConsoleReporter::stdout(),
    );
    tracing::debug!(cancelled = report.cancelled, closed = report.close.closed.len(), "finished");
}
