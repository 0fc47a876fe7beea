use crate::{
    adapter::PlatformAdapter,
    app::AppSpec,
    cancel::CancelToken,
    commands::{is_installed::application_exists, maximize::maximize_window, wait::wait_for_window},
    config::AutomationConfig,
    error::{AdapterError, ErrorCode},
    report::{AppOutcome, AppResult, MaximizeOutcome, OpenReport},
    reporter::Reporter,
};

/// Checks every spec for installation first, then opens and maximizes the
/// installed ones in order. A failure for one app never blocks the next.
pub fn open_and_maximize_applications(
    adapter: &dyn PlatformAdapter,
    specs: &[AppSpec],
    config: &AutomationConfig,
    cancel: &CancelToken,
    reporter: &dyn Reporter,
) -> OpenReport {
    reporter.blank();
    reporter.line("Checking installed applications...");

    let mut report = OpenReport::default();
    let mut installed = Vec::new();
    for spec in specs {
        if application_exists(adapter, &spec.name) {
            reporter.success(&format!("{} found", spec.name));
            installed.push(spec);
        } else {
            reporter.failure(&format!("{} not found (skipping)", spec.name));
            report.apps.push(result(spec, AppOutcome::NotInstalled));
        }
    }

    reporter.blank();
    reporter.line("Opening and maximizing applications...");

    for spec in installed {
        if cancel.is_cancelled() {
            report.cancelled = true;
            report.apps.push(result(spec, AppOutcome::Skipped));
            continue;
        }

        let outcome = match open_one(adapter, spec, config, cancel, reporter) {
            Ok(maximize) => {
                if maximize.is_maximized() {
                    reporter.success(&format!("{} ready", spec.name));
                } else {
                    reporter.failure(&format!("{} opened but could not be maximized", spec.name));
                }
                AppOutcome::Opened { maximize }
            }
            Err(e) if e.code == ErrorCode::Cancelled => {
                report.cancelled = true;
                AppOutcome::Skipped
            }
            Err(e) => {
                reporter.failure(&format!("Failed to open/maximize {}: {e}", spec.name));
                AppOutcome::Failed { error: e.to_string() }
            }
        };
        report.apps.push(result(spec, outcome));

        if !cancel.sleep(config.settle_delay) {
            report.cancelled = true;
        }
    }

    reporter.blank();
    if report.cancelled {
        reporter.line("Cancelled by user.");
    } else {
        let opened = report
            .apps
            .iter()
            .filter(|r| matches!(r.outcome, AppOutcome::Opened { .. }))
            .count();
        reporter.line(&format!("✓ Workflow complete! {opened} of {} applications opened.", specs.len()));
    }
    report
}

fn open_one(
    adapter: &dyn PlatformAdapter,
    spec: &AppSpec,
    config: &AutomationConfig,
    cancel: &CancelToken,
    reporter: &dyn Reporter,
) -> Result<MaximizeOutcome, AdapterError> {
    reporter.blank();
    reporter.info(&format!("Opening {}...", spec.name));
    adapter.activate(&spec.name)?;
    wait_for_window(adapter, &spec.process, config, cancel)?;

    reporter.info(&format!("Maximizing {}...", spec.name));
    Ok(maximize_window(adapter, spec))
}

fn result(spec: &AppSpec, outcome: AppOutcome) -> AppResult {
    AppResult { app: spec.name.clone(), process: spec.process.clone(), outcome }
}
