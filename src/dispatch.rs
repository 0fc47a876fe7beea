use desk_reset_core::{
    adapter::PlatformAdapter,
    cancel::CancelToken,
    commands::{
        close_all, is_installed, list_apps, list_workflows, maximize, open_apps, run_workflow,
        status, version,
    },
    config::{AutomationConfig, ExcludedSet},
    error::AppError,
    reporter::{ConsoleReporter, Reporter},
    workflow, AppSpec,
};
use serde_json::Value;
use std::time::Duration;

use crate::cli::{Commands, ExclusionArgs};

/// Commands that answer with a single JSON envelope.
pub fn dispatch(cmd: Commands, adapter: &dyn PlatformAdapter) -> Result<Value, AppError> {
    match cmd {
        Commands::ListApps => list_apps::execute(adapter),
        Commands::IsInstalled(a) => {
            is_installed::execute(is_installed::IsInstalledArgs { app: a.app }, adapter)
        }
        Commands::Maximize(a) => {
            let spec = match a.process {
                Some(p) => AppSpec::with_process(a.app, p),
                None => AppSpec::new(a.app),
            };
            maximize::execute(maximize::MaximizeArgs { spec }, adapter)
        }
        Commands::Workflows => list_workflows::execute(),
        Commands::Status => status::execute(adapter),
        Commands::Version(_) => version::execute(),
        other @ (Commands::Run(_) | Commands::CloseAll(_) | Commands::Open(_)) => Err(
            AppError::Internal(format!("'{}' is a session command", other.name())),
        ),
    }
}

/// Session commands print progress lines as they go. Returns the JSON
/// report when `--json` was given.
pub fn run_session(
    cmd: Commands,
    adapter: &dyn PlatformAdapter,
    cancel: &CancelToken,
) -> Result<Option<Value>, AppError> {
    match cmd {
        Commands::Run(a) => {
            let wf = workflow::find(&a.workflow).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown workflow '{}'. Run 'desk-reset workflows' to list them",
                    a.workflow
                ))
            })?;
            let config = build_config(&a.exclusion, a.window_timeout_ms);
            let reporter = reporter_for(a.json);
            let report = run_workflow::run_workflow(adapter, &wf, &config, cancel, &reporter);
            json_if(a.json, &report)
        }
        Commands::CloseAll(a) => {
            let config = build_config(&a.exclusion, None);
            let reporter = reporter_for(a.json);
            let report = close_all::close_all_gui_applications(adapter, &config, cancel, &reporter);
            json_if(a.json, &report)
        }
        Commands::Open(a) => {
            let config = build_config(&ExclusionArgs::default(), a.window_timeout_ms);
            let reporter = reporter_for(a.json);
            let report =
                open_apps::open_and_maximize_applications(adapter, &a.apps, &config, cancel, &reporter);
            if !report.cancelled {
                reporter.blank();
                reporter.line("Done!");
            }
            json_if(a.json, &report)
        }
        other => dispatch(other, adapter).map(Some),
    }
}

pub fn is_session(cmd: &Commands) -> bool {
    matches!(cmd, Commands::Run(_) | Commands::CloseAll(_) | Commands::Open(_))
}

pub fn wants_json(cmd: &Commands) -> bool {
    match cmd {
        Commands::Run(a) => a.json,
        Commands::CloseAll(a) => a.json,
        Commands::Open(a) => a.json,
        _ => true,
    }
}

pub fn build_config(exclusion: &ExclusionArgs, window_timeout_ms: Option<u64>) -> AutomationConfig {
    let excluded = if exclusion.exclude.is_empty() {
        ExcludedSet::default()
    } else {
        ExcludedSet::new(exclusion.exclude.iter().cloned())
    };
    let mut config =
        AutomationConfig::default().with_excluded(excluded.extend(exclusion.keep.iter().cloned()));
    if let Some(ticks) = exclusion.countdown {
        config = config.with_countdown(ticks);
    }
    if let Some(ms) = window_timeout_ms {
        config = config.with_window_timeout(Duration::from_millis(ms));
    }
    config
}

fn reporter_for(json: bool) -> ConsoleReporter {
    if json {
        ConsoleReporter::stderr()
    } else {
        ConsoleReporter::stdout()
    }
}

fn json_if<T: serde::Serialize>(json: bool, report: &T) -> Result<Option<Value>, AppError> {
    if json {
        Ok(Some(serde_json::to_value(report)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_reset_core::fake::FakeAdapter;

    #[test]
    fn exclude_replaces_and_keep_extends() {
        let args = ExclusionArgs {
            exclude: vec!["Terminal".into()],
            keep: vec!["Slack".into()],
            countdown: Some(0),
        };
        let config = build_config(&args, Some(2500));
        assert!(config.excluded.contains("Terminal"));
        assert!(config.excluded.contains("Slack"));
        assert!(!config.excluded.contains("Finder"));
        assert_eq!(config.countdown, 0);
        assert_eq!(config.window_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn defaults_without_flags() {
        let config = build_config(&ExclusionArgs::default(), None);
        assert!(config.excluded.contains("Finder"));
        assert_eq!(config.countdown, 3);
    }

    #[test]
    fn unknown_workflow_is_invalid_input() {
        let cmd = Commands::Run(crate::cli::RunArgs {
            workflow: "nope".into(),
            exclusion: ExclusionArgs::default(),
            window_timeout_ms: None,
            json: true,
        });
        let err = run_session(cmd, &FakeAdapter::new(), &CancelToken::new()).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGS");
    }

    #[test]
    fn json_dispatch_routes_primitives() {
        let adapter = FakeAdapter::new().running(["Mail"]).installed(["Notes"]);
        let v = dispatch(Commands::ListApps, &adapter).unwrap();
        assert_eq!(v["apps"][0], "Mail");
        let v = dispatch(
            Commands::IsInstalled(crate::cli::IsInstalledArgs { app: "Notes".into() }),
            &adapter,
        )
        .unwrap();
        assert_eq!(v["installed"], true);
    }
}
