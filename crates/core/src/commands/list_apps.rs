use crate::{adapter::PlatformAdapter, error::AppError, reporter::Reporter};
use serde_json::{json, Value};

/// Running GUI app names in enumeration order. A failed enumeration is
/// reported and treated as "nothing running".
pub fn list_running_gui_applications(
    adapter: &dyn PlatformAdapter,
    reporter: &dyn Reporter,
) -> Vec<String> {
    match adapter.list_running_apps() {
        Ok(apps) => apps,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "list_running_apps failed");
            reporter.failure(&e.to_string());
            Vec::new()
        }
    }
}

pub fn execute(adapter: &dyn PlatformAdapter) -> Result<Value, AppError> {
    let apps = adapter.list_running_apps()?;
    Ok(json!({ "apps": apps }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fake::FakeAdapter, reporter::MemoryReporter};

    #[test]
    fn returns_apps_in_order() {
        let adapter = FakeAdapter::new().running(["Chrome", "Terminal", "Notes"]);
        let reporter = MemoryReporter::new();
        let apps = list_running_gui_applications(&adapter, &reporter);
        assert_eq!(apps, vec!["Chrome", "Terminal", "Notes"]);
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn script_failure_logs_and_returns_empty() {
        let adapter = FakeAdapter::new().failing_list("System Events got an error");
        let reporter = MemoryReporter::new();
        let apps = list_running_gui_applications(&adapter, &reporter);
        assert!(apps.is_empty());
        assert_eq!(
            reporter.lines(),
            vec!["  ✗ AppleScript error: System Events got an error"]
        );
    }

    #[test]
    fn execute_propagates_failure() {
        let adapter = FakeAdapter::new().failing_list("nope");
        let err = execute(&adapter).unwrap_err();
        assert_eq!(err.code(), "SCRIPT_FAILED");

        let adapter = FakeAdapter::new().running(["Mail"]);
        assert_eq!(execute(&adapter).unwrap()["apps"][0], "Mail");
    }
}
