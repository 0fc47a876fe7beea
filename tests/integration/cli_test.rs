/// Integration tests for the desk-reset binary.
///
/// Only commands that never touch running applications are exercised here.
/// The close/open paths run end to end only off macOS, where enumeration
/// fails and nothing can be quit.
#[cfg(test)]
mod tests {
    use std::process::{Command, Output};

    fn desk_reset(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_desk-reset"))
            .args(args)
            .output()
            .expect("failed to run desk-reset")
    }

    fn stdout_json(output: &Output) -> serde_json::Value {
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout).expect("output is not valid JSON")
    }

    #[test]
    fn version_command_outputs_json() {
        let output = desk_reset(&["version", "--json"]);
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["ok"], true);
        assert_eq!(json["command"], "version");
        assert!(json["data"]["version"].is_string());
    }

    #[test]
    fn workflows_lists_chrome_only() {
        let json = stdout_json(&desk_reset(&["workflows"]));
        assert_eq!(json["ok"], true);
        let names: Vec<&str> = json["data"]["workflows"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|w| w["name"].as_str())
            .collect();
        assert!(names.contains(&"chrome-only"));
    }

    #[test]
    fn bad_arguments_exit_2_with_json_error() {
        let output = desk_reset(&["maximize"]);
        assert_eq!(output.status.code(), Some(2));
        let json = stdout_json(&output);
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "INVALID_ARGS");
    }

    #[test]
    fn unknown_workflow_fails_before_closing_anything() {
        let output = desk_reset(&["run", "no-such-workflow", "--json"]);
        assert_eq!(output.status.code(), Some(1));
        let json = stdout_json(&output);
        assert_eq!(json["command"], "run");
        assert_eq!(json["error"]["code"], "INVALID_ARGS");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Closing applications"));
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn list_apps_on_non_macos_errors_gracefully() {
        let output = desk_reset(&["list-apps"]);
        assert_eq!(output.status.code(), Some(1));
        let json = stdout_json(&output);
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "PLATFORM_NOT_SUPPORTED");
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn run_without_platform_reports_empty_close_and_missing_chrome() {
        let output = desk_reset(&["run", "chrome-only", "--countdown", "0", "--json"]);
        assert_eq!(output.status.code(), Some(0));
        let json = stdout_json(&output);
        assert_eq!(json["ok"], true);
        assert_eq!(json["command"], "run");

        let data = &json["data"];
        assert_eq!(data["workflow"], "chrome-only");
        assert_eq!(data["cancelled"], false);
        assert_eq!(data["close"]["to_close"], serde_json::json!([]));
        assert_eq!(data["close"]["closed"], serde_json::json!([]));
        assert_eq!(data["open"]["apps"][0]["app"], "Google Chrome");
        assert_eq!(data["open"]["apps"][0]["status"], "not_installed");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("No GUI applications to close."));
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn chrome_flow_finishes_without_platform() {
        let output = Command::new(env!("CARGO_BIN_EXE_chrome-flow"))
            .output()
            .expect("failed to run chrome-flow");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Chrome-Only Workflow"));
        assert!(stdout.contains("No GUI applications to close."));
        assert!(stdout.contains("Google Chrome not found (skipping)"));
        assert!(stdout.trim_end().ends_with("Done!"));
    }

    #[test]
    #[cfg(target_os = "macos")]
    #[ignore = "requires a macOS session with System Events access"]
    fn list_apps_includes_finder() {
        let json = stdout_json(&desk_reset(&["list-apps"]));
        assert_eq!(json["ok"], true);
        let apps = json["data"]["apps"].as_array().unwrap();
        assert!(apps.iter().any(|a| a == "Finder"));
    }
}
