use crate::script::run;
use desk_reset_core::adapter::PermissionStatus;

const UI_SCRIPTING_CHECK: &str =
    r#"tell application "System Events" to return UI elements enabled as text"#;

pub fn check() -> PermissionStatus {
    match run(UI_SCRIPTING_CHECK) {
        Ok(out) if out == "true" => PermissionStatus::Granted,
        Ok(_) => PermissionStatus::Denied {
            suggestion: "Open System Settings > Privacy & Security > Accessibility and add your terminal application".into(),
        },
        Err(e) => PermissionStatus::Denied {
            suggestion: format!("Could not query System Events: {e}"),
        },
    }
}
