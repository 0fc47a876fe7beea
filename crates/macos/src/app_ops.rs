use crate::script::{quote, run};
use desk_reset_core::error::AdapterError;

pub fn list_running_script() -> String {
    r#"tell application "System Events" to set appNames to name of every application process whose background only is false
set AppleScript's text item delimiters to linefeed
return appNames as text"#
        .to_string()
}

pub fn quit_script(name: &str) -> String {
    format!("tell application {} to quit", quote(name))
}

pub fn exists_script(name: &str) -> String {
    format!(
        r#"try
    set appId to id of application {}
    return "found"
on error
    return "not found"
end try"#,
        quote(name)
    )
}

pub fn activate_script(name: &str) -> String {
    format!("tell application {} to activate", quote(name))
}

/// One name per line, blanks dropped.
pub fn parse_app_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn list_running_apps() -> Result<Vec<String>, AdapterError> {
    run(&list_running_script()).map(|out| parse_app_list(&out))
}

pub fn quit(name: &str) -> Result<(), AdapterError> {
    run(&quit_script(name)).map(|_| ())
}

pub fn is_installed(name: &str) -> Result<bool, AdapterError> {
    run(&exists_script(name)).map(|out| out == "found")
}

pub fn activate(name: &str) -> Result<(), AdapterError> {
    run(&activate_script(name)).map(|_| ())
}
