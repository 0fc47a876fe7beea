use crate::script::{quote, run};
use desk_reset_core::error::AdapterError;

pub fn has_window_script(process: &str) -> String {
    let p = quote(process);
    format!(
        r#"tell application "System Events"
    if not (exists process {p}) then return "false"
    return (exists window 1 of process {p}) as text
end tell"#
    )
}

fn on_first_window(process: &str, body: &str) -> String {
    format!(
        r#"tell application "System Events"
    tell process {}
        set frontmost to true
        if not (exists window 1) then error "no window" number -1728
        tell window 1
{body}
        end tell
    end tell
end tell"#,
        quote(process)
    )
}

pub fn fullscreen_script(process: &str) -> String {
    on_first_window(process, r#"            set value of attribute "AXFullScreen" to true"#)
}

pub fn resize_script(process: &str) -> String {
    let body = r#"            tell application "Finder" to set screenBounds to bounds of window of desktop
            set position to {0, 0}
            set size to {item 3 of screenBounds, item 4 of screenBounds}"#;
    on_first_window(process, body)
}

pub fn zoom_script(process: &str) -> String {
    on_first_window(
        process,
        r#"            click (first button whose subrole is "AXZoomButton")"#,
    )
}

pub fn has_window(process: &str) -> Result<bool, AdapterError> {
    run(&has_window_script(process)).map(|out| out == "true")
}

pub fn set_fullscreen(process: &str) -> Result<(), AdapterError> {
    run(&fullscreen_script(process)).map(|_| ())
}

pub fn resize_to_screen(process: &str) -> Result<(), AdapterError> {
    run(&resize_script(process)).map(|_| ())
}

pub fn zoom(process: &str) -> Result<(), AdapterError> {
    run(&zoom_script(process)).map(|_| ())
}
