use desk_reset_core::error::AdapterError;

/// Escapes `s` for use inside an AppleScript string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(target_os = "macos")]
mod imp {
    use super::*;
    use std::process::Command;

    const OSASCRIPT: &str = "/usr/bin/osascript";

    pub fn run(script: &str) -> Result<String, AdapterError> {
        tracing::debug!(script, "osascript");
        let output = Command::new(OSASCRIPT)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| AdapterError::internal(format!("Couldn't spawn osascript: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(status = ?output.status.code(), stderr = %stderr, "osascript failed");
            return Err(AdapterError::script_failed(stderr));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use super::*;

    pub fn run(_script: &str) -> Result<String, AdapterError> {
        Err(AdapterError::not_supported("osascript"))
    }
}

pub use imp::run;
