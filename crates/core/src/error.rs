use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ScriptFailed,
    PlatformNotSupported,
    Timeout,
    Cancelled,
    InvalidArgs,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ScriptFailed => "SCRIPT_FAILED",
            ErrorCode::PlatformNotSupported => "PLATFORM_NOT_SUPPORTED",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::InvalidArgs => "INVALID_ARGS",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct AdapterError {
    pub code: ErrorCode,
    pub message: String,
    pub suggestion: Option<String>,
    pub platform_detail: Option<String>,
}

impl AdapterError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: None,
            platform_detail: None,
        }
    }

    pub fn with_suggestion(mut self, s: impl Into<String>) -> Self {
        self.suggestion = Some(s.into());
        self
    }

    pub fn with_platform_detail(mut self, d: impl Into<String>) -> Self {
        self.platform_detail = Some(d.into());
        self
    }

    /// The scripting interpreter exited non-zero; `stderr` is its diagnostic text.
    pub fn script_failed(stderr: impl Into<String>) -> Self {
        let stderr = stderr.into();
        Self::new(ErrorCode::ScriptFailed, format!("AppleScript error: {stderr}"))
            .with_platform_detail(stderr)
    }

    pub fn not_supported(method: &str) -> Self {
        Self::new(
            ErrorCode::PlatformNotSupported,
            format!("{method} is not supported on this platform"),
        )
        .with_suggestion("Only macOS has an automation backend")
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, msg)
            .with_suggestion("The application may be slow to start or may not open a window")
    }

    pub fn cancelled() -> Self {
        Self::new(ErrorCode::Cancelled, "Cancelled by user")
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &str {
        match self {
            AppError::Adapter(e) => e.code.as_str(),
            AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => "INTERNAL",
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AppError::Adapter(e) => e.suggestion.as_deref(),
            _ => None,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::Adapter(AdapterError::new(ErrorCode::InvalidArgs, msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_failure_keeps_stderr_as_detail() {
        let e = AdapterError::script_failed("execution error: -1728");
        assert_eq!(e.code, ErrorCode::ScriptFailed);
        assert_eq!(e.to_string(), "AppleScript error: execution error: -1728");
        assert_eq!(e.platform_detail.as_deref(), Some("execution error: -1728"));
    }

    #[test]
    fn app_error_exposes_adapter_code_and_suggestion() {
        let e: AppError = AdapterError::not_supported("quit").into();
        assert_eq!(e.code(), "PLATFORM_NOT_SUPPORTED");
        assert!(e.suggestion().is_some());

        let e = AppError::Internal("boom".into());
        assert_eq!(e.code(), "INTERNAL");
        assert!(e.suggestion().is_none());
    }

    #[test]
    fn error_codes_serialize_screaming_snake() {
        let v = serde_json::to_value(ErrorCode::PlatformNotSupported).unwrap();
        assert_eq!(v, "PLATFORM_NOT_SUPPORTED");
        assert_eq!(ErrorCode::Cancelled.as_str(), "CANCELLED");
    }
}
