use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;

/// Envelope printed by every JSON-emitting command.
#[derive(Debug, Serialize)]
pub struct Response {
    pub version: &'static str,
    pub ok: bool,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_detail: Option<String>,
}

impl Response {
    pub fn ok(command: impl Into<String>, data: Value) -> Self {
        Self {
            version: "1.0",
            ok: true,
            command: command.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(command: impl Into<String>, payload: ErrorPayload) -> Self {
        Self {
            version: "1.0",
            ok: false,
            command: command.into(),
            data: None,
            error: Some(payload),
        }
    }
}

impl ErrorPayload {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            platform_detail: None,
        }
    }
}

impl From<&AppError> for ErrorPayload {
    fn from(e: &AppError) -> Self {
        let mut payload = Self::new(e.code(), e.to_string());
        payload.suggestion = e.suggestion().map(str::to_string);
        if let AppError::Adapter(a) = e {
            payload.platform_detail = a.platform_detail.clone();
        }
        payload
    }
}
