use crate::{error::AppError, workflow};
use serde_json::{json, Value};

pub fn execute() -> Result<Value, AppError> {
    Ok(json!({ "workflows": workflow::builtin() }))
}
