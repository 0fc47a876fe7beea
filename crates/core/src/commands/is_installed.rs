use crate::{adapter::PlatformAdapter, error::AppError};
use serde_json::{json, Value};

/// A failed lookup counts as "not installed".
pub fn application_exists(adapter: &dyn PlatformAdapter, name: &str) -> bool {
    match adapter.is_installed(name) {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!(app = name, error = %e, "installation lookup failed");
            false
        }
    }
}

pub struct IsInstalledArgs {
    pub app: String,
}

pub fn execute(args: IsInstalledArgs, adapter: &dyn PlatformAdapter) -> Result<Value, AppError> {
    if args.app.trim().is_empty() {
        return Err(AppError::invalid_input("Application name must not be empty"));
    }
    let installed = application_exists(adapter, &args.app);
    Ok(json!({ "app": args.app, "installed": installed }))
}
