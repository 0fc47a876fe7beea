use crate::error::AdapterError;

pub enum PermissionStatus {
    Granted,
    Denied { suggestion: String },
}

/// Typed client over the OS automation facility.
///
/// Every method defaults to `PLATFORM_NOT_SUPPORTED` so a backend only
/// implements what its platform can do. Window methods take the process
/// name, which may differ from the display name used to launch the app.
pub trait PlatformAdapter: Send + Sync {
    /// Names of running processes that present a UI, in OS enumeration order.
    fn list_running_apps(&self) -> Result<Vec<String>, AdapterError> {
        Err(AdapterError::not_supported("list_running_apps"))
    }

    fn quit(&self, _name: &str) -> Result<(), AdapterError> {
        Err(AdapterError::not_supported("quit"))
    }

    fn is_installed(&self, _name: &str) -> Result<bool, AdapterError> {
        Err(AdapterError::not_supported("is_installed"))
    }

    /// Launches the app if needed and brings it to the front.
    fn activate(&self, _name: &str) -> Result<(), AdapterError> {
        Err(AdapterError::not_supported("activate"))
    }

    fn has_window(&self, _process: &str) -> Result<bool, AdapterError> {
        Err(AdapterError::not_supported("has_window"))
    }

    fn set_fullscreen(&self, _process: &str) -> Result<(), AdapterError> {
        Err(AdapterError::not_supported("set_fullscreen"))
    }

    fn resize_to_screen(&self, _process: &str) -> Result<(), AdapterError> {
        Err(AdapterError::not_supported("resize_to_screen"))
    }

    fn zoom(&self, _process: &str) -> Result<(), AdapterError> {
        Err(AdapterError::not_supported("zoom"))
    }

    fn check_permissions(&self) -> PermissionStatus {
        PermissionStatus::Denied {
            suggestion: "Platform adapter not available".into(),
        }
    }
}
