use crate::{app_ops, window_ops};
use desk_reset_core::{
    adapter::{PermissionStatus, PlatformAdapter},
    error::AdapterError,
};

/// Drives System Events and the target apps through `osascript`.
pub struct MacOSAdapter;

impl MacOSAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacOSAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformAdapter for MacOSAdapter {
    fn list_running_apps(&self) -> Result<Vec<String>, AdapterError> {
        app_ops::list_running_apps()
    }

    fn quit(&self, name: &str) -> Result<(), AdapterError> {
        app_ops::quit(name)
    }

    fn is_installed(&self, name: &str) -> Result<bool, AdapterError> {
        app_ops::is_installed(name)
    }

    fn activate(&self, name: &str) -> Result<(), AdapterError> {
        app_ops::activate(name)
    }

    fn has_window(&self, process: &str) -> Result<bool, AdapterError> {
        window_ops::has_window(process)
    }

    fn set_fullscreen(&self, process: &str) -> Result<(), AdapterError> {
        window_ops::set_fullscreen(process)
    }

    fn resize_to_screen(&self, process: &str) -> Result<(), AdapterError> {
        window_ops::resize_to_screen(process)
    }

    fn zoom(&self, process: &str) -> Result<(), AdapterError> {
        window_ops::zoom(process)
    }

    fn check_permissions(&self) -> PermissionStatus {
        crate::permissions::check()
    }
}
