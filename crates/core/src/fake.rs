//! Scriptable in-memory `PlatformAdapter` that records every call.

use crate::{
    adapter::{PermissionStatus, PlatformAdapter},
    cancel::CancelToken,
    error::AdapterError,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRunning,
    Quit(String),
    IsInstalled(String),
    Activate(String),
    HasWindow(String),
    SetFullscreen(String),
    ResizeToScreen(String),
    Zoom(String),
}

#[derive(Default)]
pub struct FakeAdapter {
    running: Vec<String>,
    list_error: Option<String>,
    installed: FxHashSet<String>,
    lookup_errors: FxHashSet<String>,
    quit_errors: FxHashSet<String>,
    /// Simulates Ctrl+C arriving while this app is being quit.
    quit_interrupt: Option<(String, CancelToken)>,
    activate_errors: FxHashSet<String>,
    fullscreen_errors: FxHashSet<String>,
    resize_errors: FxHashSet<String>,
    zoom_errors: FxHashSet<String>,
    /// Polls of `has_window` that answer "no" before a window shows up.
    window_delay: FxHashMap<String, u32>,
    windowless: FxHashSet<String>,
    polls: Mutex<FxHashMap<String, u32>>,
    calls: Mutex<Vec<Call>>,
}

fn set<const N: usize>(names: [&str; N]) -> FxHashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl FakeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.running = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_list(mut self, stderr: &str) -> Self {
        self.list_error = Some(stderr.to_string());
        self
    }

    pub fn installed<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.installed = set(names);
        self
    }

    pub fn failing_lookup<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.lookup_errors = set(names);
        self
    }

    pub fn failing_quit<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.quit_errors = set(names);
        self
    }

    pub fn cancelling_on_quit(mut self, name: &str, cancel: CancelToken) -> Self {
        self.quit_interrupt = Some((name.to_string(), cancel));
        self
    }

    pub fn failing_activate<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.activate_errors = set(names);
        self
    }

    pub fn failing_fullscreen<const N: usize>(mut self, processes: [&str; N]) -> Self {
        self.fullscreen_errors = set(processes);
        self
    }

    pub fn failing_resize<const N: usize>(mut self, processes: [&str; N]) -> Self {
        self.resize_errors = set(processes);
        self
    }

    pub fn failing_zoom<const N: usize>(mut self, processes: [&str; N]) -> Self {
        self.zoom_errors = set(processes);
        self
    }

    pub fn window_after(mut self, process: &str, polls: u32) -> Self {
        self.window_delay.insert(process.to_string(), polls);
        self
    }

    pub fn windowless<const N: usize>(mut self, processes: [&str; N]) -> Self {
        self.windowless = set(processes);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn quits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Quit(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Calls that act on `name` beyond the installation lookup.
    pub fn actions_on(&self, name: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| match c {
                Call::Activate(n)
                | Call::HasWindow(n)
                | Call::SetFullscreen(n)
                | Call::ResizeToScreen(n)
                | Call::Zoom(n) => n == name,
                _ => false,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn outcome(errors: &FxHashSet<String>, name: &str, what: &str) -> Result<(), AdapterError> {
        if errors.contains(name) {
            Err(AdapterError::script_failed(format!("{what} failed for {name}")))
        } else {
            Ok(())
        }
    }
}

impl PlatformAdapter for FakeAdapter {
    fn list_running_apps(&self) -> Result<Vec<String>, AdapterError> {
        self.record(Call::ListRunning);
        match &self.list_error {
            Some(stderr) => Err(AdapterError::script_failed(stderr.clone())),
            None => Ok(self.running.clone()),
        }
    }

    fn quit(&self, name: &str) -> Result<(), AdapterError> {
        self.record(Call::Quit(name.to_string()));
        if let Some((target, cancel)) = &self.quit_interrupt {
            if target == name {
                cancel.cancel();
            }
        }
        Self::outcome(&self.quit_errors, name, "quit")
    }

    fn is_installed(&self, name: &str) -> Result<bool, AdapterError> {
        self.record(Call::IsInstalled(name.to_string()));
        if self.lookup_errors.contains(name) {
            return Err(AdapterError::script_failed(format!("lookup failed for {name}")));
        }
        Ok(self.installed.contains(name))
    }

    fn activate(&self, name: &str) -> Result<(), AdapterError> {
        self.record(Call::Activate(name.to_string()));
        Self::outcome(&self.activate_errors, name, "activate")
    }

    fn has_window(&self, process: &str) -> Result<bool, AdapterError> {
        self.record(Call::HasWindow(process.to_string()));
        if self.windowless.contains(process) {
            return Ok(false);
        }
        let delay = self.window_delay.get(process).copied().unwrap_or(0);
        let mut polls = self
            .polls
            .lock()
            .map_err(|_| AdapterError::internal("poll counter poisoned"))?;
        let seen = polls.entry(process.to_string()).or_insert(0);
        *seen += 1;
        Ok(*seen > delay)
    }

    fn set_fullscreen(&self, process: &str) -> Result<(), AdapterError> {
        self.record(Call::SetFullscreen(process.to_string()));
        Self::outcome(&self.fullscreen_errors, process, "AXFullScreen")
    }

    fn resize_to_screen(&self, process: &str) -> Result<(), AdapterError> {
        self.record(Call::ResizeToScreen(process.to_string()));
        Self::outcome(&self.resize_errors, process, "resize")
    }

    fn zoom(&self, process: &str) -> Result<(), AdapterError> {
        self.record(Call::Zoom(process.to_string()));
        Self::outcome(&self.zoom_errors, process, "zoom")
    }

    fn check_permissions(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }
}
