use serde::Serialize;
use std::str::FromStr;

/// An application to open and arrange.
///
/// `name` is what the OS launches; `process` is what owns the window,
/// which for most apps is the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSpec {
    pub name: String,
    pub process: String,
}

impl AppSpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { process: name.clone(), name }
    }

    pub fn with_process(name: impl Into<String>, process: impl Into<String>) -> Self {
        Self { name: name.into(), process: process.into() }
    }
}

/// Parses `Name` or `Name:Process`.
impl FromStr for AppSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, process) = match s.split_once(':') {
            Some((n, p)) => (n.trim(), p.trim()),
            None => (s.trim(), s.trim()),
        };
        if name.is_empty() {
            return Err(format!("Invalid app spec '{s}': application name is empty"));
        }
        let process = if process.is_empty() { name } else { process };
        Ok(Self::with_process(name, process))
    }
}
