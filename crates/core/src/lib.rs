pub mod adapter;
pub mod app;
pub mod cancel;
pub mod commands;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod fake;
pub mod output;
pub mod report;
pub mod reporter;
pub mod workflow;

pub use adapter::{PermissionStatus, PlatformAdapter};
pub use app::AppSpec;
pub use cancel::CancelToken;
pub use config::{AutomationConfig, ExcludedSet};
pub use error::{AdapterError, AppError, ErrorCode};
pub use output::{ErrorPayload, Response};
pub use report::{AppOutcome, CloseReport, MaximizeOutcome, OpenReport, WorkflowReport};
pub use reporter::{ConsoleReporter, MemoryReporter, Reporter};
pub use workflow::Workflow;
