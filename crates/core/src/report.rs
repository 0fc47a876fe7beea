use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CloseReport {
    pub to_close: Vec<String>,
    pub closed: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedApp>,
    pub cancelled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailedApp {
    pub app: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MaximizeOutcome {
    Fullscreen,
    ResizedToScreen,
    Zoomed,
    NotMaximized { errors: Vec<String> },
}

impl MaximizeOutcome {
    pub fn is_maximized(&self) -> bool {
        !matches!(self, MaximizeOutcome::NotMaximized { .. })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AppOutcome {
    NotInstalled,
    Opened { maximize: MaximizeOutcome },
    Failed { error: String },
    Skipped,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppResult {
    pub app: String,
    pub process: String,
    #[serde(flatten)]
    pub outcome: AppOutcome,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OpenReport {
    pub apps: Vec<AppResult>,
    pub cancelled: bool,
}

impl OpenReport {
    pub fn outcome_of(&self, app: &str) -> Option<&AppOutcome> {
        self.apps.iter().find(|r| r.app == app).map(|r| &r.outcome)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkflowReport {
    pub workflow: String,
    pub close: CloseReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<OpenReport>,
    pub cancelled: bool,
}
