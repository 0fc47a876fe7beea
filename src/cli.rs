use clap::{Args, Parser, Subcommand};
use desk_reset_core::AppSpec;

#[derive(Parser, Debug)]
#[command(
    name = "desk-reset",
    version,
    about = "Close running apps and open a workflow's apps maximized",
    after_help = "\
CATEGORIES:
  Workflows:  run, workflows
  Steps:      close-all, open
  Apps:       list-apps, is-installed, maximize
  System:     status, version

Press Ctrl+C during the countdown to cancel before anything is closed,
or while closing to leave the remaining apps running."
)]
pub struct Cli {
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a built-in workflow: close everything, then open its apps.
    Run(RunArgs),
    /// Quit every running GUI app except the excluded ones.
    CloseAll(CloseAllArgs),
    /// Open and maximize the given apps (NAME or NAME:PROCESS).
    Open(OpenArgs),
    ListApps,
    IsInstalled(IsInstalledArgs),
    Maximize(MaximizeArgs),
    Workflows,
    Status,
    Version(VersionArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::CloseAll(_) => "close-all",
            Self::Open(_) => "open",
            Self::ListApps => "list-apps",
            Self::IsInstalled(_) => "is-installed",
            Self::Maximize(_) => "maximize",
            Self::Workflows => "workflows",
            Self::Status => "status",
            Self::Version(_) => "version",
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ExclusionArgs {
    /// Replace the default excluded set (repeatable).
    #[arg(long = "exclude", value_name = "APP")]
    pub exclude: Vec<String>,
    /// Keep this app open in addition to the excluded set (repeatable).
    #[arg(long = "keep", value_name = "APP")]
    pub keep: Vec<String>,
    /// Countdown ticks before closing.
    #[arg(long)]
    pub countdown: Option<u32>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    pub workflow: String,
    #[command(flatten)]
    pub exclusion: ExclusionArgs,
    #[arg(long)]
    pub window_timeout_ms: Option<u64>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CloseAllArgs {
    #[command(flatten)]
    pub exclusion: ExclusionArgs,
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct OpenArgs {
    #[arg(required = true, value_name = "APP[:PROCESS]")]
    pub apps: Vec<AppSpec>,
    #[arg(long)]
    pub window_timeout_ms: Option<u64>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct IsInstalledArgs {
    pub app: String,
}

#[derive(Parser, Debug)]
pub struct MaximizeArgs {
    pub app: String,
    /// Process owning the window, when it differs from the app name.
    #[arg(long)]
    pub process: Option<String>,
}

#[derive(Parser, Debug)]
pub struct VersionArgs {
    #[arg(long)]
    pub json: bool,
}
