pub mod close_all;
pub mod countdown;
pub mod is_installed;
pub mod list_apps;
pub mod list_workflows;
pub mod maximize;
pub mod open_apps;
pub mod run_workflow;
pub mod status;
pub mod version;
pub mod wait;
