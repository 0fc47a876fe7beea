use crate::{
    adapter::PlatformAdapter,
    cancel::CancelToken,
    commands::{close_all::close_all_gui_applications, open_apps::open_and_maximize_applications},
    config::AutomationConfig,
    report::WorkflowReport,
    reporter::Reporter,
    workflow::Workflow,
};

const BANNER_WIDTH: usize = 60;

/// Banner, close everything, open the workflow's apps, "Done!".
/// A cancelled close step skips the open step entirely.
pub fn run_workflow(
    adapter: &dyn PlatformAdapter,
    workflow: &Workflow,
    config: &AutomationConfig,
    cancel: &CancelToken,
    reporter: &dyn Reporter,
) -> WorkflowReport {
    let rule = "=".repeat(BANNER_WIDTH);
    reporter.line(&rule);
    reporter.line(&workflow.title);
    reporter.line(&rule);
    reporter.blank();

    tracing::debug!(workflow = %workflow.name, apps = workflow.apps.len(), "running workflow");
    let close = close_all_gui_applications(adapter, config, cancel, reporter);
    if close.cancelled {
        return WorkflowReport {
            workflow: workflow.name.clone(),
            close,
            open: None,
            cancelled: true,
        };
    }

    let open = open_and_maximize_applications(adapter, &workflow.apps, config, cancel, reporter);
    let cancelled = open.cancelled;
    if !cancelled {
        reporter.blank();
        reporter.line("Done!");
    }
    WorkflowReport { workflow: workflow.name.clone(), close, open: Some(open), cancelled }
}
