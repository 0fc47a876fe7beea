use crate::{
    adapter::PlatformAdapter, app::AppSpec, error::AppError, report::MaximizeOutcome,
};
use serde_json::Value;

/// Fullscreen, then resize to the screen bounds, then the zoom button.
/// Stops at the first step that succeeds.
pub fn maximize_window(adapter: &dyn PlatformAdapter, spec: &AppSpec) -> MaximizeOutcome {
    let process = spec.process.as_str();
    let mut errors = Vec::new();

    match adapter.set_fullscreen(process) {
        Ok(()) => return MaximizeOutcome::Fullscreen,
        Err(e) => errors.push(format!("fullscreen: {e}")),
    }
    match adapter.resize_to_screen(process) {
        Ok(()) => return MaximizeOutcome::ResizedToScreen,
        Err(e) => errors.push(format!("resize: {e}")),
    }
    match adapter.zoom(process) {
        Ok(()) => return MaximizeOutcome::Zoomed,
        Err(e) => errors.push(format!("zoom: {e}")),
    }

    tracing::warn!(app = %spec.name, process, "every maximize method failed");
    MaximizeOutcome::NotMaximized { errors }
}

pub struct MaximizeArgs {
    pub spec: AppSpec,
}

pub fn execute(args: MaximizeArgs, adapter: &dyn PlatformAdapter) -> Result<Value, AppError> {
    let outcome = maximize_window(adapter, &args.spec);
    Ok(serde_json::json!({
        "app": args.spec.name,
        "process": args.spec.process,
        "maximized": outcome.is_maximized(),
        "outcome": outcome,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Call, FakeAdapter};

    fn chain(adapter: &FakeAdapter) -> Vec<Call> {
        adapter.calls()
    }

    #[test]
    fn fullscreen_success_stops_chain() {
        let adapter = FakeAdapter::new();
        let outcome = maximize_window(&adapter, &AppSpec::new("Notes"));
        assert_eq!(outcome, MaximizeOutcome::Fullscreen);
        assert_eq!(chain(&adapter), vec![Call::SetFullscreen("Notes".into())]);
    }

    #[test]
    fn falls_back_to_resize() {
        let adapter = FakeAdapter::new().failing_fullscreen(["Notes"]);
        let outcome = maximize_window(&adapter, &AppSpec::new("Notes"));
        assert_eq!(outcome, MaximizeOutcome::ResizedToScreen);
        assert_eq!(
            chain(&adapter),
            vec![Call::SetFullscreen("Notes".into()), Call::ResizeToScreen("Notes".into())]
        );
    }

    #[test]
    fn falls_back_to_zoom() {
        let adapter = FakeAdapter::new().failing_fullscreen(["Notes"]).failing_resize(["Notes"]);
        assert_eq!(maximize_window(&adapter, &AppSpec::new("Notes")), MaximizeOutcome::Zoomed);
        assert_eq!(chain(&adapter).len(), 3);
    }

    #[test]
    fn exhaustion_is_reported_not_raised() {
        let adapter = FakeAdapter::new()
            .failing_fullscreen(["Code"])
            .failing_resize(["Code"])
            .failing_zoom(["Code"]);
        let spec = AppSpec::with_process("Visual Studio Code", "Code");
        let outcome = maximize_window(&adapter, &spec);
        assert_eq!(
            chain(&adapter),
            vec![
                Call::SetFullscreen("Code".into()),
                Call::ResizeToScreen("Code".into()),
                Call::Zoom("Code".into()),
            ]
        );
        match outcome {
            MaximizeOutcome::NotMaximized { errors } => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].starts_with("fullscreen:"));
                assert!(errors[2].starts_with("zoom:"));
            }
            other => panic!("expected NotMaximized, got {other:?}"),
        }
    }

    #[test]
    fn execute_uses_process_name() {
        let adapter = FakeAdapter::new();
        let spec = AppSpec::with_process("Visual Studio Code", "Code");
        let v = execute(MaximizeArgs { spec }, &adapter).unwrap();
        assert_eq!(v["maximized"], true);
        assert_eq!(v["outcome"]["method"], "fullscreen");
        assert_eq!(adapter.calls(), vec![Call::SetFullscreen("Code".into())]);
    }
}
