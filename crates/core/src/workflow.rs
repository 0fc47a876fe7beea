use crate::app::AppSpec;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    pub title: String,
    pub apps: Vec<AppSpec>,
}

impl Workflow {
    pub fn new(name: impl Into<String>, title: impl Into<String>, apps: Vec<AppSpec>) -> Self {
        Self { name: name.into(), title: title.into(), apps }
    }

    /// Closes everything and opens only Chrome.
    pub fn chrome_only() -> Self {
        Self::new(
            "chrome-only",
            "Chrome-Only Workflow",
            vec![AppSpec::with_process("Google Chrome", "Google Chrome")],
        )
    }
}

pub fn builtin() -> Vec<Workflow> {
    vec![Workflow::chrome_only()]
}

pub fn find(name: &str) -> Option<Workflow> {
    builtin().into_iter().find(|w| w.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_only_is_registered() {
        let wf = find("chrome-only").unwrap();
        assert_eq!(wf.title, "Chrome-Only Workflow");
        assert_eq!(wf.apps, vec![AppSpec::new("Google Chrome")]);
        assert!(find("nope").is_none());
    }

    #[test]
    fn names_are_unique() {
        let all = builtin();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
