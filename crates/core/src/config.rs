use rustc_hash::FxHashSet;
use std::time::Duration;

/// Apps kept open by default: the terminal running us and the desktop shell.
pub const DEFAULT_EXCLUDED: &[&str] = &["Terminal", "iTerm2", "iTerm", "Finder", "SystemUIServer"];

pub const DEFAULT_COUNTDOWN: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedSet(FxHashSet<String>);

impl ExcludedSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn extend<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names from `running` not in the set, in their original order.
    pub fn filter<'a>(&self, running: &'a [String]) -> Vec<&'a str> {
        running
            .iter()
            .map(String::as_str)
            .filter(|name| !self.contains(name))
            .collect()
    }
}

impl Default for ExcludedSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().copied())
    }
}

#[derive(Debug, Clone)]
pub struct AutomationConfig {
    pub excluded: ExcludedSet,
    /// Number of countdown ticks before anything is closed.
    pub countdown: u32,
    pub tick: Duration,
    pub quit_pause: Duration,
    pub after_close_pause: Duration,
    pub window_timeout: Duration,
    pub poll_interval: Duration,
    pub max_poll_interval: Duration,
    pub settle_delay: Duration,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            excluded: ExcludedSet::default(),
            countdown: DEFAULT_COUNTDOWN,
            tick: Duration::from_secs(1),
            quit_pause: Duration::from_millis(200),
            after_close_pause: Duration::from_secs(1),
            window_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(100),
            max_poll_interval: Duration::from_millis(500),
            settle_delay: Duration::from_millis(500),
        }
    }
}

impl AutomationConfig {
    /// Every delay set to zero; the fake adapter drives timing in tests.
    pub fn immediate() -> Self {
        Self {
            tick: Duration::ZERO,
            quit_pause: Duration::ZERO,
            after_close_pause: Duration::ZERO,
            poll_interval: Duration::ZERO,
            max_poll_interval: Duration::ZERO,
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_excluded(mut self, excluded: ExcludedSet) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_countdown(mut self, ticks: u32) -> Self {
        self.countdown = ticks;
        self
    }

    pub fn with_window_timeout(mut self, timeout: Duration) -> Self {
        self.window_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_terminals_and_finder() {
        let set = ExcludedSet::default();
        for name in ["Terminal", "iTerm2", "iTerm", "Finder", "SystemUIServer"] {
            assert!(set.contains(name), "{name} should be excluded");
        }
        assert!(!set.contains("Google Chrome"));
        assert_eq!(AutomationConfig::default().countdown, 3);
    }

    #[test]
    fn filter_preserves_enumeration_order() {
        let running: Vec<String> = ["Chrome", "Terminal", "Notes", "Finder", "Mail"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let set = ExcludedSet::default();
        assert_eq!(set.filter(&running), vec!["Chrome", "Notes", "Mail"]);
    }

    #[test]
    fn extend_adds_without_dropping_defaults() {
        let set = ExcludedSet::default().extend(["Slack"]);
        assert!(set.contains("Slack"));
        assert!(set.contains("Finder"));
        assert!(DEFAULT_EXCLUDED.iter().all(|name| set.contains(name)));
    }

    #[test]
    fn matching_is_exact() {
        let set = ExcludedSet::new(["Terminal"]);
        assert!(!set.contains("terminal"));
        assert!(!set.contains("Terminal Helper"));
    }
}
