use std::io::Write;
use std::sync::Mutex;

/// Human-readable progress lines. Diagnostics go through `tracing` instead.
pub trait Reporter: Send + Sync {
    fn line(&self, text: &str);

    fn blank(&self) {
        self.line("");
    }

    fn info(&self, text: &str) {
        self.line(&format!("  {text}"));
    }

    fn success(&self, text: &str) {
        self.line(&format!("  ✓ {text}"));
    }

    fn failure(&self, text: &str) {
        self.line(&format!("  ✗ {text}"));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleReporter {
    stream: Stream,
}

impl ConsoleReporter {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }
}

impl Reporter for ConsoleReporter {
    fn line(&self, text: &str) {
        // Flushed per line so countdown ticks show up as they happen.
        let _ = match self.stream {
            Stream::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{text}").and_then(|_| out.flush())
            }
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{text}"),
        };
    }
}

/// Collects lines in memory.
#[derive(Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }
}
