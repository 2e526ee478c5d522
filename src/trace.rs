//! Debug trace output for the translation phases.
//!
//! Phases never print directly. They hand human-readable lines to a
//! [`TraceSink`], which makes tracing injectable and testable.

// Output sink for phase trace lines.
pub trait TraceSink {
    fn emit(&mut self, text: &str);
}

// A null sink for running without a trace.
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

/// TraceBuffer: collects trace lines in memory for tests or programmatic capture.
#[derive(Debug, Clone, Default)]
pub struct TraceBuffer {
    lines: Vec<String>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    /// True when any collected line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl TraceSink for TraceBuffer {
    fn emit(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
