//! Diagnostic report sink
//!
//! Every decoded field is pushed to a write-only sink as it becomes known,
//! in decode order. Sinks are diagnostics only; dropping every report must
//! not change extraction results.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// One reported field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportValue<'a> {
    /// Decoded text field
    Text(&'a str),
    /// Decoded numeric field
    Unsigned(u32),
}

impl fmt::Display for ReportValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Unsigned(n) => write!(f, "{}", n),
        }
    }
}

/// Write-only sink for decoded (key, value) pairs
pub trait ReportSink {
    /// Record one decoded field
    fn record(&mut self, key: &'static str, value: ReportValue<'_>);
}

/// Sink that drops every report
pub struct NullReport;

impl ReportSink for NullReport {
    fn record(&mut self, _key: &'static str, _value: ReportValue<'_>) {}
}

/// Sink that keeps every pair in decode order
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<(&'static str, String)>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Recorded pairs, oldest first
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }
}

impl ReportSink for Transcript {
    fn record(&mut self, key: &'static str, value: ReportValue<'_>) {
        self.entries.push((key, format!("{}", value)));
    }
}
