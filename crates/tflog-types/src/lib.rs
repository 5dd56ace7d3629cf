//! Shared types for tflog
//!
//! This crate contains the data structures passed between the filter
//! pipeline and the command line front end.

use chrono::{DateTime, FixedOffset};
use std::fmt;

// ============================================================================
// Log Types
// ============================================================================

/// Log severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Look up a level token exactly as written (case-sensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    /// Numeric priority used for minimum-level comparison
    pub fn priority(&self) -> u8 {
        match self {
            Self::Trace => 1,
            Self::Debug => 2,
            Self::Info => 3,
            Self::Warn => 4,
            Self::Error => 5,
        }
    }
}

/// Priority of a raw level token; unknown tokens rank below every level
pub fn token_priority(token: &str) -> u8 {
    Severity::from_token(token).map_or(0, |level| level.priority())
}

/// Inclusive time window; a missing bound is open on that side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TimeRange {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl TimeRange {
    pub fn new(start: Option<DateTime<FixedOffset>>, end: Option<DateTime<FixedOffset>>) -> Self {
        Self { start, end }
    }

    /// Check whether an instant falls inside the window
    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        if let Some(start) = &self.start {
            if instant < start {
                return false;
            }
        }
        if let Some(end) = &self.end {
            if instant > end {
                return false;
            }
        }
        true
    }
}

/// A single reconstructed log entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Timestamp exactly as written in the source
    pub timestamp: String,

    /// Level token as written
    pub level: String,

    /// Origin tag, trimmed (empty if absent)
    pub component: String,

    /// Message text, including appended continuation lines
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: String, level: String, component: String, message: String) -> Self {
        Self {
            timestamp,
            level,
            component,
            message,
        }
    }

    /// Append a continuation line to the message
    pub fn append_continuation(&mut self, line: &str) {
        self.message.push(' ');
        self.message.push_str(line.trim());
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.timestamp, self.level, self.component, self.message
        )
    }
}
