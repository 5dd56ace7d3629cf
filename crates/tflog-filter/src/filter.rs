use tflog_types::{LogEntry, Severity, TimeRange};

use crate::error::{FilterError, TimestampError};
use crate::severity::{meets_minimum, parse_min_level};
use crate::time_range::{parse_bounds, timestamp_in_range};

/// Keyword test against a reconstructed message (empty keyword = match all)
pub fn keyword_accepts(message: &str, keyword: &str) -> bool {
    keyword.is_empty() || message.contains(keyword)
}

/// Validated filter configuration, applied to each finalized entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledFilter {
    /// Inclusive time window
    time_range: TimeRange,

    /// Lowest level that passes
    min_level: Severity,

    /// Literal, case-sensitive substring (empty = all)
    keyword: String,
}

impl CompiledFilter {
    /// Validate raw configuration strings before any line is read
    pub fn new(min_level: &str, start: &str, end: &str, keyword: &str) -> Result<Self, FilterError> {
        let min_level = parse_min_level(min_level)?;
        let time_range = parse_bounds(start, end)?;

        Ok(Self {
            time_range,
            min_level,
            keyword: keyword.to_string(),
        })
    }

    /// Check if a log entry passes every filter.
    ///
    /// Runs time range, then severity, then keyword, stopping at the first
    /// rejection. Only a malformed entry timestamp is an error.
    pub fn matches(&self, entry: &LogEntry) -> Result<bool, TimestampError> {
        if !timestamp_in_range(&entry.timestamp, &self.time_range)? {
            return Ok(false);
        }
        if !meets_minimum(&entry.level, self.min_level) {
            return Ok(false);
        }
        Ok(keyword_accepts(&entry.message, &self.keyword))
    }
}

impl Default for CompiledFilter {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            min_level: Severity::Info,
            keyword: String::new(),
        }
    }
}
