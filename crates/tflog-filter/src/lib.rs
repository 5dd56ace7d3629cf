//! Log processing for tflog
//!
//! This crate reconstructs multi-line log entries and filters them by time
//! range, severity and keyword in a single streaming pass.

mod classify;
mod error;
mod filter;
mod parser;
mod pipeline;
mod severity;
mod time_range;
mod timestamp;

pub use classify::is_continuation;
pub use error::{Bound, FilterError, ParseError, Result, TimestampError, TimestampErrorKind};
pub use filter::{CompiledFilter, keyword_accepts};
pub use parser::LogParser;
pub use pipeline::{FilterStats, LogPipeline, filter_file, filter_logs, run};
pub use severity::{accepts as severity_accepts, meets_minimum, parse_min_level};
pub use time_range::{in_range, parse_bounds, timestamp_in_range};
pub use timestamp::{TIMESTAMP_FORMAT, parse_timestamp};

// Re-export types used in our public API
pub use tflog_types::{LogEntry, Severity, TimeRange};

/// Entry point handed to the command line layer:
/// `(file_path, min_level, start_time, end_time, keyword)`
pub type FilterFn = fn(&str, &str, &str, &str, &str) -> Result<FilterStats>;
