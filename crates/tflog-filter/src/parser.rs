use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::timestamp::TIMESTAMP_PATTERN;
use tflog_types::LogEntry;

/// Entry grammar:
/// `<timestamp> [<level>] <component>: <message>`, where the component and
/// its colon are optional. Word and space classes are ASCII-only.
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<timestamp>{TIMESTAMP_PATTERN}) \[(?P<level>[A-Za-z0-9_]+)\][\t\n\f\r ]+(?:(?P<component>[A-Za-z0-9_/.\t\n\f\r ]*):)?[\t\n\f\r ]*(?P<message>.+)"
    );
    Regex::new(&pattern).expect("entry pattern is valid")
});

/// Log parser for extracting structure from raw log lines
pub struct LogParser;

impl LogParser {
    /// Parse a new-entry line into a LogEntry
    pub fn parse(line: &str) -> Result<LogEntry, ParseError> {
        let caps = ENTRY_PATTERN.captures(line).ok_or_else(|| ParseError {
            line: line.to_string(),
        })?;

        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        Ok(LogEntry::new(
            group("timestamp").to_string(),
            group("level").to_string(),
            group("component").trim().to_string(),
            group("message").to_string(),
        ))
    }
}
