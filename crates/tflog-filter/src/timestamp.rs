use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use crate::error::{TimestampError, TimestampErrorKind};

/// Layout shared by entry timestamps and range bounds.
///
/// `%.f` reads an optional `.digits` fraction and `%z` a `±HHMM` offset,
/// so `2024-10-03T00:43:29.918-0400` and `2024-10-03T00:43:29-0400` are
/// both accepted.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Textual shape of a timestamp, used by the entry grammar as well.
/// Offsets never carry a colon.
pub(crate) const TIMESTAMP_PATTERN: &str =
    r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?[+-][0-9]{4}";

// chrono's %z also takes `-04:00`, so the shape is checked first
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{TIMESTAMP_PATTERN}$")).expect("timestamp pattern is valid")
});

/// Parse a timestamp string into a comparable instant
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let fail = |kind| TimestampError {
        value: value.to_string(),
        kind,
    };

    if !TIMESTAMP_SHAPE.is_match(value) {
        return Err(fail(TimestampErrorKind::Layout));
    }
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|source| fail(TimestampErrorKind::Invalid(source)))
}
