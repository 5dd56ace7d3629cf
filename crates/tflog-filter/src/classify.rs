use std::sync::LazyLock;

use regex::Regex;

/// Timestamp prefix that marks the start of a new entry
static ENTRY_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("entry start pattern is valid")
});

/// Check if a line continues the previous entry (no timestamp prefix)
pub fn is_continuation(line: &str) -> bool {
    !ENTRY_START.is_match(line)
}
