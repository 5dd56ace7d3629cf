use crate::error::FilterError;
use tflog_types::{Severity, token_priority};

/// Resolve a configured minimum level (case-insensitive)
pub fn parse_min_level(token: &str) -> Result<Severity, FilterError> {
    Severity::from_token(&token.to_uppercase())
        .ok_or_else(|| FilterError::InvalidLevel(token.to_string()))
}

/// Check an entry's level token against a minimum level token
pub fn accepts(level: &str, min_level: &str) -> Result<bool, FilterError> {
    let min = parse_min_level(min_level)?;
    Ok(meets_minimum(level, min))
}

/// Entry levels are matched exactly as written; unknown tokens never pass
pub fn meets_minimum(level: &str, min: Severity) -> bool {
    token_priority(level) >= min.priority()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_level_is_case_insensitive() {
        assert_eq!(parse_min_level("debug").unwrap(), Severity::Debug);
        assert_eq!(parse_min_level("Warn").unwrap(), Severity::Warn);
        assert_eq!(parse_min_level("ERROR").unwrap(), Severity::Error);
    }

    #[test]
    fn test_invalid_min_level() {
        for token in ["INVALID", "", "WARNING", "fatal"] {
            match parse_min_level(token) {
                Err(FilterError::InvalidLevel(t)) => assert_eq!(t, token),
                other => panic!("expected invalid level for {token:?}, got {other:?}"),
            }
        }
        assert!(accepts("INFO", "INVALID").is_err());
    }

    #[test]
    fn test_accepts_at_or_above_minimum() {
        assert!(accepts("INFO", "INFO").unwrap());
        assert!(accepts("ERROR", "info").unwrap());
        assert!(!accepts("DEBUG", "INFO").unwrap());
        assert!(accepts("TRACE", "trace").unwrap());
    }

    #[test]
    fn test_unknown_entry_levels_rejected() {
        for min in [Severity::Trace, Severity::Info, Severity::Error] {
            assert!(!meets_minimum("NOTICE", min));
            // Entry levels are not case-normalized
            assert!(!meets_minimum("error", min));
        }
    }
}
