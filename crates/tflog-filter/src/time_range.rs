use chrono::{DateTime, FixedOffset};

use crate::error::{Bound, FilterError, TimestampError};
use crate::timestamp::parse_timestamp;
use tflog_types::TimeRange;

/// Build a time range from optional bound strings (empty = unbounded)
pub fn parse_bounds(start: &str, end: &str) -> Result<TimeRange, FilterError> {
    let start = parse_optional(start).map_err(|source| FilterError::InvalidBound {
        bound: Bound::Start,
        source,
    })?;
    let end = parse_optional(end).map_err(|source| FilterError::InvalidBound {
        bound: Bound::End,
        source,
    })?;

    if let (Some(s), Some(e)) = (&start, &end) {
        if s > e {
            tracing::warn!(start = %s, end = %e, "start time is after end time, nothing will match");
        }
    }

    Ok(TimeRange::new(start, end))
}

fn parse_optional(value: &str) -> Result<Option<DateTime<FixedOffset>>, TimestampError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_timestamp(value).map(Some)
}

/// Check a raw entry timestamp against a configured range
pub fn timestamp_in_range(timestamp: &str, range: &TimeRange) -> Result<bool, TimestampError> {
    let instant = parse_timestamp(timestamp)?;
    Ok(range.contains(&instant))
}

/// Check a raw timestamp against raw bound strings.
///
/// The entry timestamp is always parsed, so a malformed timestamp is an
/// error even when both bounds are empty.
pub fn in_range(timestamp: &str, start: &str, end: &str) -> Result<bool, TimestampError> {
    let instant = parse_timestamp(timestamp)?;
    let range = TimeRange::new(parse_optional(start)?, parse_optional(end)?);
    Ok(range.contains(&instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimestampErrorKind;

    const TS: &str = "2024-10-03T00:43:29.918-0400";

    #[test]
    fn test_no_bounds_accepts_everything() {
        assert!(in_range(TS, "", "").unwrap());
        assert!(in_range("1999-01-01T00:00:00+0000", "", "").unwrap());
    }

    #[test]
    fn test_malformed_entry_timestamp_is_error() {
        assert!(in_range("2024-10-03 00:43:29", "", "").is_err());
        assert!(in_range("garbage", TS, "").is_err());
    }

    #[test]
    fn test_malformed_bound_is_error() {
        let err = in_range(TS, "last tuesday", "").unwrap_err();
        assert_eq!(err.value, "last tuesday");
        assert!(in_range(TS, "", "2024-10-03").is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(in_range(TS, TS, TS).unwrap());
        assert!(in_range(TS, "2024-10-03T00:43:29-0400", "2024-10-03T00:43:30-0400").unwrap());
        assert!(!in_range(TS, "2024-10-03T00:43:29.919-0400", "").unwrap());
        assert!(!in_range(TS, "", "2024-10-03T00:43:29.917-0400").unwrap());
    }

    #[test]
    fn test_single_sided_bounds() {
        assert!(in_range(TS, "2024-10-03T00:00:00-0400", "").unwrap());
        assert!(!in_range(TS, "2024-10-04T00:00:00-0400", "").unwrap());
        assert!(in_range(TS, "", "2024-10-04T00:00:00-0400").unwrap());
        assert!(!in_range(TS, "", "2024-10-02T00:00:00-0400").unwrap());
    }

    #[test]
    fn test_widening_bounds_is_monotonic() {
        let starts = [
            "2024-10-03T00:43:29.918-0400",
            "2024-10-03T00:40:00-0400",
            "2024-10-02T00:00:00-0400",
        ];
        let ends = [
            "2024-10-03T00:43:29.918-0400",
            "2024-10-03T00:50:00-0400",
            "2024-10-04T00:00:00-0400",
        ];
        for (i, start) in starts.iter().enumerate() {
            for end in &ends[i..] {
                assert!(in_range(TS, start, end).unwrap());
                // Dropping a bound widens the range further
                assert!(in_range(TS, "", end).unwrap());
                assert!(in_range(TS, start, "").unwrap());
            }
        }
    }

    #[test]
    fn test_parse_bounds() {
        let range = parse_bounds("", "").unwrap();
        assert_eq!(range, TimeRange::default());

        let range = parse_bounds("2024-10-03T00:00:00-0400", "").unwrap();
        assert!(range.start.is_some());
        assert!(range.end.is_none());
        assert!(timestamp_in_range(TS, &range).unwrap());

        let range = parse_bounds("", "2024-10-03T00:00:00-0400").unwrap();
        assert!(!timestamp_in_range(TS, &range).unwrap());
    }

    #[test]
    fn test_colon_offset_bounds_rejected() {
        // Bounds follow the same colonless offset layout as entries
        let err = in_range(TS, "2024-10-03T00:43:29-04:00", "").unwrap_err();
        assert_eq!(err.kind, TimestampErrorKind::Layout);
        assert!(matches!(
            parse_bounds("", "2024-10-03T00:43:29.918-04:00"),
            Err(FilterError::InvalidBound {
                bound: Bound::End,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_bounds_reports_side() {
        match parse_bounds("", "tomorrow") {
            Err(FilterError::InvalidBound { bound, source }) => {
                assert_eq!(bound, Bound::End);
                assert_eq!(source.value, "tomorrow");
            }
            other => panic!("expected invalid end bound, got {:?}", other),
        }
        assert!(matches!(
            parse_bounds("2024-99-03T00:00:00-0400", ""),
            Err(FilterError::InvalidBound {
                bound: Bound::Start,
                ..
            })
        ));
    }
}
