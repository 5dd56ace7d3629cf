use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A new-entry line that does not match the entry grammar
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not parse log line: {line}")]
pub struct ParseError {
    pub line: String,
}

/// A timestamp that does not follow `YYYY-MM-DDTHH:MM:SS[.fraction]±HHMM`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid timestamp {value:?}: {kind}")]
pub struct TimestampError {
    pub value: String,
    #[source]
    pub kind: TimestampErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampErrorKind {
    #[error("expected YYYY-MM-DDTHH:MM:SS[.fraction]±HHMM")]
    Layout,

    #[error(transparent)]
    Invalid(chrono::ParseError),
}

/// Which side of a time range a bound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start time"),
            Self::End => f.write_str("end time"),
        }
    }
}

/// Errors that abort a filtering run
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("please provide a log file path")]
    MissingFilePath,

    #[error("invalid {bound}: {source}")]
    InvalidBound {
        bound: Bound,
        #[source]
        source: TimestampError,
    },

    #[error("error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading log file: {0}")]
    Read(#[source] io::Error),

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
