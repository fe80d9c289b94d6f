//! Error types.

use crate::geometry::PointParseError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors raised while reading input.
#[derive(Debug)]
pub enum Error {
    /// The input could not be opened or read.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        Error::Io { path, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io {
                path: Some(path),
                source,
            } => write!(f, "cannot read '{}': {}", path.display(), source),
            Error::Io { path: None, source } => write!(f, "cannot read input: {}", source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
        }
    }
}

/// A problem with a single input record. Never fatal; the record is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Fewer than the three required tokens.
    TooFewFields { found: usize },
    /// A pickup or dropoff token is not a point.
    InvalidPoint(PointParseError),
    /// The line is not valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::TooFewFields { found } => {
                write!(f, "expected at least 3 fields, found {}", found)
            }
            LineError::InvalidPoint(err) => write!(f, "{}", err),
            LineError::InvalidEncoding => write!(f, "line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for LineError {}

impl From<PointParseError> for LineError {
    fn from(err: PointParseError) -> Self {
        LineError::InvalidPoint(err)
    }
}
