use std::fmt::{self, Display};
use std::io;

/// Provides `TracerError` and maps other errors to
/// convert to a `TracerError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum TracerError {
    /// The person has no cached degree: either degrees were never recomputed or
    /// the person is unreachable from every infected person.
    NotComputed { identifier: String },
    UnknownVertex { identifier: String },
    NotAdjacent {
        identifier1: String,
        identifier2: String,
    },
    CannotMakeEdgeToSelf { identifier: String },
    InvalidContactLevel(f64),
    InvalidSeverityLevel(f64),
    InvalidConfig(String),
    IoError(io::Error),
    JsonError(serde_json::Error),
}

impl TracerError {
    pub(crate) fn unknown_vertex(identifier: &str) -> Self {
        TracerError::UnknownVertex {
            identifier: identifier.to_string(),
        }
    }
}

impl From<io::Error> for TracerError {
    fn from(error: io::Error) -> Self {
        TracerError::IoError(error)
    }
}

impl From<serde_json::Error> for TracerError {
    fn from(error: serde_json::Error) -> Self {
        TracerError::JsonError(error)
    }
}

impl std::error::Error for TracerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TracerError::IoError(error) => Some(error),
            TracerError::JsonError(error) => Some(error),
            _ => None,
        }
    }
}

impl Display for TracerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TracerError::NotComputed { identifier } => {
                write!(f, "degrees apart not computed for person '{identifier}'")
            }
            TracerError::UnknownVertex { identifier } => {
                write!(f, "no person with identifier '{identifier}'")
            }
            TracerError::NotAdjacent {
                identifier1,
                identifier2,
            } => write!(f, "'{identifier1}' and '{identifier2}' are not in contact"),
            TracerError::CannotMakeEdgeToSelf { identifier } => {
                write!(f, "cannot make a contact from '{identifier}' to itself")
            }
            TracerError::InvalidContactLevel(level) => {
                write!(f, "invalid contact level {level}")
            }
            TracerError::InvalidSeverityLevel(level) => {
                write!(f, "severity level {level} is outside [0, 1]")
            }
            TracerError::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
            TracerError::IoError(error) => write!(f, "Error: {error}"),
            TracerError::JsonError(error) => write!(f, "Error: {error}"),
        }
    }
}
