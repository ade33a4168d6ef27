//! Error types for textbox_layout.

use std::fmt;
use std::io;

/// Result type alias for textbox_layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textbox_layout operations.
///
/// Only configuration loading and preset parsing are fallible. Layout and
/// placement never fail; they fall back to safe values instead.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a configuration file.
    Io(io::Error),
    /// Configuration JSON could not be parsed.
    Json(serde_json::Error),
    /// A preset field holds a value that cannot be parsed or is out of range.
    InvalidField {
        preset: String,
        field: &'static str,
        value: String,
    },
    /// A preset name is not present in the catalog.
    UnknownPreset(String),
    /// Any other malformed configuration.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "invalid configuration JSON: {e}"),
            Self::InvalidField {
                preset,
                field,
                value,
            } => {
                write!(f, "preset '{preset}': invalid value {value:?} for '{field}'")
            }
            Self::UnknownPreset(name) => write!(f, "no such preset: {name}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownPreset("DoesNotExist".to_string());
        assert_eq!(err.to_string(), "no such preset: DoesNotExist");

        let err = Error::InvalidField {
            preset: "Book".to_string(),
            field: "width",
            value: "wide".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'Book'"));
        assert!(msg.contains("\"wide\""));
        assert!(msg.contains("'width'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
