//! Error type for loading, writing and converting matrices

use spmat_core::SpmatError;
use std::path::PathBuf;

/// Errors raised by the I/O layer
#[derive(Debug)]
pub enum Error {
    /// Source not found or unreadable, or destination not writable
    Io(std::io::Error),
    /// A path that does not exist
    NotFound(PathBuf),
    /// Source bytes are not valid UTF-8
    Utf8 { line: usize },
    /// Format, shape or arithmetic error from the core
    Matrix(SpmatError),
    /// Malformed JSON snapshot
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::Utf8 { line } => write!(f, "Input is not valid UTF-8 (line {line})"),
            Error::Matrix(err) => write!(f, "{err}"),
            #[cfg(feature = "serde")]
            Error::Json(err) => write!(f, "Invalid JSON matrix: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<SpmatError> for Error {
    fn from(err: SpmatError) -> Self {
        Error::Matrix(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl Error {
    /// Core error, if this wraps one
    pub fn matrix_error(&self) -> Option<&SpmatError> {
        match self {
            Error::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for spmat I/O operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::FormatErrorKind;

    #[test]
    fn test_display() {
        let err = Error::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err: Error = SpmatError::format(3, FormatErrorKind::Entry).into();
        assert_eq!(err.to_string(), "Input file has wrong format (line 3)");
        assert_eq!(
            err.matrix_error(),
            Some(&SpmatError::format(3, FormatErrorKind::Entry))
        );
    }

    #[test]
    fn test_io_source() {
        use std::error::Error as _;

        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.source().is_some());
        assert!(err.matrix_error().is_none());
    }
}
