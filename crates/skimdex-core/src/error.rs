//! Error types for skimdex-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for skimdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skimdex-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure, carrying the path that produced it
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input that could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Operation-level failure
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct a parse error from any message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Construct an operation error from any message.
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// True when the error wraps a not-found I/O failure.
    ///
    /// Batch callers use this to report-and-continue instead of aborting.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            Path::new("/tmp/missing.md"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.md"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_is_not_found() {
        let missing = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            Path::new("x"),
        );
        assert!(missing.is_not_found());

        let denied = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"),
            Path::new("x"),
        );
        assert!(!denied.is_not_found());

        assert!(!Error::parse("bad").is_not_found());
    }

    #[test]
    fn test_parse_and_operation_messages() {
        assert_eq!(Error::parse("bad header").to_string(), "Parse error: bad header");
        assert_eq!(
            Error::operation("write failed").to_string(),
            "Operation failed: write failed"
        );
    }
}
