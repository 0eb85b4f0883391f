//! Typed error handling for unexport.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for unexport operations.
///
/// Program-loading failures are fatal: the analysis never produces a
/// partial report. Unrecognized symbol kinds are deliberately *not*
/// errors - the rename resolver degrades to the default qualified form.
#[derive(Error, Debug)]
pub enum UnexportError {
    /// I/O error when reading model exports or configuration
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The program model provider could not load the requested module set
    #[error("Load error: {message}")]
    Load { message: String },

    /// A provider export was present but malformed
    #[error("Model error at {path}: {message}")]
    Model { path: PathBuf, message: String },

    /// The requested target module is not among the loaded modules
    #[error("'{path}' is not a valid package")]
    TargetNotFound { path: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl UnexportError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a malformed-model error.
    pub fn model(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Model {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a target-not-found error.
    pub fn target_not_found(path: impl Into<String>) -> Self {
        Self::TargetNotFound { path: path.into() }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (analysis can still run).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Model { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for unexport results.
pub type UnexportResult<T> = Result<T, UnexportError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> UnexportResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> UnexportResult<T> {
        self.map_err(|e| UnexportError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_message() {
        let err = UnexportError::target_not_found("example.com/missing");
        assert_eq!(
            err.to_string(),
            "'example.com/missing' is not a valid package"
        );
    }

    #[test]
    fn test_io_error() {
        let err = UnexportError::io(
            PathBuf::from("/model/target.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, UnexportError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/model/target.json")));
        assert!(err.to_string().contains("/model/target.json"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(UnexportError::config("/unexport.toml", "bad key").is_recoverable());
        assert!(!UnexportError::load("missing dependency").is_recoverable());
        assert!(!UnexportError::target_not_found("x").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let unexport_result = result.with_path("/missing/model.json");
        assert!(unexport_result.is_err());
    }
}
