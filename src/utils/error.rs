use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common result type for docpress operations
pub type BuildResult<T> = Result<T, DocpressError>;

/// Error types for docpress operations
#[derive(Debug, Error)]
pub enum DocpressError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Front matter parsing error
    #[error("Front matter error in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    /// A `/regex/` exclude pattern that does not compile
    #[error("Invalid TOC exclude pattern `{pattern}`: {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Generic error message
    #[error("{0}")]
    Generic(String),
}

impl From<String> for DocpressError {
    fn from(msg: String) -> Self {
        DocpressError::Generic(msg)
    }
}

impl From<&str> for DocpressError {
    fn from(msg: &str) -> Self {
        DocpressError::Generic(msg.to_string())
    }
}
