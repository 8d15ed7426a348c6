//! Error types for elm-live
//!
//! Uses `thiserror` for library errors. The compiler invoker never returns
//! these; it reports through [`crate::compiler::CompilerInvocationResult`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for elm-live operations
pub type LiveResult<T> = Result<T, LiveError>;

/// Main error type for elm-live operations
#[derive(Error, Debug)]
pub enum LiveError {
    /// Malformed tool flags
    #[error("{0}")]
    ToolUsage(String),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(String),

    /// Dev server could not be started
    #[error("server error: {0}")]
    Server(String),

    /// A before/after build hook failed
    #[error("{hook} hook `{command}` failed: {message}")]
    Hook {
        hook: &'static str,
        command: String,
        message: String,
    },
}

impl From<notify::Error> for LiveError {
    fn from(err: notify::Error) -> Self {
        LiveError::Watch(err.to_string())
    }
}
