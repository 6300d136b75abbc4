//! Error types for pathshell.

use thiserror::Error;

/// Main error type for pathshell operations.
#[derive(Error, Debug)]
pub enum PathShellError {
    /// A built-in was called with the wrong number or shape of arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// Target path does not exist.
    #[error("path not valid: {0}")]
    PathNotFound(String),

    /// Target path exists but is a file where a directory is required.
    #[error("cannot move into a file: {0}")]
    NotADirectory(String),

    /// Referenced alias is not in the alias table.
    #[error("alias not found: {0}")]
    AliasNotFound(String),

    /// Alias file could not be read, parsed, or written.
    #[error("alias file error: {0}")]
    Persistence(String),

    /// External command could not be started.
    #[error("failed to launch command: {0}")]
    ExecutionLaunch(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for pathshell operations.
pub type Result<T> = std::result::Result<T, PathShellError>;
