//! Error handling module for the kdlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the kdlt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of kdlt commands.
#[derive(Error, Debug)]
pub enum KdltError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Checked documents contained characters the lexer did not recognise.
    #[error("{count} unknown token(s) in {files} file(s)")]
    UnknownTokens {
        /// Total number of `Unknown` tokens.
        count: usize,
        /// Number of files with at least one `Unknown` token.
        files: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KdltError.
pub type Result<T> = std::result::Result<T, KdltError>;
