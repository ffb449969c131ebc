//! Error types for kdl-lex.
//!
//! Lexing itself never fails: malformed input becomes `Unknown` tokens.
//! The only fallible operations are lookups into a finished token buffer.

use thiserror::Error;

/// Error type for token buffer lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenBufferError {
    /// Token index out of bounds
    #[error("Token index out of bounds: index {index}, length {length}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of tokens in the buffer.
        length: usize,
    },

    /// Byte offset outside the source text
    #[error("Offset out of bounds: offset {offset}, source has {length} bytes")]
    OffsetOutOfBounds {
        /// Requested byte offset.
        offset: usize,
        /// Length of the source text in bytes.
        length: usize,
    },
}

/// Result type alias for token buffer lookups
pub type TokenBufferResult<T> = std::result::Result<T, TokenBufferError>;
