//! kdl-lex - Lexical Analyzer for KDL Documents
//!
//! This crate provides a complete lexer (tokenizer) for the KDL document
//! language. It transforms source text into a buffer of tokens that can be
//! consumed by a parser.
//!
//! # Overview
//!
//! Lexing is total: every input, however malformed, produces a
//! [`TokenBuffer`] that ends in exactly one `EndOfFile` token. Characters no
//! rule accepts become one-character `Unknown` tokens, and it is up to the
//! parser to report them. Whitespace and comments are skipped and leave gaps
//! between token spans.
//!
//! # Example Usage
//!
//! ```
//! use kdl_lex::{lex, TokenKind};
//!
//! let buffer = lex("title \"hello\" #true\n");
//!
//! for token in &buffer {
//!     println!("{token}");
//! }
//!
//! assert_eq!(
//!     buffer.kinds(),
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::IdentifierQuotedString,
//!         TokenKind::KeywordTrue,
//!         TokenKind::Newline,
//!         TokenKind::EndOfFile,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, spans and token views
//! - [`token_buffer`] - The lexed document
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes used by the lexer
//! - [`error`] - Errors from checked token buffer lookups
//!
//! # Token Categories
//!
//! ## Structure
//!
//! - **Grouping**: `(`, `)`, `{`, `}`
//! - **Terminator**: `;`
//! - **Newline**: `\r\n`, `\r`, `\n`, NEL, FF, LS, PS
//! - **Equal**: `=` and its compatibility forms
//! - **SlashDash**: `/-`
//!
//! ## Literals
//!
//! - **Number**: `42`, `-1.5e3`, `0xFF`, `0b1010`, `0o777`
//! - **Identifier**: `node`, `-foo`, `.bar`
//! - **Quoted string**: `"hello\n"`
//! - **Raw string**: `#"C:\path"#`, `##"a"#b"##`
//! - **Keyword**: `#true`, `#false`, `#nan`, `#inf`, `#-inf`, `#null`
//!
//! ## Special
//!
//! - **EndOfFile**: End of input marker
//! - **Unknown**: Unrecognized characters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
mod lexer;
pub mod token;
pub mod token_buffer;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub(crate) use lexer::Lexer;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{TokenBufferError, TokenBufferResult};
pub use token::{keyword_from_text, Span, Token, TokenKind};
pub use token_buffer::{Iter, Located, TokenBuffer};

/// Lexes a KDL document.
///
/// The returned buffer takes ownership of the source text. Lexing never
/// fails; see the crate documentation for how malformed input is reported.
///
/// # Example
///
/// ```
/// use kdl_lex::{lex, TokenKind};
///
/// let buffer = lex("0x1_0_F");
/// let token = buffer.get(0).unwrap();
/// assert_eq!(token.kind, TokenKind::NumberHexadecimal);
/// assert_eq!(token.text, "0x1_0_F");
/// ```
pub fn lex(source: impl Into<String>) -> TokenBuffer {
    let source = source.into();
    let sink = Lexer::new(&source).tokenize();
    let buffer = TokenBuffer::from_sink(source, sink);

    tracing::debug!(
        bytes = buffer.source().len(),
        tokens = buffer.len(),
        unknown = buffer.unknown_count(),
        "lexed document"
    );

    buffer
}
