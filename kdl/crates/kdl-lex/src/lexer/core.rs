//! Core lexer implementation.
//!
//! This module contains the Lexer struct and the driver loop that decides,
//! at each position, which sub-lexer gets to run.

use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::token_buffer::TokenSink;
use crate::unicode::{
    equals_len, is_dot, is_hash, is_quote, is_sign, is_unicode_space, newline_len,
};

/// Lexer for KDL documents.
///
/// The lexer walks the source once with a [`Cursor`] and appends every
/// recognised token to its [`TokenSink`]. It never fails: a character no
/// rule accepts becomes a one-character `Unknown` token.
pub(crate) struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens recognised so far.
    sink: TokenSink,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            sink: TokenSink::with_capacity(source.len()),
        }
    }

    /// Lexes the whole source and returns the recognised tokens.
    ///
    /// The last token is always the single `EndOfFile`.
    pub(crate) fn tokenize(mut self) -> TokenSink {
        while self.lex_next() {}
        debug_assert_eq!(self.sink.last_kind(), Some(TokenKind::EndOfFile));
        self.sink
    }

    /// Recognises whatever starts at the cursor.
    ///
    /// Every call that returns `true` has moved the cursor forward by at
    /// least one character. Returns `false` once `EndOfFile` is emitted.
    pub(crate) fn lex_next(&mut self) -> bool {
        let start = self.cursor.position();
        let current = self.cursor.current_char();

        if let Some(len) = newline_len(current, self.cursor.peek_char(1)) {
            self.cursor.advance_n(len);
            self.emit(TokenKind::Newline, start);
            return true;
        }

        if let Some(kind) = punctuation_kind(current) {
            self.cursor.advance();
            self.emit(kind, start);
            return true;
        }

        if self.cursor.is_at_end() {
            self.emit(TokenKind::EndOfFile, start);
            return false;
        }

        if current == '/' && self.lex_comment_or_slashdash() {
            return true;
        }

        if is_unicode_space(current) {
            self.cursor.advance();
            return true;
        }

        if let Some(len) = equals_len(current) {
            self.cursor.advance_n(len);
            self.emit(TokenKind::Equal, start);
            return true;
        }

        if self.lex_number() || self.lex_string_or_identifier() {
            return true;
        }

        self.cursor.advance();
        self.emit(TokenKind::Unknown, start);
        true
    }

    /// Dispatches between the string, keyword and identifier sub-lexers.
    fn lex_string_or_identifier(&mut self) -> bool {
        let current = self.cursor.current_char();
        let next = self.cursor.peek_char(1);

        if is_hash(current) {
            if is_hash(next) || is_quote(next) {
                return self.lex_raw_string();
            }
            return self.lex_keyword();
        }

        if is_quote(current) {
            self.lex_quoted_string();
            return true;
        }

        if (is_sign(current) && is_dot(next)) || is_dot(current) {
            return self.lex_dotted_identifier();
        }

        if is_sign(current) {
            return self.lex_signed_identifier();
        }

        self.lex_unambiguous_identifier()
    }

    /// Appends a token spanning from `start` to the cursor.
    pub(crate) fn emit(&mut self, kind: TokenKind, start: usize) {
        let end = self.cursor.position();
        self.sink.add_token(kind, start, end);
    }
}

/// Maps the single-character punctuation tokens.
fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::OpenParenthesis),
        ')' => Some(TokenKind::CloseParenthesis),
        '{' => Some(TokenKind::OpenBracket),
        '}' => Some(TokenKind::CloseBracket),
        ';' => Some(TokenKind::Terminator),
        _ => None,
    }
}
