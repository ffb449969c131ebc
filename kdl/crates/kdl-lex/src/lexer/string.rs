//! Quoted and raw string lexing.
//!
//! Strings are only delimited here. Escape sequences are recognised so that
//! `\"` does not end a quoted string, but they are not decoded.

use tracing::trace;

use crate::token::TokenKind;
use crate::unicode::{is_hash, is_hexadecimal_digit, is_quote, is_unicode_space};
use crate::Lexer;

/// Most hex digits allowed in a `\u{...}` escape.
const MAX_UNICODE_ESCAPE_DIGITS: usize = 6;

impl<'a> Lexer<'a> {
    /// Lexes a quoted string starting at `"`.
    ///
    /// A missing closing quote is tolerated: the token then runs to the end
    /// of the input.
    pub(crate) fn lex_quoted_string(&mut self) {
        let start = self.cursor.position();
        debug_assert!(is_quote(self.cursor.current_char()));
        self.cursor.advance();

        loop {
            if self.eat_escape() {
                continue;
            }
            if self.cursor.is_at_end() {
                break;
            }
            if is_quote(self.cursor.current_char()) {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }

        self.emit(TokenKind::IdentifierQuotedString, start);
    }

    /// Consumes one escape sequence at the cursor, if there is one.
    ///
    /// # Escape Forms
    ///
    /// - `\n`, `\r`, `\t`, `\\`, `\"`, `\b`, `\f`, `\s`
    /// - `\u{X}` through `\u{XXXXXX}`
    /// - `\` followed by a run of whitespace, newlines included
    ///
    /// A backslash that starts none of these is left unconsumed and is then
    /// read as ordinary string content.
    fn eat_escape(&mut self) -> bool {
        if self.cursor.current_char() != '\\' {
            return false;
        }

        let next = self.cursor.peek_char(1);
        if matches!(next, 'n' | 'r' | 't' | '\\' | '"' | 'b' | 'f' | 's') {
            self.cursor.advance_n(2);
            return true;
        }

        if next == 'u' && self.cursor.peek_char(2) == '{' {
            let snapshot = self.cursor.snapshot();
            self.cursor.advance_n(3);
            let mut digits = 0;
            while digits < MAX_UNICODE_ESCAPE_DIGITS
                && is_hexadecimal_digit(self.cursor.current_char())
            {
                self.cursor.advance();
                digits += 1;
            }
            if digits > 0 && self.cursor.match_char('}') {
                return true;
            }
            trace!(offset = snapshot.position, "malformed unicode escape");
            self.cursor.restore(snapshot);
            return false;
        }

        if is_unicode_space(next) {
            self.cursor.advance();
            self.cursor.eat_while(is_unicode_space);
            return true;
        }

        false
    }

    /// Lexes a raw string such as `#"text"#` or `##"a"#b"##`.
    ///
    /// The string closes at the first quote followed by exactly as many `#`
    /// as opened it; a quote followed by a different number of hashes is
    /// content. Returns `false` with the cursor restored if the hash run is
    /// not followed by `"`.
    pub(crate) fn lex_raw_string(&mut self) -> bool {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.position();

        let hashes = self.cursor.eat_while(is_hash);
        if !self.cursor.match_char('"') {
            trace!(offset = start, hashes, "hash run without opening quote");
            self.cursor.restore(snapshot);
            return false;
        }

        while !self.cursor.is_at_end() {
            if self.cursor.match_char('"') {
                if self.cursor.eat_while(is_hash) == hashes {
                    break;
                }
            } else {
                self.cursor.advance();
            }
        }

        self.emit(TokenKind::IdentifierRawString, start);
        true
    }
}
