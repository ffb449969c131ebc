//! Identifier lexing.
//!
//! Bare identifiers come in three shapes, tried in this order:
//! dotted (`.foo`, `-.foo`), signed (`-foo`, `+`), and unambiguous (`foo`).
//! Shapes that would read as a number (`-1`, `.5`) never become identifiers.

use crate::token::TokenKind;
use crate::unicode::{is_decimal_digit, is_dot, is_identifier_char, is_sign};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier starting with a dot, optionally signed.
    ///
    /// The caller has checked that the cursor is at `.` or at a sign
    /// followed by `.`. Fails without consuming anything if a decimal digit
    /// follows the dot.
    pub(crate) fn lex_dotted_identifier(&mut self) -> bool {
        let start = self.cursor.position();
        let sign_len = usize::from(is_sign(self.cursor.current_char()));
        debug_assert!(is_dot(self.cursor.peek_char(sign_len)));

        if is_decimal_digit(self.cursor.peek_char(sign_len + 1)) {
            return false;
        }

        self.cursor.advance_n(sign_len + 1);
        self.cursor.eat_while(is_identifier_char);
        self.emit(TokenKind::Identifier, start);
        true
    }

    /// Lexes an identifier starting with a sign not followed by a dot.
    ///
    /// A lone `+` or `-` is a complete identifier.
    pub(crate) fn lex_signed_identifier(&mut self) -> bool {
        let start = self.cursor.position();
        debug_assert!(is_sign(self.cursor.current_char()));
        self.cursor.advance();

        let first = self.cursor.current_char();
        if is_identifier_char(first) && !is_decimal_digit(first) && !is_dot(first) {
            self.cursor.eat_while(is_identifier_char);
        }

        self.emit(TokenKind::Identifier, start);
        true
    }

    /// Lexes an identifier whose first character is not a digit, sign or dot.
    pub(crate) fn lex_unambiguous_identifier(&mut self) -> bool {
        let first = self.cursor.current_char();
        if self.cursor.is_at_end()
            || !is_identifier_char(first)
            || is_decimal_digit(first)
            || is_sign(first)
            || is_dot(first)
        {
            return false;
        }

        let start = self.cursor.position();
        self.cursor.eat_while(is_identifier_char);
        self.emit(TokenKind::Identifier, start);
        true
    }
}
