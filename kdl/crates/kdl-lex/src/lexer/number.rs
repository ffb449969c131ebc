//! Number literal lexing.
//!
//! This module handles binary (`0b`), octal (`0o`), hexadecimal (`0x`) and
//! decimal literals. Only the token boundaries are decided here; the value
//! of a literal is left to the parser.

use crate::token::TokenKind;
use crate::unicode::{
    is_binary_digit, is_decimal_digit, is_hexadecimal_digit, is_octal_digit, is_sign,
};
use crate::Lexer;

/// Numeric base of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NumberBase {
    Binary,
    Octal,
    Hexadecimal,
    Decimal,
}

impl NumberBase {
    /// Returns the base selected by the character after a leading `0`.
    pub(crate) fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' => Some(NumberBase::Binary),
            'o' => Some(NumberBase::Octal),
            'x' => Some(NumberBase::Hexadecimal),
            _ => None,
        }
    }

    pub(crate) fn is_digit(self, c: char) -> bool {
        match self {
            NumberBase::Binary => is_binary_digit(c),
            NumberBase::Octal => is_octal_digit(c),
            NumberBase::Hexadecimal => is_hexadecimal_digit(c),
            NumberBase::Decimal => is_decimal_digit(c),
        }
    }

    pub(crate) fn token_kind(self) -> TokenKind {
        match self {
            NumberBase::Binary => TokenKind::NumberBinary,
            NumberBase::Octal => TokenKind::NumberOctal,
            NumberBase::Hexadecimal => TokenKind::NumberHexadecimal,
            NumberBase::Decimal => TokenKind::NumberDecimal,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal, if one starts at the cursor.
    ///
    /// A leading sign belongs to the number only when a decimal digit
    /// follows it. Returns `false` without consuming anything otherwise.
    ///
    /// # Number Formats
    ///
    /// - Binary: `0b1010`, `-0b1111_0000`
    /// - Octal: `0o777`
    /// - Hexadecimal: `0xFF`, `0xAB_CD`
    /// - Decimal: `42`, `+1_000`, `3.14`, `1e10`, `-2.5E-3`
    pub(crate) fn lex_number(&mut self) -> bool {
        let start = self.cursor.position();
        let sign_len = usize::from(is_sign(self.cursor.current_char()));
        if !is_decimal_digit(self.cursor.peek_char(sign_len)) {
            return false;
        }

        let prefixed = if self.cursor.peek_char(sign_len) == '0' {
            NumberBase::from_prefix(self.cursor.peek_char(sign_len + 1))
        } else {
            None
        };

        self.cursor.advance_n(sign_len);
        let kind = match prefixed {
            Some(base) => self.lex_prefixed_integer(base),
            None => self.lex_decimal(),
        };
        self.emit(kind, start);
        true
    }

    /// Lexes the prefix and digits of a binary, octal or hex integer.
    fn lex_prefixed_integer(&mut self, base: NumberBase) -> TokenKind {
        debug_assert_ne!(
            base,
            NumberBase::Decimal,
            "decimal literals have no base prefix"
        );
        self.cursor.advance_n(2);
        self.eat_digits(base);
        base.token_kind()
    }

    /// Lexes the integer, fraction and exponent parts of a decimal literal.
    fn lex_decimal(&mut self) -> TokenKind {
        self.eat_digits(NumberBase::Decimal);

        if self.cursor.current_char() == '.' && is_decimal_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.eat_digits(NumberBase::Decimal);
        }

        // Exponent groups repeat: `1e2e3` is a single literal.
        while matches!(self.cursor.current_char(), 'e' | 'E') {
            let next = self.cursor.peek_char(1);
            if is_sign(next) {
                self.cursor.advance_n(2);
            } else if is_decimal_digit(next) {
                self.cursor.advance();
            } else {
                break;
            }
            self.eat_digits(NumberBase::Decimal);
        }

        TokenKind::NumberDecimal
    }

    /// Consumes a run of digits of `base`.
    ///
    /// An underscore is consumed only when a digit of the same base follows
    /// it, so a literal never ends with `_` and never contains `__`.
    fn eat_digits(&mut self, base: NumberBase) -> usize {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if base.is_digit(c) || (c == '_' && base.is_digit(self.cursor.peek_char(1))) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.cursor.position() - start
    }
}
