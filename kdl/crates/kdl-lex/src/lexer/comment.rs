//! Comment lexing.
//!
//! This module handles skipping line and block comments, and recognising
//! the slashdash marker `/-`, which unlike a comment is kept as a token.

use tracing::trace;

use crate::token::TokenKind;
use crate::unicode::is_newline;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles whatever starts with `/` at the cursor.
    ///
    /// Returns `false` without consuming anything for a lone `/`.
    pub(crate) fn lex_comment_or_slashdash(&mut self) -> bool {
        debug_assert_eq!(self.cursor.current_char(), '/');

        match self.cursor.peek_char(1) {
            '-' => {
                let start = self.cursor.position();
                self.cursor.advance_n(2);
                self.emit(TokenKind::SlashDash, start);
                true
            },
            '/' => {
                self.skip_line_comment();
                true
            },
            '*' => {
                self.skip_block_comment();
                true
            },
            _ => false,
        }
    }

    /// Skips a line comment.
    ///
    /// Stops before the newline so that it is still emitted as a token.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|c| !is_newline(c));
    }

    /// Skips a block comment.
    ///
    /// Handles nested block comments with a depth counter. An unterminated
    /// comment runs to the end of the input.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance_n(2);
        let mut depth: u32 = 1;

        while depth > 0 {
            if self.cursor.is_at_end() {
                trace!(offset = start, depth, "unterminated block comment");
                return;
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance_n(2);
                depth += 1;
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }
    }
}
