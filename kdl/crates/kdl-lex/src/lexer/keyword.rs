//! Keyword literal lexing.
//!
//! Keywords are the `#`-prefixed literals `#true`, `#false`, `#nan`, `#inf`,
//! `#-inf` and `#null`.

use tracing::trace;

use crate::token::keyword_from_text;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a keyword literal at a `#` not followed by `#` or `"`.
    ///
    /// Reads `#`, an optional `-` and a run of letters, then looks the text
    /// up in the keyword table. On a miss the cursor is restored and `false`
    /// is returned, leaving the `#` for the caller to report.
    pub(crate) fn lex_keyword(&mut self) -> bool {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.position();

        self.cursor.advance();
        self.cursor.match_char('-');
        self.cursor.eat_while(char::is_alphabetic);

        match keyword_from_text(self.cursor.slice_from(start)) {
            Some(kind) => {
                self.emit(kind, start);
                true
            },
            None => {
                trace!(offset = start, text = self.cursor.slice_from(start), "not a keyword");
                self.cursor.restore(snapshot);
                false
            },
        }
    }
}
