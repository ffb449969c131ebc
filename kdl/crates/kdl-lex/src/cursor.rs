//! Character cursor for traversing KDL source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for tooling.

use crate::unicode::is_newline;

/// Sentinel returned when peeking past the end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source text character by character.
///
/// The cursor maintains the current byte position in the source string and
/// provides bounds-checked lookahead. Reading past the end never panics; it
/// yields [`EOF_CHAR`] instead. Because a document may itself contain U+0000,
/// callers that need to know whether input has ended must ask
/// [`Cursor::is_at_end`] rather than compare against the sentinel.
///
/// # Example
///
/// ```
/// use kdl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("node 1");
///
/// assert_eq!(cursor.current_char(), 'n');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'o');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Whether the previously consumed character was a carriage return, so
    /// that `\r\n` counts as a single line break.
    after_cr: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            after_cr: false,
        }
    }

    /// Returns the character at the cursor position, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        // Fast path for ASCII (most common case)
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 128 => b as char,
            Some(_) => self.peek_char(0),
            None => EOF_CHAR,
        }
    }

    /// Returns the character `offset` characters ahead of the current
    /// position (0 = current), or [`EOF_CHAR`] past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();

        if is_newline(c) {
            // The `\n` of `\r\n` was already counted with the `\r`.
            if !(c == '\n' && self.after_cr) {
                self.line += 1;
            }
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.after_cr = c == '\r';
    }

    /// Advances the cursor by the given number of characters, stopping at
    /// the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'd');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("/-");
    /// assert!(cursor.match_char('/'));
    /// assert!(!cursor.match_char('/'));
    /// assert_eq!(cursor.current_char(), '-');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds, returning how many were
    /// consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the current line number (1-based).
    ///
    /// Every newline-class character starts a new line; `\r\n` counts once.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\r\nb");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, in characters).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` (a byte position) to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("#true;");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "#true");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Sub-lexers that match tentatively take a snapshot first and
    /// [`restore`](Cursor::restore) it when the match fails.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("##\"raw\"##");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_n(3);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
            after_cr: self.after_cr,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.after_cr = snapshot.after_cr;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
    after_cr: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("node 1;");
        assert_eq!(cursor.current_char(), 'n');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ\u{1F7F0}");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\u{1F7F0}');
        cursor.advance();
        assert_eq!(cursor.position(), "αβ\u{1F7F0}".len());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_char_past_end() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), EOF_CHAR);
        assert_eq!(cursor.peek_char(100), EOF_CHAR);
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("=#");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('#'));
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("####\"");
        assert_eq!(cursor.eat_while(|c| c == '#'), 4);
        assert_eq!(cursor.current_char(), '"');
        assert_eq!(cursor.eat_while(|c| c == '#'), 0);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("line1\nline2\u{2028}line3");
        cursor.advance_n(5);
        assert_eq!(cursor.column(), 6);

        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);

        cursor.advance_n(6);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_crlf_counts_once() {
        let mut cursor = Cursor::new("a\r\n\rb");
        cursor.advance_n(3);
        assert_eq!(cursor.line(), 2);
        cursor.advance();
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_slice_from_and_remaining() {
        let mut cursor = Cursor::new("key=value");
        let start = cursor.position();
        cursor.advance_n(3);
        assert_eq!(cursor.slice_from(start), "key");
        assert_eq!(cursor.remaining(), "=value");
        cursor.advance_n(100);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance();
        cursor.advance();
        let snapshot = cursor.snapshot();

        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());

        cursor.restore(snapshot);
        assert_eq!(cursor.current_char(), '\n');
        cursor.advance();
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 0);
    }
}
