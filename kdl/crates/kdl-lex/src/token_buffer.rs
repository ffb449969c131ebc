//! Token buffer: the result of lexing a document.
//!
//! The buffer owns the source text together with three parallel columns
//! (kind, start offset, end offset), one row per token in document order.
//! [`Token`] values handed out by the buffer borrow its source text and so
//! cannot outlive it.

use crate::error::{TokenBufferError, TokenBufferResult};
use crate::token::{Span, Token, TokenKind};
use crate::unicode::newline_len;

/// Append-only token columns written by the lexer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenSink {
    kinds: Vec<TokenKind>,
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl TokenSink {
    /// Creates an empty sink. `capacity` is only a hint.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(capacity),
            starts: Vec::with_capacity(capacity),
            ends: Vec::with_capacity(capacity),
        }
    }

    /// Appends a token covering `start..end`.
    pub(crate) fn add_token(&mut self, kind: TokenKind, start: usize, end: usize) {
        debug_assert!(start <= end, "token {kind} has inverted span {start}..{end}");
        debug_assert!(
            self.ends.last().map_or(true, |&previous| previous <= start),
            "token {kind} at {start} overlaps the previous token"
        );
        self.kinds.push(kind);
        self.starts.push(start);
        self.ends.push(end);
    }

    pub(crate) fn len(&self) -> usize {
        self.kinds.len()
    }

    pub(crate) fn last_kind(&self) -> Option<TokenKind> {
        self.kinds.last().copied()
    }
}

/// The tokens of one document, in document order, plus the document itself.
///
/// # Example
///
/// ```
/// use kdl_lex::{lex, TokenKind};
///
/// let buffer = lex("node #true");
/// let kinds: Vec<_> = buffer.iter().map(|token| token.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::KeywordTrue, TokenKind::EndOfFile]
/// );
/// assert_eq!(buffer.get(1).map(|token| token.text), Some("#true"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBuffer {
    source: String,
    sink: TokenSink,
    /// Byte offset of the first character of each line, ascending.
    line_starts: Vec<usize>,
}

impl TokenBuffer {
    /// Assembles a buffer from lexed columns.
    pub(crate) fn from_sink(source: String, sink: TokenSink) -> Self {
        let line_starts = line_starts(&source);
        Self {
            source,
            sink,
            line_starts,
        }
    }

    /// Number of tokens, including the trailing `EndOfFile`.
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    /// Returns true if the buffer holds no tokens.
    ///
    /// A buffer produced by [`lex`](crate::lex) always ends with
    /// `EndOfFile`, so this is false for every lexed buffer.
    pub fn is_empty(&self) -> bool {
        self.sink.len() == 0
    }

    /// The source text the tokens were lexed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the token at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Token<'_>> {
        let kind = *self.sink.kinds.get(index)?;
        let span = Span::new(self.sink.starts[index], self.sink.ends[index]);
        Some(Token {
            kind,
            span,
            text: &self.source[span.start..span.end],
        })
    }

    /// Returns the token at `index`, or an error naming the buffer length.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::{lex, TokenBufferError};
    ///
    /// let buffer = lex(";");
    /// assert!(buffer.try_get(1).is_ok());
    /// assert_eq!(
    ///     buffer.try_get(2),
    ///     Err(TokenBufferError::OutOfBounds { index: 2, length: 2 })
    /// );
    /// ```
    pub fn try_get(&self, index: usize) -> TokenBufferResult<Token<'_>> {
        self.get(index).ok_or(TokenBufferError::OutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// Kind of the token at `index`.
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.sink.kinds.get(index).copied()
    }

    /// Span of the token at `index`.
    pub fn span(&self, index: usize) -> Option<Span> {
        Some(Span::new(
            *self.sink.starts.get(index)?,
            *self.sink.ends.get(index)?,
        ))
    }

    /// All token kinds, in document order.
    pub fn kinds(&self) -> &[TokenKind] {
        &self.sink.kinds
    }

    /// Iterates over the tokens in document order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            index: 0,
        }
    }

    /// Number of `Unknown` tokens.
    pub fn unknown_count(&self) -> usize {
        self.sink
            .kinds
            .iter()
            .filter(|&&kind| kind == TokenKind::Unknown)
            .count()
    }

    /// Returns true if any character was not recognised.
    pub fn has_unknown(&self) -> bool {
        self.sink.kinds.contains(&TokenKind::Unknown)
    }

    /// Translates a byte offset into a 1-based (line, column) pair.
    ///
    /// Lines are separated by any newline-class character, with `\r\n`
    /// counting once; columns count characters.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::lex;
    ///
    /// let buffer = lex("a\r\n  [");
    /// let unknown = buffer.iter().find(|t| t.text == "[").unwrap();
    /// assert_eq!(buffer.line_column(unknown.span.start), Ok((2, 3)));
    /// ```
    pub fn line_column(&self, offset: usize) -> TokenBufferResult<(u32, u32)> {
        if offset > self.source.len() {
            return Err(TokenBufferError::OffsetOutOfBounds {
                offset,
                length: self.source.len(),
            });
        }

        // An offset inside a character resolves to the end of that character.
        let offset = (offset..self.source.len())
            .find(|&candidate| self.source.is_char_boundary(candidate))
            .unwrap_or(self.source.len());

        Ok(self.seek(LineCursor::START, offset).1)
    }

    /// Iterates over the tokens together with the (line, column) of their
    /// start, as [`line_column`](Self::line_column) would report it.
    ///
    /// The whole walk costs one pass over the source, however many tokens
    /// are asked about.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::{lex, TokenKind};
    ///
    /// let buffer = lex("node\n  [ ]");
    /// let unknown: Vec<_> = buffer
    ///     .iter_located()
    ///     .filter(|(token, _)| token.kind == TokenKind::Unknown)
    ///     .map(|(_, position)| position)
    ///     .collect();
    /// assert_eq!(unknown, [(2, 3), (2, 5)]);
    /// ```
    pub fn iter_located(&self) -> Located<'_> {
        Located {
            tokens: self.iter(),
            at: LineCursor::START,
        }
    }

    /// Moves `at` forward to `target`, a character boundary at or after it.
    fn seek(&self, mut at: LineCursor, target: usize) -> (LineCursor, (u32, u32)) {
        let crossed = self.line_starts[at.line..].partition_point(|&start| start <= target);
        if crossed > 0 {
            at.line += crossed;
            at.offset = self.line_starts[at.line - 1];
            at.column = 1;
        }
        at.column += self.source[at.offset..target].chars().count();
        at.offset = target;

        // Between the `\r` and `\n` of a pair: the line has already advanced.
        let bytes = self.source.as_bytes();
        if target > 0 && bytes.get(target) == Some(&b'\n') && bytes[target - 1] == b'\r' {
            return (at, (to_u32(at.line + 1), 1));
        }
        (at, (to_u32(at.line), to_u32(at.column)))
    }
}

/// Forward-only position within the line table.
#[derive(Clone, Copy, Debug)]
struct LineCursor {
    /// 1-based line number, also the count of line starts at or before `offset`.
    line: usize,
    offset: usize,
    column: usize,
}

impl LineCursor {
    const START: Self = Self {
        line: 1,
        offset: 0,
        column: 1,
    };
}

/// Records where each line begins. `\r\n` ends a single line.
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut chars = source.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        let next = chars.peek().map_or('\0', |&(_, next)| next);
        match newline_len(c, next) {
            Some(2) => {
                chars.next();
                starts.push(index + 2);
            },
            Some(_) => starts.push(index + c.len_utf8()),
            None => {},
        }
    }
    starts
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Iterator over the tokens of a [`TokenBuffer`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    buffer: &'a TokenBuffer,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.buffer.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Iterator over tokens and their start positions, from
/// [`TokenBuffer::iter_located`].
#[derive(Clone, Debug)]
pub struct Located<'a> {
    tokens: Iter<'a>,
    at: LineCursor,
}

impl<'a> Iterator for Located<'a> {
    type Item = (Token<'a>, (u32, u32));

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        let (at, position) = self.tokens.buffer.seek(self.at, token.span.start);
        self.at = at;
        Some((token, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl ExactSizeIterator for Located<'_> {}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = Token<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
