//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] it covers and a slice
//! of the source text. Tokens are views: the text is borrowed from the
//! [`TokenBuffer`](crate::TokenBuffer) that produced them.

use std::fmt;

/// Lexical category of a token.
///
/// The set is closed. `Unknown` marks a single character no rule matched and
/// is the only way the lexer reports malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A character that starts no valid token.
    Unknown,
    /// End of input; always the last token, with an empty span.
    EndOfFile,
    /// A newline-class separator (`\r\n` or a single newline character).
    Newline,
    /// `=` or one of its Unicode look-alikes.
    Equal,
    /// `(`
    OpenParenthesis,
    /// `)`
    CloseParenthesis,
    /// `{`
    OpenBracket,
    /// `}`
    CloseBracket,
    /// `/-`, which comments out the element that follows it.
    SlashDash,
    /// `;`
    Terminator,
    /// `0b` integer.
    NumberBinary,
    /// `0o` integer.
    NumberOctal,
    /// `0x` integer.
    NumberHexadecimal,
    /// Decimal number, with optional fraction and exponent.
    NumberDecimal,
    /// Bare identifier.
    Identifier,
    /// `"..."` string.
    IdentifierQuotedString,
    /// `#"..."#` string.
    IdentifierRawString,
    /// `#true`
    KeywordTrue,
    /// `#false`
    KeywordFalse,
    /// `#nan`
    KeywordNaN,
    /// `#inf`
    KeywordInfinity,
    /// `#-inf`
    KeywordNegativeInfinity,
    /// `#null`
    KeywordNull,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 23] = [
        TokenKind::Unknown,
        TokenKind::EndOfFile,
        TokenKind::Newline,
        TokenKind::Equal,
        TokenKind::OpenParenthesis,
        TokenKind::CloseParenthesis,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::SlashDash,
        TokenKind::Terminator,
        TokenKind::NumberBinary,
        TokenKind::NumberOctal,
        TokenKind::NumberHexadecimal,
        TokenKind::NumberDecimal,
        TokenKind::Identifier,
        TokenKind::IdentifierQuotedString,
        TokenKind::IdentifierRawString,
        TokenKind::KeywordTrue,
        TokenKind::KeywordFalse,
        TokenKind::KeywordNaN,
        TokenKind::KeywordInfinity,
        TokenKind::KeywordNegativeInfinity,
        TokenKind::KeywordNull,
    ];

    /// Returns the fixed diagnostic name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use kdl_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::NumberHexadecimal.name(), "Number_Hexadecimal");
    /// assert_eq!(TokenKind::EndOfFile.to_string(), "EndOfFile");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Newline => "Newline",
            TokenKind::Equal => "Equal",
            TokenKind::OpenParenthesis => "OpenParenthesis",
            TokenKind::CloseParenthesis => "CloseParenthesis",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::SlashDash => "SlashDash",
            TokenKind::Terminator => "Terminator",
            TokenKind::NumberBinary => "Number_Binary",
            TokenKind::NumberOctal => "Number_Octal",
            TokenKind::NumberHexadecimal => "Number_Hexadecimal",
            TokenKind::NumberDecimal => "Number_Decimal",
            TokenKind::Identifier => "Identifier",
            TokenKind::IdentifierQuotedString => "Identifier_QuotedString",
            TokenKind::IdentifierRawString => "Identifier_RawString",
            TokenKind::KeywordTrue => "Keyword_True",
            TokenKind::KeywordFalse => "Keyword_False",
            TokenKind::KeywordNaN => "Keyword_NaN",
            TokenKind::KeywordInfinity => "Keyword_Infinity",
            TokenKind::KeywordNegativeInfinity => "Keyword_NegativeInfinity",
            TokenKind::KeywordNull => "Keyword_Null",
        }
    }

    /// Returns true for the four `Number_*` kinds.
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            TokenKind::NumberBinary
                | TokenKind::NumberOctal
                | TokenKind::NumberHexadecimal
                | TokenKind::NumberDecimal
        )
    }

    /// Returns true for the `#`-prefixed keyword literals.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordTrue
                | TokenKind::KeywordFalse
                | TokenKind::KeywordNaN
                | TokenKind::KeywordInfinity
                | TokenKind::KeywordNegativeInfinity
                | TokenKind::KeywordNull
        )
    }

    /// Returns true for identifiers in any of their three spellings.
    pub const fn is_string(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IdentifierQuotedString
                | TokenKind::IdentifierRawString
        )
    }

    /// Returns true for anything a parser would treat as a value.
    pub const fn is_literal(self) -> bool {
        self.is_number() || self.is_keyword() || self.is_string()
    }
}

/// Looks up a `#`-prefixed keyword by its full spelling, hash included.
///
/// Matching is exact and case-sensitive: `#True` is not a keyword.
///
/// # Example
///
/// ```
/// use kdl_lex::{keyword_from_text, TokenKind};
///
/// assert_eq!(keyword_from_text("#-inf"), Some(TokenKind::KeywordNegativeInfinity));
/// assert_eq!(keyword_from_text("#nil"), None);
/// ```
pub fn keyword_from_text(text: &str) -> Option<TokenKind> {
    match text {
        "#true" => Some(TokenKind::KeywordTrue),
        "#false" => Some(TokenKind::KeywordFalse),
        "#nan" => Some(TokenKind::KeywordNaN),
        "#inf" => Some(TokenKind::KeywordInfinity),
        "#-inf" => Some(TokenKind::KeywordNegativeInfinity),
        "#null" => Some(TokenKind::KeywordNull),
        _ => None,
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range of a token in its source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from `start` to `end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for zero-length spans.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A single lexical unit: its kind, its span, and the text it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Lexical category.
    pub kind: TokenKind,
    /// Location in the source.
    pub span: Span,
    /// The covered source text, borrowed from the token buffer.
    pub text: &'a str,
}

impl Token<'_> {
    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns true for zero-length tokens, i.e. `EndOfFile`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) {:?}", self.kind, self.span, self.text)
    }
}
