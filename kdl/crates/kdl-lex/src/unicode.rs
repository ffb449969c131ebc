//! Unicode character classes for the KDL lexer.
//!
//! This module provides the stateless predicates the lexer uses to decide
//! what kind of token may start at a given character. Every predicate is
//! total: it accepts any `char` and never panics.

/// Characters that may not appear in a bare identifier.
const NON_IDENTIFIER_CHARS: [char; 11] = ['\\', '/', '(', ')', '{', '}', ';', '[', ']', '"', '#'];

/// SMALL EQUALS SIGN.
const SMALL_EQUALS_SIGN: char = '\u{FE66}';

/// FULLWIDTH EQUALS SIGN.
const FULLWIDTH_EQUALS_SIGN: char = '\u{FF1D}';

/// HEAVY EQUALS SIGN. Outside the BMP, so UTF-16 encodes it as a surrogate
/// pair; in a Rust `&str` it is a single scalar value.
const HEAVY_EQUALS_SIGN: char = '\u{1F7F0}';

/// Checks if a character is a binary digit (`0` or `1`).
#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Checks if a character is an octal digit (`0` through `7`).
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Checks if a character is a decimal digit (`0` through `9`).
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a hexadecimal digit, in either case.
///
/// # Example
///
/// ```
/// use kdl_lex::unicode::is_hexadecimal_digit;
///
/// assert!(is_hexadecimal_digit('7'));
/// assert!(is_hexadecimal_digit('f'));
/// assert!(is_hexadecimal_digit('F'));
/// assert!(!is_hexadecimal_digit('g'));
/// ```
#[inline]
pub fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a character is a sign (`+` or `-`).
#[inline]
pub fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Checks if a character is a dot.
#[inline]
pub fn is_dot(c: char) -> bool {
    c == '.'
}

/// Checks if a character is a double quote.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"'
}

/// Checks if a character is a hash.
#[inline]
pub fn is_hash(c: char) -> bool {
    c == '#'
}

/// Checks if a character is Unicode white space.
///
/// Newline-class characters are white space too; the lexer tests for
/// newlines first so they become `Newline` tokens instead of being skipped.
#[inline]
pub fn is_unicode_space(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character is a newline on its own.
///
/// `\r` counts; the `\r\n` pair is only recognised by [`newline_len`].
#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\r' | '\n' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns the length in characters of the newline sequence starting with
/// `current`, given one character of lookahead.
///
/// # Example
///
/// ```
/// use kdl_lex::unicode::newline_len;
///
/// assert_eq!(newline_len('\r', '\n'), Some(2));
/// assert_eq!(newline_len('\r', 'a'), Some(1));
/// assert_eq!(newline_len('\u{2028}', '\0'), Some(1));
/// assert_eq!(newline_len('a', '\n'), None);
/// ```
pub fn newline_len(current: char, next: char) -> Option<usize> {
    if current == '\r' && next == '\n' {
        Some(2)
    } else if is_newline(current) {
        Some(1)
    } else {
        None
    }
}

/// Checks if a character is one of the equals signs KDL accepts.
#[inline]
pub fn is_equals(c: char) -> bool {
    matches!(
        c,
        '=' | SMALL_EQUALS_SIGN | FULLWIDTH_EQUALS_SIGN | HEAVY_EQUALS_SIGN
    )
}

/// Returns the length in characters of the equals sign at `c`.
///
/// Every accepted equals sign is a single Rust `char`, including the
/// HEAVY EQUALS SIGN that UTF-16 would split into two code units.
///
/// # Example
///
/// ```
/// use kdl_lex::unicode::equals_len;
///
/// assert_eq!(equals_len('='), Some(1));
/// assert_eq!(equals_len('\u{1F7F0}'), Some(1));
/// assert_eq!(equals_len(':'), None);
/// ```
pub fn equals_len(c: char) -> Option<usize> {
    is_equals(c).then_some(1)
}

/// Checks if a character is forbidden inside a bare identifier.
#[inline]
pub fn is_disallowed_in_identifier(c: char) -> bool {
    NON_IDENTIFIER_CHARS.contains(&c)
}

/// Checks if a character is forbidden anywhere in a document.
///
/// Covers C0 controls other than the white space ones, DELETE, the bidi
/// control characters, and the byte order mark.
///
/// # Example
///
/// ```
/// use kdl_lex::unicode::is_disallowed_everywhere;
///
/// assert!(is_disallowed_everywhere('\u{0000}'));
/// assert!(is_disallowed_everywhere('\u{202E}'));
/// assert!(is_disallowed_everywhere('\u{FEFF}'));
/// assert!(!is_disallowed_everywhere('\t'));
/// assert!(!is_disallowed_everywhere('a'));
/// ```
pub fn is_disallowed_everywhere(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'
            | '\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
    )
}

/// Checks if a character may appear in a bare identifier.
///
/// # Example
///
/// ```
/// use kdl_lex::unicode::is_identifier_char;
///
/// assert!(is_identifier_char('a'));
/// assert!(is_identifier_char('-'));
/// assert!(is_identifier_char('7'));
/// assert!(is_identifier_char('α'));
/// assert!(!is_identifier_char(' '));
/// assert!(!is_identifier_char('='));
/// assert!(!is_identifier_char('{'));
/// ```
pub fn is_identifier_char(c: char) -> bool {
    !is_unicode_space(c)
        && !is_newline(c)
        && !is_disallowed_in_identifier(c)
        && !is_disallowed_everywhere(c)
        && !is_equals(c)
}
