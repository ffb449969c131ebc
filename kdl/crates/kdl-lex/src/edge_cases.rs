//! Edge case tests for kdl-lex

#[cfg(test)]
mod tests {
    use crate::{lex, TokenKind};

    /// Lexes `source` into (kind, text) pairs, `EndOfFile` left out.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        lex(source)
            .iter()
            .filter(|t| t.kind != TokenKind::EndOfFile)
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|(kind, _)| kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\u{00A0}\u{2003}").is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        assert_eq!(kinds("// comment\n/* block */\n// another"), [TokenKind::Newline; 2]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), [(TokenKind::Identifier, "x".to_string())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} 1;", name));
        assert_eq!(t[0], (TokenKind::Identifier, name));
    }

    #[test]
    fn test_edge_deep_comment_nesting() {
        let source = format!("{}{}x", "/*".repeat(500), "*/".repeat(500));
        assert_eq!(lex_all(&source), [(TokenKind::Identifier, "x".to_string())]);
    }

    #[test]
    fn test_edge_empty_prefixed_numbers() {
        assert_eq!(kinds("0x"), [TokenKind::NumberHexadecimal]);
        assert_eq!(kinds("0b"), [TokenKind::NumberBinary]);
        assert_eq!(kinds("0o"), [TokenKind::NumberOctal]);
    }

    #[test]
    fn test_edge_exponent_without_digits() {
        assert_eq!(lex_all("1e+"), [(TokenKind::NumberDecimal, "1e+".to_string())]);
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007"), [(TokenKind::NumberDecimal, "007".to_string())]);
    }

    #[test]
    fn test_edge_huge_number_is_still_one_token() {
        assert_eq!(kinds("18446744073709551616123456789"), [TokenKind::NumberDecimal]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(
            lex_all("10px"),
            [
                (TokenKind::NumberDecimal, "10".to_string()),
                (TokenKind::Identifier, "px".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|&&k| k == TokenKind::OpenParenthesis).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("#Null"), [TokenKind::Unknown, TokenKind::Identifier]);
        assert_eq!(kinds("#null"), [TokenKind::KeywordNull]);
    }

    #[test]
    fn test_edge_bare_keyword_words() {
        assert_eq!(kinds("true false null"), [TokenKind::Identifier; 3]);
    }

    #[test]
    fn test_edge_vertical_tab_is_space() {
        assert_eq!(kinds("a\u{000B}b"), [TokenKind::Identifier; 2]);
    }

    #[test]
    fn test_edge_left_to_right_mark_is_allowed() {
        assert_eq!(lex_all("a\u{200E}b"), [(TokenKind::Identifier, "a\u{200E}b".to_string())]);
    }

    #[test]
    fn test_edge_bidi_overrides_are_unknown() {
        assert_eq!(
            kinds("a\u{202E}b"),
            [TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_embedded_nul_is_unknown() {
        assert_eq!(
            lex_all("a\0b"),
            [
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Unknown, "\0".to_string()),
                (TokenKind::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_crlf_inside_string() {
        assert_eq!(kinds("\"a\r\nb\""), [TokenKind::IdentifierQuotedString]);
    }

    #[test]
    fn test_edge_lone_cr_then_lf_pairs() {
        assert_eq!(
            lex_all("\n\r\n\r"),
            [
                (TokenKind::Newline, "\n".to_string()),
                (TokenKind::Newline, "\r\n".to_string()),
                (TokenKind::Newline, "\r".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_type_annotation() {
        assert_eq!(
            kinds("(u8)255"),
            [
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::CloseParenthesis,
                TokenKind::NumberDecimal,
            ]
        );
    }

    #[test]
    fn test_edge_property_with_heavy_equals() {
        assert_eq!(
            lex_all("k\u{1F7F0}v"),
            [
                (TokenKind::Identifier, "k".to_string()),
                (TokenKind::Equal, "\u{1F7F0}".to_string()),
                (TokenKind::Identifier, "v".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_slashdash_before_children() {
        assert_eq!(
            kinds("n /-{ a }"),
            [
                TokenKind::Identifier,
                TokenKind::SlashDash,
                TokenKind::OpenBracket,
                TokenKind::Identifier,
                TokenKind::CloseBracket,
            ]
        );
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let t = lex_all("\"unterminated");
        assert_eq!(t, [(TokenKind::IdentifierQuotedString, "\"unterminated".to_string())]);
    }

    #[test]
    fn test_err_unterminated_raw_string() {
        assert_eq!(kinds("#\"open"), [TokenKind::IdentifierRawString]);
    }

    #[test]
    fn test_err_invalid_chars() {
        let buffer = lex("[]\\");
        assert_eq!(buffer.unknown_count(), 3);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let t = kinds("node [1] #bad 2");
        assert_eq!(
            t,
            [
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::NumberDecimal,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::NumberDecimal,
            ]
        );
    }

    #[test]
    fn test_err_unknown_tokens_are_one_char() {
        for token in lex("«[]»\u{FEFF}\u{7F}").iter() {
            if token.kind == TokenKind::Unknown {
                assert_eq!(token.text.chars().count(), 1, "{token}");
            }
        }
    }

    #[test]
    fn test_err_stray_closing_comment() {
        assert_eq!(
            kinds("*/"),
            [TokenKind::Identifier, TokenKind::Unknown]
        );
    }
}
