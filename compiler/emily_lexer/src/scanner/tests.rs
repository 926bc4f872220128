use emily_diagnostic::{catalog, ErrorCode};
use emily_ir::{SourceBuffer, Span, Token, TokenKind, TokenValue};
use pretty_assertions::assert_eq;

use super::Scanner;

fn scan_all(source: &SourceBuffer) -> (Vec<Token<'_>>, Scanner<'_>) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.by_ref().collect();
    (tokens, scanner)
}

/// Scan `text` and expect exactly one token and no diagnostics.
fn single(text: &str, check: impl FnOnce(&Token<'_>)) {
    let source = SourceBuffer::anonymous(text);
    let (tokens, scanner) = scan_all(&source);
    assert_eq!(tokens.len(), 1, "{tokens:?}");
    assert!(scanner.diagnostics().is_empty(), "{:?}", scanner.diagnostics());
    check(&tokens[0]);
}

fn kinds(text: &str) -> Vec<TokenKind> {
    let source = SourceBuffer::anonymous(text);
    let (tokens, _) = scan_all(&source);
    tokens.iter().map(|t| t.kind).collect()
}

// === Lookahead ===

#[test]
fn empty_source_yields_nothing() {
    let source = SourceBuffer::anonymous("");
    let mut scanner = Scanner::new(&source);
    assert!(scanner.peek().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn peek_is_stable_until_next() {
    let source = SourceBuffer::anonymous("abc 12");
    let mut scanner = Scanner::new(&source);

    let first = scanner.peek().cloned().unwrap();
    assert_eq!(scanner.peek(), Some(&first));
    assert_eq!(scanner.peek(), Some(&first));
    assert_eq!(scanner.next(), Some(first));

    let second = scanner.peek().cloned().unwrap();
    assert_eq!(second.kind, TokenKind::Whitespace);
    assert_eq!(scanner.next(), Some(second));
}

#[test]
fn next_without_peek_scans() {
    let source = SourceBuffer::anonymous("a.b");
    let mut scanner = Scanner::new(&source);
    assert_eq!(scanner.next().unwrap().text, "a");
    assert_eq!(scanner.next().unwrap().kind, TokenKind::Dot);
    assert_eq!(scanner.peek().unwrap().text, "b");
    assert_eq!(scanner.next().unwrap().text, "b");
}

#[test]
fn end_of_input_is_idempotent() {
    let source = SourceBuffer::anonymous("x");
    let mut scanner = Scanner::new(&source);
    assert!(scanner.next().is_some());
    for _ in 0..3 {
        assert!(scanner.peek().is_none());
        assert!(scanner.next().is_none());
    }
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn peek_does_not_duplicate_diagnostics() {
    let source = SourceBuffer::anonymous("@");
    let mut scanner = Scanner::new(&source);
    let _ = scanner.peek();
    let _ = scanner.peek();
    let _ = scanner.next();
    assert_eq!(scanner.diagnostics().len(), 1);
}

// === Whitespace ===

#[test]
fn four_spaces_are_one_token() {
    single("    ", |t| {
        assert_eq!(t.kind, TokenKind::Whitespace);
        assert_eq!((t.start, t.end), (0, 4));
        assert_eq!(t.value, None);
    });
}

#[test]
fn whitespace_run_stops_at_text() {
    let source = SourceBuffer::anonymous(" \t  abc");
    let (tokens, _) = scan_all(&source);
    assert_eq!(tokens[0].kind, TokenKind::Whitespace);
    assert_eq!(tokens[0].text, " \t  ");
    assert_eq!(tokens[1].text, "abc");
}

#[test]
fn line_breaks_are_whitespace() {
    let source = SourceBuffer::anonymous(" \n\r\nabc\n");
    let (tokens, _) = scan_all(&source);
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, [" \n\r\n", "abc", "\n"]);
}

// === Identifiers ===

#[test]
fn identifier_with_digits_and_underscores() {
    single("This_42_That", |t| {
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.value, Some(TokenValue::Symbol("This_42_That")));
    });
}

#[test]
fn identifier_may_start_with_underscore() {
    single("_UnderscoresCanStart", |t| {
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.value, Some(TokenValue::Symbol("_UnderscoresCanStart")));
    });
}

#[test]
fn identifier_stops_at_operator() {
    assert_eq!(
        kinds("a1+b"),
        [TokenKind::Identifier, TokenKind::Plus, TokenKind::Identifier]
    );
}

#[test]
fn unicode_letters_form_identifiers() {
    single("größe", |t| {
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.end, "größe".len() as u32);
    });
}

// === Integers ===

#[test]
fn integer_literal() {
    single("1234", |t| {
        assert_eq!(t.kind, TokenKind::IntegerLiteral);
        assert_eq!(t.value, Some(TokenValue::Integer(1234)));
    });
}

#[test]
fn integer_underscores_are_stripped() {
    single("100_000", |t| {
        assert_eq!(t.value, Some(TokenValue::Integer(100_000)));
        assert_eq!(t.text, "100_000");
    });
}

#[test]
fn signed_integers() {
    single("+1234", |t| {
        assert_eq!(t.value, Some(TokenValue::Integer(1234)));
    });
    single("-100_000", |t| {
        assert_eq!(t.value, Some(TokenValue::Integer(-100_000)));
        assert_eq!(t.text, "-100_000");
    });
    single("+100_000", |t| {
        assert_eq!(t.value, Some(TokenValue::Integer(100_000)));
    });
}

#[test]
fn sign_needs_an_adjacent_digit() {
    assert_eq!(
        kinds("- 5"),
        [TokenKind::Minus, TokenKind::Whitespace, TokenKind::IntegerLiteral]
    );
    assert_eq!(kinds("-x"), [TokenKind::Minus, TokenKind::Identifier]);
    assert_eq!(kinds("+_1"), [TokenKind::Plus, TokenKind::Identifier]);
}

#[test]
fn binary_minus_without_spaces_is_a_signed_literal() {
    assert_eq!(kinds("a-1"), [TokenKind::Identifier, TokenKind::IntegerLiteral]);
}

#[test]
fn smallest_integer_fits() {
    single("-9223372036854775808", |t| {
        assert_eq!(t.value, Some(TokenValue::Integer(i64::MIN)));
    });
}

#[test]
fn oversized_integer_is_clamped_and_reported() {
    let text = format!("{}0", i64::MAX);
    let source = SourceBuffer::anonymous(text.as_str());
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[0].value, Some(TokenValue::Integer(i64::MAX)));

    let diags = scanner.diagnostics().as_slice();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), ErrorCode::E0003);
    assert_eq!(diags[0].span(), Span::new(0, 20));
    assert_eq!(
        diags[0].message(),
        "The Integer literal 92233720368547758070 is too large"
    );
}

#[test]
fn oversized_negative_integer_clamps_to_max() {
    let source = SourceBuffer::anonymous("-9_223_372_036_854_775_809");
    let (tokens, scanner) = scan_all(&source);
    assert_eq!(tokens[0].value, Some(TokenValue::Integer(i64::MAX)));
    let diag = &scanner.diagnostics().as_slice()[0];
    assert_eq!(
        diag.message(),
        "The Integer literal -9_223_372_036_854_775_809 is too large"
    );
    assert_eq!(diag.source_text(), "-9_223_372_036_854_775_809");
}

// === Strings ===

#[test]
fn simple_string() {
    single("\"hello\"", |t| {
        assert_eq!(t.kind, TokenKind::StringLiteral);
        assert_eq!(t.value, Some(TokenValue::Str("hello".into())));
        assert_eq!(t.text, "\"hello\"");
    });
}

#[test]
fn empty_string() {
    single("\"\"", |t| {
        assert_eq!(t.value, Some(TokenValue::Str(String::new())));
    });
}

#[test]
fn string_escapes_are_decoded() {
    single("\"a\\nbc\"", |t| {
        assert_eq!(t.value, Some(TokenValue::Str("a\nbc".into())));
    });
    single("\"say \\\"hi\\\" \\\\ bye\"", |t| {
        assert_eq!(t.value, Some(TokenValue::Str("say \"hi\" \\ bye".into())));
    });
}

#[test]
fn string_keeps_raw_line_breaks() {
    single("\"two\nlines\"", |t| {
        assert_eq!(t.value, Some(TokenValue::Str("two\nlines".into())));
    });
}

#[test]
fn invalid_escape_is_dropped_and_reported() {
    let source = SourceBuffer::anonymous("\"invalid escape \\y sequence\"");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].value,
        Some(TokenValue::Str("invalid escape  sequence".into()))
    );

    let diags = scanner.diagnostics().as_slice();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].descriptor(), &catalog::INVALID_ESCAPE_SEQUENCE);
    assert_eq!(diags[0].message(), "Invalid Escape Sequence '\\y'");
    assert_eq!(diags[0].span(), Span::new(16, 2));
    assert_eq!(diags[0].source_text(), "\\y");
}

#[test]
fn scanning_continues_after_invalid_escape() {
    let source = SourceBuffer::anonymous("\"\\q\\n\" x");
    let (tokens, scanner) = scan_all(&source);
    assert_eq!(tokens[0].value, Some(TokenValue::Str("\n".into())));
    assert_eq!(tokens[2].text, "x");
    assert_eq!(scanner.diagnostics().len(), 1);
}

#[test]
fn unterminated_string() {
    let source = SourceBuffer::anonymous("\"this doesn't end");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "\"this doesn't end");
    assert_eq!(
        tokens[0].value,
        Some(TokenValue::Str("this doesn't end".into()))
    );

    let diags = scanner.diagnostics().as_slice();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), ErrorCode::E0002);
    assert_eq!(diags[0].span(), Span::new(0, 17));
}

#[test]
fn backslash_at_end_is_unterminated() {
    let source = SourceBuffer::anonymous("\"abc\\");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, Some(TokenValue::Str("abc".into())));
    assert_eq!(tokens[0].end, 5);

    let diags = scanner.diagnostics().as_slice();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code(), ErrorCode::E0002);
    assert_eq!(diags[0].span(), Span::new(0, 5));
}

#[test]
fn lone_quote_is_unterminated() {
    let source = SourceBuffer::anonymous("\"");
    let (tokens, scanner) = scan_all(&source);
    assert_eq!(tokens[0].value, Some(TokenValue::Str(String::new())));
    assert_eq!(scanner.diagnostics().len(), 1);
}

// === Operators ===

#[test]
fn each_operator_then_identifier() {
    let cases = [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("=", TokenKind::Assign),
        ("==", TokenKind::Equal),
        ("!=", TokenKind::NotEqual),
        (">", TokenKind::GreaterThan),
        (">=", TokenKind::GreaterThanEqual),
        ("<", TokenKind::LessThan),
        ("<=", TokenKind::LessThanEqual),
        ("(", TokenKind::LeftParenthesis),
        (")", TokenKind::RightParenthesis),
        ("[", TokenKind::LeftBracket),
        ("]", TokenKind::RightBracket),
        ("{", TokenKind::LeftBrace),
        ("}", TokenKind::RightBrace),
        (".", TokenKind::Dot),
    ];

    for (op, kind) in cases {
        let text = format!("{op}abc");
        let source = SourceBuffer::anonymous(text.as_str());
        let (tokens, scanner) = scan_all(&source);

        assert_eq!(tokens.len(), 2, "{op}");
        assert_eq!(tokens[0].kind, kind, "{op}");
        assert_eq!(tokens[0].text, op);
        assert_eq!(tokens[0].value, None);
        assert_eq!(tokens[1].value, Some(TokenValue::Symbol("abc")));
        assert!(scanner.diagnostics().is_empty(), "{op}");
    }
}

#[test]
fn longest_operator_wins() {
    assert_eq!(kinds("==="), [TokenKind::Equal, TokenKind::Assign]);
    assert_eq!(kinds("<=>"), [TokenKind::LessThanEqual, TokenKind::GreaterThan]);
    assert_eq!(kinds("= ="), [TokenKind::Assign, TokenKind::Whitespace, TokenKind::Assign]);
}

/// A bare `!` is an Unknown token but, unlike other stray characters,
/// produces no diagnostic.
#[test]
fn lone_bang_is_unknown_without_diagnostic() {
    let source = SourceBuffer::anonymous("!x");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].text, "!");
    assert_eq!(tokens[1].text, "x");
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn bang_at_end_of_input() {
    assert_eq!(kinds("!"), [TokenKind::Unknown]);
}

// === Unexpected characters ===

#[test]
fn unexpected_character() {
    let source = SourceBuffer::anonymous("@");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].text, "@");

    let diags = scanner.diagnostics().as_slice();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message(), "Unexpected '@'");
    assert_eq!(diags[0].span(), Span::new(0, 1));
}

#[test]
fn unexpected_multibyte_character() {
    let source = SourceBuffer::anonymous("a→b");
    let (tokens, scanner) = scan_all(&source);

    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].text, "→");
    assert_eq!(tokens[2].text, "b");
    let diag = &scanner.diagnostics().as_slice()[0];
    assert_eq!(diag.message(), "Unexpected '→'");
    assert_eq!(diag.span(), Span::new(1, 3));
}

#[test]
fn diagnostics_are_in_scan_order() {
    let source = SourceBuffer::anonymous("# \"\\z\" 99999999999999999999 $");
    let (_, scanner) = scan_all(&source);
    let codes: Vec<_> = scanner.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(
        codes,
        [ErrorCode::E0004, ErrorCode::E0001, ErrorCode::E0003, ErrorCode::E0004]
    );
    assert!(scanner.into_diagnostics().has_errors());
}

// === A small program ===

#[test]
fn mixed_program() {
    let source = SourceBuffer::anonymous("total = (price * 3) % 7");
    let significant: Vec<_> = scan_all(&source)
        .0
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        significant,
        [
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::LeftParenthesis,
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::IntegerLiteral,
            TokenKind::RightParenthesis,
            TokenKind::Percent,
            TokenKind::IntegerLiteral,
        ]
    );
}

// === Property tests ===

mod proptest_scanner {
    use emily_ir::SourceBuffer;
    use proptest::prelude::*;

    use super::super::Scanner;

    /// Source text built from pieces that exercise every branch.
    fn source_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
                "[+-]?[0-9][0-9_]{0,24}",
                "\"[a-z \\\\n\"y]{0,8}",
                "[-+*/%=<>!(){}\\[\\].]{1,3}",
                "[ \t\n]{1,3}",
                "[@#$~é→]",
            ],
            0..16,
        )
        .prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn tokens_tile_the_source(text in source_text()) {
            let source = SourceBuffer::anonymous(text.as_str());
            let mut expected_start = 0;
            for token in Scanner::new(&source) {
                prop_assert_eq!(token.start, expected_start);
                prop_assert!(token.start < token.end);
                prop_assert!(token.end <= source.len());
                prop_assert_eq!(token.text, &text[token.start as usize..token.end as usize]);
                expected_start = token.end;
            }
            prop_assert_eq!(expected_start, source.len());
        }

        #[test]
        fn peek_matches_next(text in source_text()) {
            let source = SourceBuffer::anonymous(text.as_str());
            let mut scanner = Scanner::new(&source);
            loop {
                let peeked = scanner.peek().cloned();
                prop_assert_eq!(scanner.peek().cloned(), peeked.clone());
                let taken = scanner.next();
                prop_assert_eq!(&taken, &peeked);
                if taken.is_none() {
                    break;
                }
            }
            prop_assert!(scanner.next().is_none());
        }

        #[test]
        fn diagnostic_spans_are_in_bounds(text in source_text()) {
            let source = SourceBuffer::anonymous(text.as_str());
            let mut scanner = Scanner::new(&source);
            let count = scanner.by_ref().count();
            prop_assert!(count <= text.chars().count());
            for diag in scanner.diagnostics() {
                prop_assert!(diag.span().end() <= source.len());
                prop_assert!(source.slice(diag.span()).is_some());
            }
        }
    }
}
