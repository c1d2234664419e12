//! Lexer tests through the public API.
//!
//! Validates:
//! - The end-of-input invariant
//! - Stray run coalescing
//! - Line continuation range remapping
//! - Escape decoding and numeric literal values
//! - Range properties over arbitrary input (proptest)

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use psdcc::diagnostic::{Diagnostic, ErrorCode};
use psdcc::ir::{Decimal, Span, Token, TokenKind};
use psdcc::lexer::{lex, lex_all};

fn lex_collect(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let tokens = lex(source, &mut diagnostics).collect();
    (tokens, diagnostics)
}

fn single_kind(source: &str) -> TokenKind {
    let (tokens, diagnostics) = lex_collect(source);
    assert!(diagnostics.is_empty(), "{source:?}: {diagnostics:?}");
    assert_eq!(tokens.len(), 2, "{source:?}: {tokens:?}");
    tokens[0].kind.clone()
}

#[test]
fn test_empty_input() {
    let (tokens, diagnostics) = lex_collect("");
    assert_eq!(tokens, vec![Token::new(TokenKind::Eof, Span::point(0))]);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_whitespace_only_input() {
    for source in [" ", "\n\r\t\x0B"] {
        let (tokens, diagnostics) = lex_collect(source);
        assert_eq!(tokens.len(), 1, "{source:?}");
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert!(diagnostics.is_empty(), "{source:?}");
    }
}

#[test]
fn test_stray_coalescing() {
    let (tokens, diagnostics) = lex_collect("&&");
    assert_eq!(tokens.len(), 1);
    let spans: Vec<Span> = diagnostics.iter().map(|d| d.span).collect();
    assert_eq!(spans, vec![Span::new(0, 2)]);

    let (tokens, diagnostics) = lex_collect("&&:&&");
    assert_eq!(tokens[0], Token::new(TokenKind::Colon, Span::new(2, 3)));
    assert_eq!(tokens.len(), 2);
    let spans: Vec<Span> = diagnostics.iter().map(|d| d.span).collect();
    assert_eq!(spans, vec![Span::new(0, 2), Span::new(3, 5)]);
    assert!(diagnostics.iter().all(|d| d.code == ErrorCode::E0001));
}

#[test]
fn test_line_continuation_transparency() {
    let (tokens, _) = lex_collect("a\\\nb");
    assert_eq!(
        tokens[0],
        Token::new(TokenKind::Ident("ab".into()), Span::new(0, 4))
    );

    let (tokens, _) = lex_collect("a\\\n b");
    assert_eq!(
        tokens[..2],
        [
            Token::new(TokenKind::Ident("a".into()), Span::new(0, 1)),
            Token::new(TokenKind::Ident("b".into()), Span::new(4, 5)),
        ]
    );
}

#[test]
fn test_continuation_with_trailing_whitespace() {
    // `\`, spaces and tabs, then the line feed: all removed.
    let source = "ent\\ \t\nier x";
    let (tokens, diagnostics) = lex_collect(source);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0], Token::new(TokenKind::Integer, Span::new(0, 10)));
    assert_eq!(tokens[1].span, Span::new(11, 12));
}

#[test]
fn test_backslash_without_line_feed_is_kept() {
    let (tokens, diagnostics) = lex_collect("a\\ b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].span, Span::new(1, 2));
}

#[test]
fn test_escape_decoding_exactness() {
    for source in ["'\\x41'", "'\\u0041'", "'\\101'", "'A'"] {
        assert_eq!(single_kind(source), TokenKind::Char('A'), "{source}");
    }
    assert_eq!(
        single_kind("\"\\uD83D\\uDE00\""),
        single_kind("\"\u{1F600}\"")
    );
}

#[test]
fn test_control_escapes() {
    assert_eq!(
        single_kind("\"\\a\\b\\f\\n\\r\\t\\v\\e\""),
        TokenKind::String("\x07\x08\x0C\n\r\t\x0B\x1B".into())
    );
}

#[test]
fn test_unpaired_surrogate_is_replaced() {
    let TokenKind::String(value) = single_kind("\"\\uD83D\"") else {
        panic!("expected a string literal");
    };
    assert_eq!(value, "\u{FFFD}");
}

#[test]
fn test_numeric_literal_normalization() {
    assert_eq!(single_kind("00005432"), TokenKind::Int(5432));
    assert_eq!(single_kind("0456.170"), TokenKind::Real(Decimal::new(45617, 2)));
}

#[test]
fn test_accented_keywords_and_identifiers() {
    let tokens = lex_all("tant_que élève faire", Vec::<Diagnostic>::new());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::While,
            TokenKind::Ident("élève".into()),
            TokenKind::Do,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lexical_error_messages() {
    let source = "'' 'xy' \"abc\n";
    let (_, diagnostics) = lex_collect(source);
    let found: Vec<(ErrorCode, Span, String)> = diagnostics
        .iter()
        .map(|d| (d.code, d.span, d.render_message(source).into_owned()))
        .collect();
    assert_eq!(
        found,
        vec![
            (
                ErrorCode::E0004,
                Span::new(0, 2),
                "character literal is empty".to_owned()
            ),
            (
                ErrorCode::E0005,
                Span::new(3, 7),
                "character literal contains more than one character".to_owned()
            ),
            (
                ErrorCode::E0002,
                Span::new(8, 12),
                "unterminated string literal".to_owned()
            ),
        ]
    );
}

/// Characters that exercise every lexer branch, continuation and literal
/// edges included.
fn tricky_source() -> impl Strategy<Value = String> {
    let alphabet = vec![
        'a', 'Z', 'é', '_', '0', '7', '.', ' ', '\t', '\n', '\r', '\\', '"', '\'', '/', '*',
        ':', '=', '<', '!', '@', '&', 'x', 'u', '\u{1F600}',
    ];
    prop::collection::vec(prop::sample::select(alphabet), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn check_ranges(source: &str) -> Result<(), TestCaseError> {
    let len = u32::try_from(source.len()).unwrap();
    let (tokens, diagnostics) = lex_collect(source);

    // Exactly one end-of-input token, last, empty, at the end.
    let (eof, rest) = tokens.split_last().unwrap();
    prop_assert_eq!(eof, &Token::new(TokenKind::Eof, Span::point(len)));
    prop_assert!(rest.iter().all(|t| t.kind != TokenKind::Eof));

    // Ordered, non-overlapping, on character boundaries. Token text plus the
    // text between tokens accounts for every byte.
    let mut covered = 0;
    let mut previous_end = 0;
    for token in &tokens {
        prop_assert!(token.span.start >= previous_end, "{:?}", tokens);
        prop_assert!(token.span.start <= token.span.end);
        prop_assert!(token.span.slice(source).is_some(), "{:?}", token);
        covered += (token.span.start - previous_end) + token.span.len();
        previous_end = token.span.end;
    }
    prop_assert_eq!(covered, len);

    for diagnostic in &diagnostics {
        prop_assert!(diagnostic.span.end <= len, "{:?}", diagnostic);
        prop_assert!(diagnostic.span.slice(source).is_some(), "{:?}", diagnostic);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_ranges_cover_tricky_input(source in tricky_source()) {
        check_ranges(&source)?;
    }

    #[test]
    fn prop_ranges_cover_any_input(source in any::<String>()) {
        check_ranges(&source)?;
    }

    #[test]
    fn prop_lazy_and_eager_agree(source in tricky_source()) {
        let mut eager_diagnostics: Vec<Diagnostic> = Vec::new();
        let eager = lex_all(&source, &mut eager_diagnostics);
        let (lazy, lazy_diagnostics) = lex_collect(&source);
        prop_assert_eq!(eager.as_slice(), lazy.as_slice());
        prop_assert_eq!(eager_diagnostics, lazy_diagnostics);
    }
}
