use super::*;
use pretty_assertions::assert_eq;
use psdc_ir::{Span, Token, TokenKind, TokenTag};

fn tokens() -> TokenList {
    TokenList::from_vec(vec![
        Token::new(TokenKind::Ident("x".into()), Span::new(0, 1)),
        Token::new(TokenKind::Int(3), Span::new(2, 3)),
    ])
}

#[test]
fn test_expected_union_across_merges() {
    let mut error = ParseError::new(
        Subject::root(),
        0,
        TokenSet::single(TokenTag::Semicolon),
    );
    error.merge(TokenSet::from_tags(&[TokenTag::Comma, TokenTag::Semicolon]));

    assert_eq!(error.expected.len(), 2);
    assert_eq!(
        error.expected_union(),
        TokenSet::from_tags(&[TokenTag::Comma, TokenTag::Semicolon])
    );
}

#[test]
fn test_to_diagnostic_message_and_span() {
    let subject = Subject::root().push("program").push("declaration");
    let error = ParseError::new(
        subject,
        1,
        TokenSet::from_tags(&[TokenTag::Colon, TokenTag::Semicolon]),
    );
    let diag = error.to_diagnostic(&tokens());

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.span, Span::new(2, 3));
    assert_eq!(
        diag.render_message(""),
        "syntax: on declaration: expected `:` or `;`, got integer literal `3`"
    );
}

#[test]
fn test_to_diagnostic_at_end_of_input() {
    let error = ParseError::new(Subject::root(), 2, TokenSet::single(TokenTag::KwEnd));
    let diag = error.to_diagnostic(&tokens());

    assert_eq!(diag.span, Span::point(3));
    assert_eq!(
        diag.render_message(""),
        "syntax: on input: expected `fin`, got end of file"
    );
}

#[test]
fn test_to_diagnostic_index_past_end_uses_eof() {
    let error = ParseError::new(Subject::root(), 99, TokenSet::single(TokenTag::Comma));
    assert_eq!(error.to_diagnostic(&tokens()).span, Span::point(3));
}
