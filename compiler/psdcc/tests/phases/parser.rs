//! Parsing engine tests over lexed pseudocode.
//!
//! Validates:
//! - Dispatch, repetition and nested rules on a well-formed program
//! - Synchronization after malformed statements
//! - One diagnostic per malformed region
//! - Expectation merging at a single token
//! - Lexical and syntax diagnostics collected together

use pretty_assertions::assert_eq;
use psdcc::diagnostic::ErrorCode;
use psdcc::ir::Span;

use crate::common::{messages, parse_program, Stmt};

fn slice(source: &str, span: Span) -> &str {
    span.slice(source).unwrap()
}

#[test]
fn test_well_formed_program() {
    let source = "programme Salut début
    constante n := 3;
    x := (n + 1) * 2;
    si x > 2 alors écrire(\"grand\", x); fin_si
fin
";
    let parsed = parse_program(source);
    assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);

    let program = parsed.root.unwrap();
    assert_eq!(program.name, "Salut");
    assert_eq!(slice(source, program.span), source.trim_end());
    assert_eq!(program.body.len(), 3);

    assert_eq!(slice(source, program.body[0].span()), "constante n := 3;");
    let Stmt::Assign { name, value, span } = &program.body[1] else {
        panic!("expected an assignment, got {:?}", program.body[1]);
    };
    assert_eq!(name, "x");
    assert_eq!(slice(source, *value), "(n + 1) * 2");
    assert_eq!(slice(source, *span), "x := (n + 1) * 2;");

    let Stmt::If { body, .. } = &program.body[2] else {
        panic!("expected an if, got {:?}", program.body[2]);
    };
    let [Stmt::Write { args, .. }] = body.as_slice() else {
        panic!("expected one write, got {body:?}");
    };
    let args: Vec<&str> = args.iter().map(|a| slice(source, *a)).collect();
    assert_eq!(args, vec!["\"grand\"", "x"]);
}

#[test]
fn test_synchronizes_to_next_statement() {
    let source = "programme p début x := ; y := 2; fin";
    let parsed = parse_program(source);

    let program = parsed.root.as_ref().unwrap();
    assert_eq!(program.body.len(), 1);
    assert!(matches!(&program.body[0], Stmt::Assign { name, .. } if name == "y"));

    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].code, ErrorCode::E1001);
    assert_eq!(parsed.diagnostics[0].span, Span::new(24, 25));
    assert_eq!(
        messages(source, &parsed.diagnostics),
        vec![
            "syntax: on operand: expected `identifier`, `integer literal`, `real literal`, \
             `string literal`, `character literal`, `faux`, `vrai`, or `(`, got `;`"
        ]
    );
}

#[test]
fn test_one_diagnostic_per_malformed_region() {
    let source = "programme p début x := ; écrire(1 2); z := 3; fin";
    let parsed = parse_program(source);

    let program = parsed.root.as_ref().unwrap();
    assert_eq!(program.body.len(), 1);
    assert!(matches!(&program.body[0], Stmt::Assign { name, .. } if name == "z"));

    let messages = messages(source, &parsed.diagnostics);
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[1],
        "syntax: on write: expected `)` or `,`, got integer literal `2`"
    );
}

#[test]
fn test_failures_at_one_token_merge() {
    // Both the keyword and the program name are missing at `début`.
    let source = "début x := 1; fin";
    let parsed = parse_program(source);

    let program = parsed.root.as_ref().unwrap();
    assert_eq!(program.name, "");
    assert_eq!(program.body.len(), 1);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].span, Span::new(0, 6));
    assert_eq!(
        messages(source, &parsed.diagnostics),
        vec!["syntax: on program: expected `identifier` or `programme`, got `début`"]
    );
}

#[test]
fn test_missing_end_reported_at_end_of_input() {
    let source = "programme p début x := 1;";
    let parsed = parse_program(source);

    assert_eq!(parsed.root.as_ref().map(|p| p.body.len()), Some(1));
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].span, Span::point(26));
    assert_eq!(
        messages(source, &parsed.diagnostics),
        vec!["syntax: on program: expected `fin`, got end of file"]
    );
}

#[test]
fn test_error_inside_nested_block() {
    let source = "programme p début si x alors y := ; fin_si fin";
    let parsed = parse_program(source);

    let program = parsed.root.as_ref().unwrap();
    let [Stmt::If { body, .. }] = program.body.as_slice() else {
        panic!("expected one if, got {:?}", program.body);
    };
    assert!(body.is_empty());
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test]
fn test_stray_characters_do_not_cause_syntax_errors() {
    let source = "programme p début x := 1 @; &&& ??? fin";
    let parsed = parse_program(source);

    assert_eq!(parsed.root.as_ref().map(|p| p.body.len()), Some(1));
    let codes: Vec<ErrorCode> = parsed.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0001; 3]);
    assert_eq!(
        messages(source, &parsed.diagnostics),
        vec![
            "stray `@` in program",
            "stray `&&&` in program",
            "stray `???` in program",
        ]
    );
}

#[test]
fn test_overlong_char_literal_still_parses() {
    let source = "programme p début constante c := 'ab'; fin";
    let parsed = parse_program(source);

    let program = parsed.root.as_ref().unwrap();
    assert!(matches!(&program.body[..], [Stmt::Constant { name, .. }] if name == "c"));
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].code, ErrorCode::E0005);
    assert_eq!(
        parsed.diagnostics[0].advice,
        vec!["only first character 'a' is considered".to_owned()]
    );
}

#[test]
fn test_deeply_nested_expression() {
    let depth = 3_000;
    let source = format!(
        "programme p début x := {}1{}; fin",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let parsed = parse_program(&source);
    assert!(parsed.is_clean());
}
