//! A small pseudocode grammar for driving the parsing engine:
//!
//! ```text
//! program   := "programme" ident "début" statement* "fin" <eof>
//! statement := "constante" ident ":=" literal ";"
//!            | ident ":=" expr ";"
//!            | "écrire" "(" expr ("," expr)* ")" ";"
//!            | "si" expr "alors" statement* "fin_si"
//! expr      := operand (operator operand)*
//! operand   := literal | ident | "(" expr ")"
//! ```

use std::sync::LazyLock;

use psdcc::diagnostic::Diagnostic;
use psdcc::ir::{Span, Token, TokenKind, TokenTag};
use psdcc::parse::{
    DispatchTable, ParseOperation, ParseResult, ParsingContext, SyncPoints, TokenSet,
};
use psdcc::{Frontend, FrontendConfig, Parsed};

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub name: String,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Constant { name: String, span: Span },
    Assign { name: String, value: Span, span: Span },
    Write { args: Vec<Span>, span: Span },
    If { body: Vec<Stmt>, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Constant { span, .. }
            | Stmt::Assign { span, .. }
            | Stmt::Write { span, .. }
            | Stmt::If { span, .. } => *span,
        }
    }
}

const LITERALS: TokenSet = TokenSet::from_tags(&[
    TokenTag::Int,
    TokenTag::Real,
    TokenTag::String,
    TokenTag::Char,
    TokenTag::KwTrue,
    TokenTag::KwFalse,
]);

const OPERAND_START: TokenSet = LITERALS.with(TokenTag::Ident).with(TokenTag::LParen);

const OPERATORS: TokenSet = TokenSet::from_tags(&[
    TokenTag::Plus,
    TokenTag::Minus,
    TokenTag::Star,
    TokenTag::Slash,
    TokenTag::Percent,
    TokenTag::EqEq,
    TokenTag::NotEq,
    TokenTag::Lt,
    TokenTag::LtEq,
    TokenTag::Gt,
    TokenTag::GtEq,
    TokenTag::KwAnd,
    TokenTag::KwOr,
]);

const STMT_SYNC: SyncPoints = SyncPoints::new()
    .stop_after(TokenTag::Semicolon)
    .stop_at(TokenTag::KwEnd)
    .stop_at(TokenTag::KwEndIf);

static STATEMENTS: LazyLock<DispatchTable<Stmt>> = LazyLock::new(|| {
    DispatchTable::new()
        .with(TokenTag::KwConstant, constant)
        .with(TokenTag::Ident, assignment)
        .with(TokenTag::KwWrite, write)
        .with(TokenTag::KwIf, if_statement)
});

pub fn program(ctx: ParsingContext<'_>) -> ParseResult<Program> {
    let mut o = ParseOperation::start(ctx.push_subject("program"));
    o.one(TokenTag::KwProgram);
    let name = ident(&mut o).unwrap_or_default();
    o.one(TokenTag::KwBegin);
    let body = o.zero_or_more(statement, TokenTag::KwEnd, STMT_SYNC);
    o.one(TokenTag::KwEnd);
    let span = o.extent();
    o.one(TokenTag::Eof);
    o.ok(Program { name, body, span })
}

fn statement(ctx: ParsingContext<'_>) -> ParseResult<Stmt> {
    let mut o = ParseOperation::start(ctx.push_subject("statement"));
    match o.switch(&STATEMENTS) {
        Some(stmt) => o.ok(stmt),
        None => o.ko(),
    }
}

fn constant(ctx: ParsingContext<'_>) -> ParseResult<Stmt> {
    let mut o = ParseOperation::start(ctx.push_subject("constant"));
    o.one(TokenTag::KwConstant);
    let Some(name) = ident(&mut o) else {
        return o.ko();
    };
    if !o.one(TokenTag::ColonEq) || o.one_of(LITERALS).is_none() || !o.one(TokenTag::Semicolon)
    {
        return o.ko();
    }
    let span = o.extent();
    o.ok(Stmt::Constant { name, span })
}

fn assignment(ctx: ParsingContext<'_>) -> ParseResult<Stmt> {
    let mut o = ParseOperation::start(ctx.push_subject("assignment"));
    let Some(name) = ident(&mut o) else {
        return o.ko();
    };
    if !o.one(TokenTag::ColonEq) {
        return o.ko();
    }
    let Some(value) = o.one_rule(expression) else {
        return o.ko();
    };
    if !o.one(TokenTag::Semicolon) {
        return o.ko();
    }
    let span = o.extent();
    o.ok(Stmt::Assign { name, value, span })
}

fn write(ctx: ParsingContext<'_>) -> ParseResult<Stmt> {
    let mut o = ParseOperation::start(ctx.push_subject("write"));
    o.one(TokenTag::KwWrite);
    if !o.one(TokenTag::LParen) {
        return o.ko();
    }
    let mut args = Vec::new();
    loop {
        let Some(arg) = o.one_rule(expression) else {
            return o.ko();
        };
        args.push(arg);
        let separator = TokenSet::from_tags(&[TokenTag::Comma, TokenTag::RParen]);
        match o.one_of(separator).map(Token::tag) {
            Some(TokenTag::Comma) => continue,
            Some(_) => break,
            None => return o.ko(),
        }
    }
    if !o.one(TokenTag::Semicolon) {
        return o.ko();
    }
    let span = o.extent();
    o.ok(Stmt::Write { args, span })
}

fn if_statement(ctx: ParsingContext<'_>) -> ParseResult<Stmt> {
    let mut o = ParseOperation::start(ctx.push_subject("if"));
    o.one(TokenTag::KwIf);
    if o.one_rule(expression).is_none() || !o.one(TokenTag::KwThen) {
        return o.ko();
    }
    let body = o.zero_or_more(statement, TokenTag::KwEndIf, STMT_SYNC);
    if !o.one(TokenTag::KwEndIf) {
        return o.ko();
    }
    let span = o.extent();
    o.ok(Stmt::If { body, span })
}

fn expression(ctx: ParsingContext<'_>) -> ParseResult<Span> {
    let mut o = ParseOperation::start(ctx.push_subject("expression"));
    if o.one_rule(operand).is_none() {
        return o.ko();
    }
    while OPERATORS.contains(o.peek_tag()) {
        o.one_of(OPERATORS);
        if o.one_rule(operand).is_none() {
            return o.ko();
        }
    }
    let span = o.extent();
    o.ok(span)
}

fn operand(ctx: ParsingContext<'_>) -> ParseResult<Span> {
    let mut o = ParseOperation::start(ctx.push_subject("operand"));
    let Some(first) = o.one_of(OPERAND_START) else {
        return o.ko();
    };
    if first.tag() == TokenTag::LParen
        && (o.one_rule(expression).is_none() || !o.one(TokenTag::RParen))
    {
        return o.ko();
    }
    let span = o.extent();
    o.ok(span)
}

fn ident(o: &mut ParseOperation<'_>) -> Option<String> {
    match o.one_token(TokenTag::Ident) {
        Some(Token {
            kind: TokenKind::Ident(name),
            ..
        }) => Some(name.clone()),
        _ => None,
    }
}

/// Lex and parse `source` as a program, reporting everything in source
/// order.
pub fn parse_program(source: &str) -> Parsed<Program> {
    Frontend::new(FrontendConfig::unlimited().with_sorted_diagnostics(true))
        .parse(source, program)
        .unwrap()
}

/// Rendered messages, in order.
pub fn messages(source: &str, diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|d| d.render_message(source).into_owned())
        .collect()
}
