//! The scanning state machine.
//!
//! [`Lexer`] is a lazy iterator: each `next()` scans until one token is
//! produced, reporting any problems met on the way to the sink. The last
//! token is always [`TokenKind::Eof`]; the iterator is fused after it.

use std::iter::FusedIterator;
use std::str::FromStr;

use psdc_diagnostic::DiagnosticSink;
use psdc_ir::{Decimal, Span, Token, TokenKind};
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::cursor::Cursor;
use crate::{escape, keywords, lex_error};

/// Tokenizer over one source text.
pub struct Lexer<S> {
    cursor: Cursor,
    sink: S,
    /// Pending run of stray characters, in original coordinates.
    stray: Option<Span>,
    emitted: usize,
    finished: bool,
}

impl<S: DiagnosticSink> Lexer<S> {
    /// Prepare to lex `source`, reporting diagnostics to `sink`.
    ///
    /// Line continuations are removed up front; scanning itself is lazy.
    pub fn new(source: &str, sink: S) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Lexer {
            cursor: Cursor::new(source),
            sink,
            stray: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Give back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Scan the lexeme starting with `c`. `None` means nothing to emit.
    fn scan(&mut self, c: char) -> Option<TokenKind> {
        let kind = match c {
            c if c.is_whitespace() => {
                self.flush_stray();
                return None;
            }
            '{' => TokenKind::LBrace,
            '[' => TokenKind::LBracket,
            '(' => TokenKind::LParen,
            '}' => TokenKind::RBrace,
            ']' => TokenKind::RBracket,
            ')' => TokenKind::RParen,
            '=' => {
                if self.cursor.eat('>') {
                    TokenKind::FatArrow
                } else if self.cursor.eat('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            ':' => {
                if self.cursor.eat('=') {
                    TokenKind::ColonEq
                } else {
                    TokenKind::Colon
                }
            }
            ',' => TokenKind::Comma,
            '#' => TokenKind::Hash,
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.eat_while(|c| c != '\n');
                    return None;
                }
                if self.cursor.eat('*') {
                    self.block_comment();
                    return None;
                }
                TokenKind::Slash
            }
            '.' if self.cursor.current().is_some_and(|c| c.is_ascii_digit()) => {
                return self.real();
            }
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            '>' => {
                if self.cursor.eat('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '<' => {
                if self.cursor.eat('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            '-' => TokenKind::Minus,
            '%' => TokenKind::Percent,
            '*' => TokenKind::Star,
            '!' if self.cursor.eat('=') => TokenKind::NotEq,
            '+' => TokenKind::Plus,
            '\'' => return self.char_literal(),
            '"' => return self.string_literal(),
            c if c.is_ascii_digit() => return self.number(),
            c if is_ident_start(c) => self.identifier(),
            _ => {
                self.extend_stray();
                return None;
            }
        };
        self.flush_stray();
        Some(kind)
    }

    /// Skip to just past the first `*/`, or to the end of input.
    fn block_comment(&mut self) {
        while let Some(c) = self.cursor.bump() {
            if c == '*' && self.cursor.eat('/') {
                break;
            }
        }
    }

    fn identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        let word = self.cursor.lexeme();
        keywords::lookup(&word.to_lowercase()).unwrap_or_else(|| TokenKind::Ident(word.to_owned()))
    }

    /// Integer, or real if the digits run into `.` and another digit.
    fn number(&mut self) -> Option<TokenKind> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.bump();
            return self.real();
        }
        self.flush_stray();
        if let Ok(value) = self.cursor.lexeme().parse::<i64>() {
            Some(TokenKind::Int(value))
        } else {
            self.sink
                .report(lex_error::number_out_of_range(self.cursor.token_span()));
            None
        }
    }

    /// Fractional digits of a real literal; the `.` is already consumed.
    fn real(&mut self) -> Option<TokenKind> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.flush_stray();
        let lexeme = self.cursor.lexeme();
        let parsed = match lexeme.strip_prefix('.') {
            Some(fraction) => Decimal::from_str(&format!("0.{fraction}")),
            None => Decimal::from_str(lexeme),
        };
        if let Ok(value) = parsed {
            Some(TokenKind::Real(value))
        } else {
            self.sink
                .report(lex_error::real_out_of_range(self.cursor.token_span()));
            None
        }
    }

    fn char_literal(&mut self) -> Option<TokenKind> {
        self.flush_stray();
        let Some(units) = self.quoted('\'') else {
            self.sink
                .report(lex_error::unterminated_char(self.cursor.token_span()));
            return None;
        };
        let mut chars =
            char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER));
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.sink
                    .report(lex_error::empty_char(self.cursor.token_span()));
                None
            }
            (Some(c), None) => Some(TokenKind::Char(c)),
            (Some(c), Some(_)) => {
                self.sink
                    .report(lex_error::char_too_long(self.cursor.token_span(), c));
                Some(TokenKind::Char(c))
            }
        }
    }

    fn string_literal(&mut self) -> Option<TokenKind> {
        self.flush_stray();
        if let Some(units) = self.quoted('"') {
            Some(TokenKind::String(String::from_utf16_lossy(&units)))
        } else {
            self.sink
                .report(lex_error::unterminated_string(self.cursor.token_span()));
            None
        }
    }

    /// Literal contents up to and including `delimiter`, escapes decoded.
    ///
    /// `None` if a raw line feed, carriage return or the end of input comes
    /// first; the cursor is left before it.
    fn quoted(&mut self, delimiter: char) -> Option<Vec<u16>> {
        let mut units = Vec::new();
        loop {
            match self.cursor.current() {
                None | Some('\n' | '\r') => return None,
                Some(c) if c == delimiter => {
                    self.cursor.bump();
                    return Some(units);
                }
                Some('\\') => {
                    let escape_start = self.cursor.original_pos();
                    self.cursor.bump();
                    let escape = match self.cursor.current() {
                        None | Some('\n' | '\r') => return None,
                        Some(e) => e,
                    };
                    self.cursor.bump();
                    if let Err(invalid) = escape::decode(escape, &mut self.cursor, &mut units) {
                        let span = Span::new(escape_start, self.cursor.original_pos());
                        self.sink.report(lex_error::invalid_escape(span, invalid));
                    }
                }
                Some(c) => {
                    self.cursor.bump();
                    let mut buf = [0; 2];
                    units.extend_from_slice(c.encode_utf16(&mut buf));
                }
            }
        }
    }

    fn extend_stray(&mut self) {
        let span = self.cursor.token_span();
        self.stray = Some(match self.stray {
            Some(pending) => pending.merge(span),
            None => span,
        });
    }

    fn flush_stray(&mut self) {
        if let Some(span) = self.stray.take() {
            self.sink.report(lex_error::stray(span));
        }
    }

    fn finish(&mut self) -> Token {
        self.flush_stray();
        self.finished = true;
        let span = self.cursor.end_span();
        debug!(
            tokens = self.emitted,
            continuations = self.cursor.continuation_count(),
            end = span.end,
            "lexed source"
        );
        Token::new(TokenKind::Eof, span)
    }
}

impl<S: DiagnosticSink> Iterator for Lexer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            self.cursor.start_token();
            let Some(c) = self.cursor.bump() else {
                return Some(self.finish());
            };
            if let Some(kind) = self.scan(c) {
                let token = Token::new(kind, self.cursor.token_span());
                self.emitted += 1;
                trace!(
                    kind = ?token.kind,
                    span_start = token.span.start,
                    span_end = token.span.end,
                    "token"
                );
                return Some(token);
            }
        }
    }
}

impl<S: DiagnosticSink> FusedIterator for Lexer<S> {}

/// General category `L*`. Narrower than `char::is_alphabetic`, which also
/// admits letter numbers (`Ⅻ`) and combining marks.
#[inline]
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[inline]
fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    is_letter(c) || c == '_' || c.is_ascii_digit()
}
