//! Token kinds for the pseudocode language.

use std::fmt;

use rust_decimal::Decimal;

use super::tag::TokenTag;

/// Token kinds, with the decoded payload of literal and identifier tokens.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier, original case preserved.
    Ident(String),
    /// Integer literal: 42, 0005
    Int(i64),
    /// Real literal: 3.14, .5
    ///
    /// Exact to 28 significant digits; `0456.170` and `456.17` compare equal.
    Real(Decimal),
    /// String literal, escapes decoded.
    ///
    /// Escapes may produce UTF-16 code units that pair up across escapes
    /// (`\uD83D\uDE00`). An unpaired surrogate cannot live in a `String`
    /// and is stored as U+FFFD.
    String(String),
    /// Character literal, escapes decoded. An unpaired surrogate escape is
    /// stored as U+FFFD.
    Char(char),

    Array,
    Begin,
    Boolean,
    Character,
    Constant,
    Do,
    Else,
    ElseIf,
    End,
    EndFor,
    EndIf,
    EndSwitch,
    EndWhile,
    False,
    For,
    Function,
    If,
    Integer,
    Out,
    Procedure,
    Program,
    Read,
    RealType, // réel
    Return,
    Returns,
    StringType, // chaîne
    Structure,
    Switch,
    Then,
    True,
    Trunc,
    Type,
    When,
    WhenOther,
    While,
    Write,
    And,
    Not,
    Or,
    Xor,

    LBrace,    // {
    LBracket,  // [
    LParen,    // (
    RBrace,    // }
    RBracket,  // ]
    RParen,    // )
    FatArrow,  // =>
    Colon,     // :
    ColonEq,   // :=
    Comma,     // ,
    Slash,     // /
    Dot,       // .
    Semicolon, // ;
    EqEq,      // ==
    Eq,        // =
    GtEq,      // >=
    Gt,        // >
    LtEq,      // <=
    Lt,        // <
    Minus,     // -
    Percent,   // %
    Star,      // *
    NotEq,     // !=
    Plus,      // +
    Hash,      // #

    /// End of input. Always the last token of a lex run.
    Eof,
}

impl TokenKind {
    /// The real value, if this is a real literal.
    #[inline]
    pub fn as_real(&self) -> Option<Decimal> {
        match self {
            TokenKind::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Fieldless tag of this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Real(_) => TokenTag::Real,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Char(_) => TokenTag::Char,
            TokenKind::Array => TokenTag::KwArray,
            TokenKind::Begin => TokenTag::KwBegin,
            TokenKind::Boolean => TokenTag::KwBoolean,
            TokenKind::Character => TokenTag::KwCharacter,
            TokenKind::Constant => TokenTag::KwConstant,
            TokenKind::Do => TokenTag::KwDo,
            TokenKind::Else => TokenTag::KwElse,
            TokenKind::ElseIf => TokenTag::KwElseIf,
            TokenKind::End => TokenTag::KwEnd,
            TokenKind::EndFor => TokenTag::KwEndFor,
            TokenKind::EndIf => TokenTag::KwEndIf,
            TokenKind::EndSwitch => TokenTag::KwEndSwitch,
            TokenKind::EndWhile => TokenTag::KwEndWhile,
            TokenKind::False => TokenTag::KwFalse,
            TokenKind::For => TokenTag::KwFor,
            TokenKind::Function => TokenTag::KwFunction,
            TokenKind::If => TokenTag::KwIf,
            TokenKind::Integer => TokenTag::KwInteger,
            TokenKind::Out => TokenTag::KwOut,
            TokenKind::Procedure => TokenTag::KwProcedure,
            TokenKind::Program => TokenTag::KwProgram,
            TokenKind::Read => TokenTag::KwRead,
            TokenKind::RealType => TokenTag::KwRealType,
            TokenKind::Return => TokenTag::KwReturn,
            TokenKind::Returns => TokenTag::KwReturns,
            TokenKind::StringType => TokenTag::KwStringType,
            TokenKind::Structure => TokenTag::KwStructure,
            TokenKind::Switch => TokenTag::KwSwitch,
            TokenKind::Then => TokenTag::KwThen,
            TokenKind::True => TokenTag::KwTrue,
            TokenKind::Trunc => TokenTag::KwTrunc,
            TokenKind::Type => TokenTag::KwType,
            TokenKind::When => TokenTag::KwWhen,
            TokenKind::WhenOther => TokenTag::KwWhenOther,
            TokenKind::While => TokenTag::KwWhile,
            TokenKind::Write => TokenTag::KwWrite,
            TokenKind::And => TokenTag::KwAnd,
            TokenKind::Not => TokenTag::KwNot,
            TokenKind::Or => TokenTag::KwOr,
            TokenKind::Xor => TokenTag::KwXor,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::FatArrow => TokenTag::FatArrow,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::ColonEq => TokenTag::ColonEq,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Slash => TokenTag::Slash,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::EqEq => TokenTag::EqEq,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::GtEq => TokenTag::GtEq,
            TokenKind::Gt => TokenTag::Gt,
            TokenKind::LtEq => TokenTag::LtEq,
            TokenKind::Lt => TokenTag::Lt,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Percent => TokenTag::Percent,
            TokenKind::Star => TokenTag::Star,
            TokenKind::NotEq => TokenTag::NotEq,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Hash => TokenTag::Hash,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Check if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Check if this kind carries a payload.
    #[inline]
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_)
                | TokenKind::Int(_)
                | TokenKind::Real(_)
                | TokenKind::String(_)
                | TokenKind::Char(_)
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Real(value) => write!(f, "Real({value})"),
            TokenKind::String(s) => write!(f, "String({s:?})"),
            TokenKind::Char(c) => write!(f, "Char({c:?})"),
            other => write!(f, "{:?}", other.tag()),
        }
    }
}

/// How the token reads in a "got ..." clause.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Int(n) => write!(f, "integer literal `{n}`"),
            TokenKind::Real(value) => write!(f, "real literal `{value}`"),
            TokenKind::String(s) => write!(f, "string literal {s:?}"),
            TokenKind::Char(c) => write!(f, "character literal {c:?}"),
            TokenKind::Eof => f.write_str("end of file"),
            other => write!(f, "`{}`", other.tag().name()),
        }
    }
}
