//! Compact discriminant tag for `TokenKind`.

/// Compact discriminant tag for `TokenKind`.
///
/// Layout by category, all values below 128 so a tag set fits in one `u128`:
///
/// | Range  | Category     |
/// |--------|--------------|
/// | 0-4    | Literals     |
/// | 5-44   | Keywords     |
/// | 45-69  | Punctuation  |
/// | 70     | End of input |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    // === Literals ===
    Ident = 0,
    Int,
    Real,
    String,
    Char,

    // === Keywords ===
    KwArray = 5,
    KwBegin,
    KwBoolean,
    KwCharacter,
    KwConstant,
    KwDo,
    KwElse,
    KwElseIf,
    KwEnd,
    KwEndFor,
    KwEndIf,
    KwEndSwitch,
    KwEndWhile,
    KwFalse,
    KwFor,
    KwFunction,
    KwIf,
    KwInteger,
    KwOut,
    KwProcedure,
    KwProgram,
    KwRead,
    KwRealType,
    KwReturn,
    KwReturns,
    KwStringType,
    KwStructure,
    KwSwitch,
    KwThen,
    KwTrue,
    KwTrunc,
    KwType,
    KwWhen,
    KwWhenOther,
    KwWhile,
    KwWrite,
    KwAnd,
    KwNot,
    KwOr,
    KwXor,

    // === Punctuation ===
    LBrace = 45,
    LBracket,
    LParen,
    RBrace,
    RBracket,
    RParen,
    FatArrow,
    Colon,
    ColonEq,
    Comma,
    Slash,
    Dot,
    Semicolon,
    EqEq,
    Eq,
    GtEq,
    Gt,
    LtEq,
    Lt,
    Minus,
    Percent,
    Star,
    NotEq,
    Plus,
    Hash,

    Eof = 70,
}

impl TokenTag {
    /// Number of tags. Tags are dense: every index below `COUNT` is a tag.
    pub const COUNT: usize = Self::Eof as usize + 1;

    /// Every tag, indexed by discriminant.
    pub const ALL: [TokenTag; Self::COUNT] = [
        Self::Ident,
        Self::Int,
        Self::Real,
        Self::String,
        Self::Char,
        Self::KwArray,
        Self::KwBegin,
        Self::KwBoolean,
        Self::KwCharacter,
        Self::KwConstant,
        Self::KwDo,
        Self::KwElse,
        Self::KwElseIf,
        Self::KwEnd,
        Self::KwEndFor,
        Self::KwEndIf,
        Self::KwEndSwitch,
        Self::KwEndWhile,
        Self::KwFalse,
        Self::KwFor,
        Self::KwFunction,
        Self::KwIf,
        Self::KwInteger,
        Self::KwOut,
        Self::KwProcedure,
        Self::KwProgram,
        Self::KwRead,
        Self::KwRealType,
        Self::KwReturn,
        Self::KwReturns,
        Self::KwStringType,
        Self::KwStructure,
        Self::KwSwitch,
        Self::KwThen,
        Self::KwTrue,
        Self::KwTrunc,
        Self::KwType,
        Self::KwWhen,
        Self::KwWhenOther,
        Self::KwWhile,
        Self::KwWrite,
        Self::KwAnd,
        Self::KwNot,
        Self::KwOr,
        Self::KwXor,
        Self::LBrace,
        Self::LBracket,
        Self::LParen,
        Self::RBrace,
        Self::RBracket,
        Self::RParen,
        Self::FatArrow,
        Self::Colon,
        Self::ColonEq,
        Self::Comma,
        Self::Slash,
        Self::Dot,
        Self::Semicolon,
        Self::EqEq,
        Self::Eq,
        Self::GtEq,
        Self::Gt,
        Self::LtEq,
        Self::Lt,
        Self::Minus,
        Self::Percent,
        Self::Star,
        Self::NotEq,
        Self::Plus,
        Self::Hash,
        Self::Eof,
    ];

    /// Discriminant as a bit index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`TokenTag::index`].
    #[inline]
    pub const fn from_index(index: u8) -> Option<TokenTag> {
        if (index as usize) < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Whether this tag is a reserved word.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let i = self as u8;
        i >= Self::KwArray as u8 && i <= Self::KwXor as u8
    }

    /// Human-readable name, as shown in expectation messages.
    ///
    /// Keywords use their accented spelling; punctuation is shown verbatim.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Real => "real literal",
            Self::String => "string literal",
            Self::Char => "character literal",
            Self::KwArray => "tableau",
            Self::KwBegin => "début",
            Self::KwBoolean => "booléen",
            Self::KwCharacter => "caractère",
            Self::KwConstant => "constante",
            Self::KwDo => "faire",
            Self::KwElse => "sinon",
            Self::KwElseIf => "sinon_si",
            Self::KwEnd => "fin",
            Self::KwEndFor => "fin_pour",
            Self::KwEndIf => "fin_si",
            Self::KwEndSwitch => "fin_selon",
            Self::KwEndWhile => "fin_tant_que",
            Self::KwFalse => "faux",
            Self::KwFor => "pour",
            Self::KwFunction => "fonction",
            Self::KwIf => "si",
            Self::KwInteger => "entier",
            Self::KwOut => "sortie",
            Self::KwProcedure => "procédure",
            Self::KwProgram => "programme",
            Self::KwRead => "lire",
            Self::KwRealType => "réel",
            Self::KwReturn => "retourne",
            Self::KwReturns => "délivre",
            Self::KwStringType => "chaîne",
            Self::KwStructure => "structure",
            Self::KwSwitch => "selon",
            Self::KwThen => "alors",
            Self::KwTrue => "vrai",
            Self::KwTrunc => "ent",
            Self::KwType => "type",
            Self::KwWhen => "quand",
            Self::KwWhenOther => "quand_autre",
            Self::KwWhile => "tant_que",
            Self::KwWrite => "écrire",
            Self::KwAnd => "et",
            Self::KwNot => "non",
            Self::KwOr => "or",
            Self::KwXor => "xor",
            Self::LBrace => "{",
            Self::LBracket => "[",
            Self::LParen => "(",
            Self::RBrace => "}",
            Self::RBracket => "]",
            Self::RParen => ")",
            Self::FatArrow => "=>",
            Self::Colon => ":",
            Self::ColonEq => ":=",
            Self::Comma => ",",
            Self::Slash => "/",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::EqEq => "==",
            Self::Eq => "=",
            Self::GtEq => ">=",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::Lt => "<",
            Self::Minus => "-",
            Self::Percent => "%",
            Self::Star => "*",
            Self::NotEq => "!=",
            Self::Plus => "+",
            Self::Hash => "#",
            Self::Eof => "end of file",
        }
    }
}

// Tag sets are single u128 bitsets.
const _: () = assert!(TokenTag::COUNT <= 128);
