//! Token types for the pseudocode lexer.

mod kind;
mod list;
mod tag;

pub use kind::TokenKind;
pub use list::TokenList;
pub use tag::TokenTag;

use std::fmt;

use super::Span;

/// A token with its span in the original source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenTag;
    // Parallel tag arrays stay one byte per token.
    crate::static_assert_size!(TokenTag, 1);
}
