//! End-of-input terminated token array.

use std::fmt;

use super::{Token, TokenKind, TokenTag};
use crate::Span;

/// A materialized token sequence, as the parser needs random access.
///
/// Always ends with exactly one [`TokenKind::Eof`]. Includes a parallel
/// `tags` array so dispatch compares one byte instead of a full `TokenKind`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `tags[i] == tokens[i].kind.tag()` for all `i`.
    tags: Vec<TokenTag>,
}

impl TokenList {
    /// Create from a Vec of tokens.
    ///
    /// Appends an end-of-input token after the last token if the input lacks
    /// one, and drops anything after the first end-of-input token.
    pub fn from_vec(mut tokens: Vec<Token>) -> Self {
        if let Some(eof) = tokens.iter().position(|t| t.kind.is_eof()) {
            tokens.truncate(eof + 1);
        } else {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        }
        let tags = tokens.iter().map(|t| t.kind.tag()).collect();
        TokenList { tokens, tags }
    }

    /// Number of tokens, end-of-input included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: the end-of-input token is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tag of the token at `index`, clamped to the end-of-input token.
    #[inline]
    pub fn tag(&self, index: usize) -> TokenTag {
        self.tags.get(index).copied().unwrap_or(TokenTag::Eof)
    }

    /// All tags.
    #[inline]
    pub fn tags(&self) -> &[TokenTag] {
        &self.tags
    }

    /// Get the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The terminating end-of-input token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Consume into the underlying Vec.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Default for TokenList {
    fn default() -> Self {
        TokenList::from_vec(Vec::new())
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
