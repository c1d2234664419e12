//! Syntax errors.
//!
//! A [`ParseError`] is an expectation failure: at token index `index`,
//! while parsing `subject`, none of the expected tags was found. Rendering
//! into a [`Diagnostic`] happens once, at the end of the parse.

use psdc_diagnostic::{Diagnostic, ErrorCode};
use psdc_ir::TokenList;
use smallvec::SmallVec;

use crate::context::Subject;
use crate::recovery::TokenSet;

/// An expectation failure at one token index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Active rules when the failure occurred.
    pub subject: Subject,
    /// Index of the offending token.
    pub index: usize,
    /// Expected tag sets, one per merged expectation.
    pub expected: SmallVec<[TokenSet; 2]>,
}

impl ParseError {
    #[cold]
    pub fn new(subject: Subject, index: usize, expected: TokenSet) -> Self {
        let mut sets = SmallVec::new();
        sets.push(expected);
        ParseError {
            subject,
            index,
            expected: sets,
        }
    }

    /// Fold another expectation at the same index into this error.
    pub fn merge(&mut self, expected: TokenSet) {
        debug_assert!(!self.expected.is_empty());
        self.expected.push(expected);
    }

    /// Everything that would have been accepted.
    pub fn expected_union(&self) -> TokenSet {
        self.expected
            .iter()
            .fold(TokenSet::new(), |acc, set| acc.union(*set))
    }

    /// Render as `syntax: on <subject>: expected <set>, got <token>`,
    /// located at the offending token.
    #[cold]
    pub fn to_diagnostic(&self, tokens: &TokenList) -> Diagnostic {
        let found = tokens.get(self.index).unwrap_or_else(|| tokens.eof());
        Diagnostic::error(ErrorCode::E1001, found.span).with_message(format!(
            "syntax: on {}: expected {}, got {}",
            self.subject,
            self.expected_union().format_expected(),
            found.kind
        ))
    }
}

#[cfg(test)]
mod tests;
