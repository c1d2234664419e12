//! Result of one grammar rule invocation.

use crate::context::Subject;
use crate::error::ParseError;

/// What a rule produced: how far it read, what went wrong, and its value
/// if it succeeded.
///
/// A failed result still reports the tokens it consumed; errors may be
/// present on success when a rule recovered internally.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ParseResult<T> {
    /// Subject stack of the rule that produced this result.
    pub subject: Subject,
    /// Number of tokens consumed.
    pub read: usize,
    /// Errors from this rule and all its sub-rules.
    pub errors: Vec<ParseError>,
    /// `Some` on success.
    pub value: Option<T>,
}

impl<T> ParseResult<T> {
    pub fn ok(subject: Subject, read: usize, errors: Vec<ParseError>, value: T) -> Self {
        ParseResult {
            subject,
            read,
            errors,
            value: Some(value),
        }
    }

    pub fn ko(subject: Subject, read: usize, errors: Vec<ParseError>) -> Self {
        ParseResult {
            subject,
            read,
            errors,
            value: None,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    /// Map the value, keeping position and errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            subject: self.subject,
            read: self.read,
            errors: self.errors,
            value: self.value.map(f),
        }
    }
}
