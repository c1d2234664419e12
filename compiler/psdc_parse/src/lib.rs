//! Table-driven recursive descent parsing engine.
//!
//! Grammar rules are plain functions from [`ParsingContext`] to
//! [`ParseResult`], written against [`ParseOperation`]: single-token
//! expectations, dispatch tables, sub-rules, optional sub-rules and
//! repetition with synchronization. Expectation failures are values
//! ([`ParseError`]); [`parse`] turns them into diagnostics once the start
//! rule returns. Parsing never aborts on malformed input.

mod context;
mod error;
mod operation;
mod outcome;
mod recovery;

pub use context::{ParsingContext, Subject, SubjectIter};
pub use error::ParseError;
pub use operation::{DispatchTable, ParseOperation, Rule};
pub use outcome::ParseResult;
pub use recovery::{SyncPoints, TokenSet, TokenSetIterator};

use psdc_diagnostic::Diagnostic;
use psdc_ir::TokenList;
use tracing::debug;

/// Outcome of a whole parse.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput<T> {
    /// Value of the start rule, if it succeeded.
    pub root: Option<T>,
    /// Syntax diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParseOutput<T> {
    /// Whether the start rule succeeded.
    pub fn succeeded(&self) -> bool {
        self.root.is_some()
    }

    /// Succeeded without a single diagnostic.
    pub fn is_clean(&self) -> bool {
        self.succeeded() && self.diagnostics.is_empty()
    }
}

/// Run `rule` over `tokens` from the first token.
pub fn parse<T>(tokens: &TokenList, rule: Rule<T>) -> ParseOutput<T> {
    parse_at(tokens, 0, rule)
}

/// Run `rule` over `tokens` starting at token index `start`.
pub fn parse_at<T>(tokens: &TokenList, start: usize, rule: Rule<T>) -> ParseOutput<T> {
    let ctx = ParsingContext::new(tokens).at(start);
    let result = psdc_stack::ensure_sufficient_stack(|| rule(ctx));
    let diagnostics: Vec<Diagnostic> = result
        .errors
        .iter()
        .map(|error| error.to_diagnostic(tokens))
        .collect();
    debug!(
        tokens = tokens.len(),
        read = result.read,
        success = result.is_ok(),
        errors = diagnostics.len(),
        "parsed"
    );
    ParseOutput {
        root: result.value,
        diagnostics,
    }
}
