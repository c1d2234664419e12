//! Tokenizer for the psdc pseudocode language.
//!
//! Two stages:
//! 1. Line continuations (`\`, optional whitespace, line feed) are removed
//!    from the text, remembering where and how much was removed.
//! 2. A scanner walks the rewritten text and yields tokens whose spans are
//!    mapped back to the original source.
//!
//! Lexical problems never stop the lexer: they are reported to a
//! [`DiagnosticSink`] and scanning continues.
//!
//! # Example
//!
//! ```text
//! let mut diagnostics = Vec::new();
//! let tokens = psdc_lexer::lex_all("si x alors", &mut diagnostics);
//! assert_eq!(tokens.len(), 4); // si, x, alors, end of file
//! ```

mod cursor;
mod escape;
mod keywords;
mod lex_error;
mod line_continuation;
mod scanner;

use psdc_diagnostic::DiagnosticSink;
use psdc_ir::TokenList;

pub use scanner::Lexer;

/// Lazily tokenize `source`.
///
/// The sequence ends with exactly one end-of-input token. Lexing again
/// requires a new call.
pub fn lex<S: DiagnosticSink>(source: &str, sink: S) -> Lexer<S> {
    Lexer::new(source, sink)
}

/// Tokenize `source` completely, for random access by the parser.
pub fn lex_all<S: DiagnosticSink>(source: &str, sink: S) -> TokenList {
    TokenList::from_vec(lex(source, sink).collect())
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets bounded by u32: sources over u32::MAX bytes are rejected up front"
)]
#[inline]
pub(crate) fn offset(n: usize) -> u32 {
    n as u32
}
