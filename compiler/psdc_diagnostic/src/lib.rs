//! Diagnostics for the psdc front end.
//!
//! Every lexical or syntactic problem becomes a [`Diagnostic`] value:
//! - a stable [`ErrorCode`] for searchability
//! - the exact half-open range in the original source
//! - a message, rendered on demand because some messages quote the source
//! - advice lines
//!
//! Producers report into any [`DiagnosticSink`]. The [`DiagnosticQueue`]
//! sink adds an error limit, duplicate suppression and a sorted flush.

mod diagnostic;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Message, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;
