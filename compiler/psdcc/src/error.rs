//! Errors that stop the front end before lexing starts.
//!
//! Malformed programs are not errors here: they produce diagnostics.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrontendError {
    /// Spans are 32-bit byte offsets.
    #[error("source is {len} bytes; at most {max} bytes can be addressed", max = u32::MAX)]
    SourceTooLarge { len: usize },
}
