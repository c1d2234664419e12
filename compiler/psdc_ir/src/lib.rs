//! psdc IR - shared front-end types
//!
//! This crate contains the data structures every front-end stage agrees on:
//! - Spans for source locations (byte offsets into the *original* text)
//! - Tokens, their payload-carrying `TokenKind` and fieldless `TokenTag`
//! - `TokenList`, an end-of-input terminated token array for the parser
//!
//! Real literals are [`Decimal`] values, so tokens stay `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use rust_decimal::Decimal;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList, TokenTag};
