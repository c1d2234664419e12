//! Stack growth for recursive grammar rules.
//!
//! Grammar rules call each other through the parse engine, so a deeply nested
//! program (parenthesized expressions, nested `si` blocks) turns into deep
//! native recursion. The engine wraps every sub-rule invocation in
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// within [`RED_ZONE`] bytes of its end.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left on the current segment, when the platform can tell.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
