//! Line-continuation removal.
//!
//! A backslash followed by a run of whitespace that ends in a line feed is
//! deleted before scanning, so `a\` + newline + `b` scans as `ab`. Each
//! deletion is recorded so the cursor can map offsets in the rewritten text
//! back to the original source.

use memchr::memchr_iter;

use crate::offset;

/// One removed `\ ... \n` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LineContinuation {
    /// Offset in the rewritten text where the run used to be.
    pub(crate) index: u32,
    /// Bytes removed from the original source.
    pub(crate) removed: u32,
}

/// Source text with continuations removed.
#[derive(Debug)]
pub(crate) struct Preprocessed {
    pub(crate) text: String,
    /// Strictly increasing by `index`. Back-to-back runs share one entry.
    pub(crate) continuations: Vec<LineContinuation>,
}

pub(crate) fn remove_line_continuations(source: &str) -> Preprocessed {
    let mut text = String::with_capacity(source.len());
    let mut continuations: Vec<LineContinuation> = Vec::new();
    let mut copied = 0;

    for backslash in memchr_iter(b'\\', source.as_bytes()) {
        let Some(run_len) = whitespace_run_to_newline(&source[backslash + 1..]) else {
            continue;
        };
        let end = backslash + 1 + run_len;
        text.push_str(&source[copied..backslash]);

        let index = offset(text.len());
        let removed = offset(end - backslash);
        match continuations.last_mut() {
            Some(last) if last.index == index => last.removed += removed,
            _ => continuations.push(LineContinuation { index, removed }),
        }
        copied = end;
    }
    text.push_str(&source[copied..]);

    Preprocessed {
        text,
        continuations,
    }
}

/// Byte length of the whitespace run at the start of `rest`, line feed
/// included, if the run ends in a line feed.
fn whitespace_run_to_newline(rest: &str) -> Option<usize> {
    for (i, c) in rest.char_indices() {
        if c == '\n' {
            return Some(i + 1);
        }
        if !c.is_whitespace() {
            return None;
        }
    }
    None
}
