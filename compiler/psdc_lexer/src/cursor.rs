//! Character cursor over the rewritten text, with position remapping.
//!
//! The cursor walks the text left after line continuations were removed.
//! Spans it reports are in *original* source coordinates: the continuation
//! entries are consumed monotonically as the cursor advances, and the bytes
//! they removed are added back.
//!
//! Two running offsets are kept:
//! - `offset_before`: bytes removed before the current token's start
//! - `offset_since`: bytes removed inside the current token so far
//!
//! so a token spans `offset_before + start .. offset_before + offset_since + pos`.

use psdc_ir::Span;

use crate::line_continuation::{remove_line_continuations, LineContinuation};
use crate::offset;

pub(crate) struct Cursor {
    text: String,
    continuations: Vec<LineContinuation>,
    /// Next continuation entry not yet accounted for.
    next_continuation: usize,
    /// Byte offset in `text`.
    pos: usize,
    /// Byte offset in `text` of the current token's first character.
    start: usize,
    offset_before: u32,
    offset_since: u32,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        let pre = remove_line_continuations(source);
        let mut cursor = Cursor {
            text: pre.text,
            continuations: pre.continuations,
            next_continuation: 0,
            pos: 0,
            start: 0,
            offset_before: 0,
            offset_since: 0,
        };
        cursor.start_token();
        cursor
    }

    /// Begin a new token at the current position.
    ///
    /// Runs removed right at the token's start belong before it, not inside:
    /// in `a \␤b` the `b` spans `4..5`, not `2..5`. A span never begins on
    /// removed text.
    pub(crate) fn start_token(&mut self) {
        self.offset_before += self.offset_since;
        self.offset_since = 0;
        self.start = self.pos;
        while let Some(lc) = self.continuations.get(self.next_continuation) {
            if lc.index as usize > self.start {
                break;
            }
            self.offset_before += lc.removed;
            self.next_continuation += 1;
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// The character after [`Cursor::current`].
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.text[self.pos..].chars();
        chars.next();
        chars.next()
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        while let Some(lc) = self.continuations.get(self.next_continuation) {
            if lc.index as usize >= self.pos {
                break;
            }
            self.offset_since += lc.removed;
            self.next_continuation += 1;
        }
        Some(c)
    }

    /// Consume the current character if it is `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current character if `f` maps it to a value.
    #[inline]
    pub(crate) fn eat_map<T>(&mut self, f: impl Fn(char) -> Option<T>) -> Option<T> {
        let value = f(self.current()?)?;
        self.bump();
        Some(value)
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Rewritten text of the current token.
    #[inline]
    pub(crate) fn lexeme(&self) -> &str {
        &self.text[self.start..self.pos]
    }

    /// Original offset of the current token's start.
    #[inline]
    pub(crate) fn token_start(&self) -> u32 {
        self.offset_before + offset(self.start)
    }

    /// Original offset of the current position.
    #[inline]
    pub(crate) fn original_pos(&self) -> u32 {
        self.offset_before + self.offset_since + offset(self.pos)
    }

    /// Original span of the current token so far.
    #[inline]
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_start(), self.original_pos())
    }

    /// Empty span at the end of the original source.
    ///
    /// Accounts for every continuation, including trailing ones.
    pub(crate) fn end_span(&mut self) -> Span {
        let rest: u32 = self.continuations[self.next_continuation..]
            .iter()
            .map(|lc| lc.removed)
            .sum();
        self.offset_since += rest;
        self.next_continuation = self.continuations.len();
        Span::point(self.offset_before + self.offset_since + offset(self.text.len()))
    }

    pub(crate) fn continuation_count(&self) -> usize {
        self.continuations.len()
    }
}
