//! The parse operation: a cursor over the token array for one rule
//! invocation.
//!
//! A grammar rule is a plain function from [`ParsingContext`] to
//! [`ParseResult`]. Inside, it starts a [`ParseOperation`], drives it with
//! the primitives below, and finishes with [`ParseOperation::ok`] or
//! [`ParseOperation::ko`]:
//!
//! ```ignore
//! fn block(ctx: ParsingContext<'_>) -> ParseResult<Block> {
//!     let mut o = ParseOperation::start(ctx.push_subject("block"));
//!     o.one(TokenTag::KwBegin);
//!     let stmts = o.zero_or_more(statement, TokenTag::KwEnd, STMT_SYNC);
//!     o.one(TokenTag::KwEnd);
//!     let span = o.extent();
//!     o.ok(Block { span, stmts })
//! }
//! ```
//!
//! Failures never abort: a failed expectation records an error and leaves
//! the cursor where it was; the rule decides whether to carry on or give up.

use std::fmt;

use psdc_ir::{Span, Token, TokenTag};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::context::ParsingContext;
use crate::error::ParseError;
use crate::outcome::ParseResult;
use crate::recovery::{SyncPoints, TokenSet};

/// A grammar rule.
pub type Rule<T> = fn(ParsingContext<'_>) -> ParseResult<T>;

/// Rules keyed by the tag of the token under the cursor.
pub struct DispatchTable<T> {
    rules: FxHashMap<TokenTag, Rule<T>>,
    keys: TokenSet,
}

impl<T> DispatchTable<T> {
    pub fn new() -> Self {
        DispatchTable {
            rules: FxHashMap::default(),
            keys: TokenSet::new(),
        }
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with(mut self, tag: TokenTag, rule: Rule<T>) -> Self {
        self.insert(tag, rule);
        self
    }

    /// Add an entry, replacing any rule already mapped to `tag`.
    pub fn insert(&mut self, tag: TokenTag, rule: Rule<T>) {
        self.rules.insert(tag, rule);
        self.keys.insert(tag);
    }

    #[inline]
    pub fn get(&self, tag: TokenTag) -> Option<Rule<T>> {
        self.rules.get(&tag).copied()
    }

    /// The tags with an entry, as reported when dispatch fails.
    #[inline]
    pub fn keys(&self) -> TokenSet {
        self.keys
    }
}

impl<T> Default for DispatchTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DispatchTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

/// Cursor and error accumulator for one rule invocation.
pub struct ParseOperation<'t> {
    ctx: ParsingContext<'t>,
    pos: usize,
    errors: Vec<ParseError>,
    /// Index in `errors` of the last expectation failure raised here.
    last_error: Option<usize>,
}

impl<'t> ParseOperation<'t> {
    pub fn start(ctx: ParsingContext<'t>) -> Self {
        let pos = ctx.start();
        ParseOperation {
            ctx,
            pos,
            errors: Vec::new(),
            last_error: None,
        }
    }

    /// Token index of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Token under the cursor; the end-of-input token once past it.
    #[inline]
    pub fn peek(&self) -> &'t Token {
        let tokens = self.ctx.tokens();
        tokens.get(self.pos).unwrap_or_else(|| tokens.eof())
    }

    #[inline]
    pub fn peek_tag(&self) -> TokenTag {
        self.ctx.tokens().tag(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek_tag() == TokenTag::Eof
    }

    /// Errors recorded so far by this operation and its sub-rules.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Expect one token of `tag`.
    pub fn one(&mut self, tag: TokenTag) -> bool {
        self.one_token(tag).is_some()
    }

    /// Expect one token of `tag`, returning it.
    pub fn one_token(&mut self, tag: TokenTag) -> Option<&'t Token> {
        if self.peek_tag() == tag {
            Some(self.advance())
        } else {
            self.add_error(TokenSet::single(tag));
            None
        }
    }

    /// Expect one token whose tag is in `set`, returning it.
    pub fn one_of(&mut self, set: TokenSet) -> Option<&'t Token> {
        if set.contains(self.peek_tag()) {
            Some(self.advance())
        } else {
            self.add_error(set);
            None
        }
    }

    /// Run a sub-rule, taking on its errors and the tokens it read.
    pub fn one_rule<T>(&mut self, rule: Rule<T>) -> Option<T> {
        self.call(rule).0
    }

    /// Run a sub-rule for an optional production.
    ///
    /// Contributes no errors. The cursor moves only if the rule succeeds.
    pub fn try_one<T>(&mut self, rule: Rule<T>) -> Option<T> {
        let ctx = self.ctx.at(self.pos);
        let result = psdc_stack::ensure_sufficient_stack(|| rule(ctx));
        if result.is_ok() {
            self.pos += result.read;
        }
        result.value
    }

    /// Dispatch on the token under the cursor.
    ///
    /// The chosen rule sees the dispatch token. With no entry for it, fails
    /// expecting any of the table's keys.
    pub fn switch<T>(&mut self, table: &DispatchTable<T>) -> Option<T> {
        match table.get(self.peek_tag()) {
            Some(rule) => self.one_rule(rule),
            None => {
                self.add_error(table.keys());
                None
            }
        }
    }

    /// Like [`switch`](Self::switch), but the dispatch token is consumed
    /// before the rule runs.
    pub fn switch_consume<T>(&mut self, table: &DispatchTable<T>) -> Option<T> {
        match table.get(self.peek_tag()) {
            Some(rule) => {
                self.advance();
                self.one_rule(rule)
            }
            None => {
                self.add_error(table.keys());
                None
            }
        }
    }

    /// Parse items until `end_at` or the end of input.
    ///
    /// After an item that failed or reported any error, skips ahead to the
    /// next synchronization point. `end_at` itself is not consumed.
    pub fn zero_or_more<T>(
        &mut self,
        rule: Rule<T>,
        end_at: TokenTag,
        sync: SyncPoints,
    ) -> Vec<T> {
        let mut items = Vec::new();
        while !self.is_at_end() && self.peek_tag() != end_at {
            let before = self.pos;
            let (value, had_errors) = self.call(rule);
            let failed = value.is_none();
            items.extend(value);
            if failed || had_errors {
                self.synchronize(sync);
            }
            if self.pos == before {
                // An item that reads nothing would be retried forever.
                debug!(pos = self.pos, "repetition stalled; skipping one token");
                self.pos += 1;
            }
        }
        items
    }

    /// Source range of the tokens consumed so far, or an empty range at the
    /// starting token if none were.
    pub fn extent(&self) -> Span {
        let tokens = self.ctx.tokens();
        let start = self.ctx.start();
        let first = tokens.get(start).unwrap_or_else(|| tokens.eof()).span;
        if self.pos <= start {
            return Span::point(first.start);
        }
        let last = tokens.get(self.pos - 1).unwrap_or_else(|| tokens.eof()).span;
        first.merge(last)
    }

    /// Finish successfully with `value`.
    pub fn ok<T>(self, value: T) -> ParseResult<T> {
        let read = self.pos - self.ctx.start();
        ParseResult::ok(self.ctx.subject().clone(), read, self.errors, value)
    }

    /// Finish with a failure.
    pub fn ko<T>(self) -> ParseResult<T> {
        let read = self.pos - self.ctx.start();
        ParseResult::ko(self.ctx.subject().clone(), read, self.errors)
    }

    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        trace!(
            pos = self.pos,
            kind = ?token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        token
    }

    /// Returns the rule's value and whether it reported any error.
    fn call<T>(&mut self, rule: Rule<T>) -> (Option<T>, bool) {
        let ctx = self.ctx.at(self.pos);
        let result = psdc_stack::ensure_sufficient_stack(|| rule(ctx));
        self.pos += result.read;
        let had_errors = !result.errors.is_empty();
        self.errors.extend(result.errors);
        (result.value, had_errors)
    }

    fn synchronize(&mut self, sync: SyncPoints) {
        let from = self.pos;
        let mut consume = false;
        while !self.is_at_end() {
            if let Some(c) = sync.lookup(self.peek_tag()) {
                consume = c;
                break;
            }
            self.pos += 1;
        }
        if consume && !self.is_at_end() {
            self.pos += 1;
        }
        debug!(
            subject = %self.ctx.subject(),
            from,
            to = self.pos,
            skipped = self.pos - from,
            "synchronized"
        );
    }

    /// Record an expectation failure at the cursor, merging it into the
    /// previous one when both are at the same index.
    #[cold]
    fn add_error(&mut self, expected: TokenSet) {
        let pos = self.pos;
        if let Some(last) = self
            .last_error
            .and_then(|i| self.errors.get_mut(i))
            .filter(|e| e.index == pos)
        {
            last.merge(expected);
            return;
        }
        self.last_error = Some(self.errors.len());
        self.errors
            .push(ParseError::new(self.ctx.subject().clone(), pos, expected));
    }
}
