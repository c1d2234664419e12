//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Suppression of exact duplicates
//! - Flush in source order

use rustc_hash::FxHashSet;

use crate::{Diagnostic, DiagnosticSink};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let tokens = psdc_lexer::lex_all(source, &mut queue);
/// // ... parse, reporting syntax errors into the same queue
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    /// Collected diagnostics, in report order.
    diagnostics: Vec<Diagnostic>,
    /// Everything queued so far, for dedup.
    seen: FxHashSet<Diagnostic>,
    /// Count of errors (not warnings).
    error_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert(diag.clone()) {
            return false;
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors dropped by the limit since the last flush.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. The sort is stable, so diagnostics at the same
    /// range keep their report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].span <= w[1].span);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.span);
        }

        self.drain()
    }

    /// Return diagnostics in report order and clear the queue.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        self.error_count = 0;
        self.suppressed = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl DiagnosticSink for DiagnosticQueue {
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
