//! Front end configuration.

use psdc_diagnostic::DiagnosticConfig;

/// How a [`Frontend`](crate::Frontend) collects diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Error limit and duplicate suppression.
    pub diagnostics: DiagnosticConfig,
    /// Sort diagnostics by source position on output. Otherwise they come
    /// out lexer first, then parser, each in discovery order.
    pub sort_diagnostics: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            diagnostics: DiagnosticConfig::default(),
            sort_diagnostics: true,
        }
    }
}

impl FrontendConfig {
    /// Report everything, in discovery order.
    pub fn unlimited() -> Self {
        FrontendConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            sort_diagnostics: false,
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Stop collecting errors after `limit` (0 for no limit).
    #[must_use]
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.diagnostics.error_limit = limit;
        self
    }

    #[must_use]
    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.diagnostics.deduplicate = deduplicate;
        self
    }

    #[must_use]
    pub fn with_sorted_diagnostics(mut self, sort: bool) -> Self {
        self.sort_diagnostics = sort;
        self
    }
}
