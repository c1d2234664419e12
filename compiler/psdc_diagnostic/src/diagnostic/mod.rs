use std::borrow::Cow;
use std::fmt;

use psdc_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message, possibly a template over the source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Message {
    /// Fully rendered text.
    Text(String),
    /// `{before}` + the diagnostic's source range in backticks + `{after}`.
    ///
    /// Rendered lazily so producers never copy the offending text.
    QuoteSource {
        before: &'static str,
        after: &'static str,
    },
}

/// A diagnostic with all context needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Range in the original source.
    pub span: Span,
    /// Main message.
    pub message: Message,
    /// Additional advice lines.
    pub advice: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic at `span`. The message starts as the
    /// code's description.
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            span,
            message: Message::Text(code.description().to_owned()),
            advice: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Message::Text(message.into());
        self
    }

    /// Set a message that quotes the diagnostic's own source range.
    pub fn with_quoted_message(mut self, before: &'static str, after: &'static str) -> Self {
        self.message = Message::QuoteSource { before, after };
        self
    }

    /// Add an advice line.
    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice.push(advice.into());
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Render the message against the source the diagnostic was produced for.
    ///
    /// A quoted range that does not fall on character boundaries of `source`
    /// renders as empty backticks.
    pub fn render_message<'a>(&'a self, source: &str) -> Cow<'a, str> {
        match &self.message {
            Message::Text(text) => Cow::Borrowed(text),
            Message::QuoteSource { before, after } => {
                let quoted = self.span.slice(source).unwrap_or_default();
                Cow::Owned(format!("{before}`{quoted}`{after}"))
            }
        }
    }
}

/// Plain-text form: `error[E0001] 0..2: message`, then one indented line per
/// advice. Quoting messages show their range instead of the source text.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: ", self.severity, self.code, self.span)?;
        match &self.message {
            Message::Text(text) => f.write_str(text)?,
            Message::QuoteSource { before, after } => {
                write!(f, "{before}<{}>{after}", self.span)?;
            }
        }
        for advice in &self.advice {
            write!(f, "\n  {advice}")?;
        }
        Ok(())
    }
}
