//! Lex-then-parse driver.

use psdc_diagnostic::{Diagnostic, DiagnosticQueue};
use psdc_ir::TokenList;
use psdc_parse::Rule;
use tracing::debug;

use crate::{FrontendConfig, FrontendError};

/// Tokens and lexical diagnostics of one source.
#[derive(Clone, Debug, PartialEq)]
pub struct Lexed {
    pub tokens: TokenList,
    pub diagnostics: Vec<Diagnostic>,
    /// Errors dropped by the error limit.
    pub suppressed: usize,
}

/// Everything a parse run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub tokens: TokenList,
    /// Value of the start rule, if it succeeded.
    pub root: Option<T>,
    /// Lexical and syntax diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// Errors dropped by the error limit.
    pub suppressed: usize,
}

impl<T> Parsed<T> {
    /// The start rule succeeded and nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.root.is_some() && self.diagnostics.is_empty() && self.suppressed == 0
    }
}

/// Front end driver. Holds configuration only; every call is independent.
#[derive(Clone, Debug, Default)]
pub struct Frontend {
    config: FrontendConfig,
}

impl Frontend {
    pub fn new(config: FrontendConfig) -> Self {
        Frontend { config }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Tokenize `source` completely.
    pub fn lex(&self, source: &str) -> Result<Lexed, FrontendError> {
        check_len(source)?;
        let mut queue = self.queue();
        let tokens = psdc_lexer::lex_all(source, &mut queue);
        let suppressed = queue.suppressed_count();
        Ok(Lexed {
            tokens,
            diagnostics: self.finish(&mut queue),
            suppressed,
        })
    }

    /// Tokenize `source` and run `rule` over the tokens.
    pub fn parse<T>(&self, source: &str, rule: Rule<T>) -> Result<Parsed<T>, FrontendError> {
        check_len(source)?;
        let mut queue = self.queue();
        let tokens = psdc_lexer::lex_all(source, &mut queue);
        let lexical = queue.error_count();

        let output = psdc_parse::parse(&tokens, rule);
        for diagnostic in output.diagnostics {
            queue.add(diagnostic);
        }
        debug!(
            bytes = source.len(),
            tokens = tokens.len(),
            lexical,
            syntax = queue.error_count() - lexical,
            suppressed = queue.suppressed_count(),
            "front end done"
        );

        let suppressed = queue.suppressed_count();
        Ok(Parsed {
            tokens,
            root: output.root,
            diagnostics: self.finish(&mut queue),
            suppressed,
        })
    }

    fn queue(&self) -> DiagnosticQueue {
        DiagnosticQueue::with_config(self.config.diagnostics.clone())
    }

    fn finish(&self, queue: &mut DiagnosticQueue) -> Vec<Diagnostic> {
        if self.config.sort_diagnostics {
            queue.flush()
        } else {
            queue.drain()
        }
    }
}

fn check_len(source: &str) -> Result<(), FrontendError> {
    match u32::try_from(source.len()) {
        Ok(_) => Ok(()),
        Err(_) => Err(FrontendError::SourceTooLarge { len: source.len() }),
    }
}
