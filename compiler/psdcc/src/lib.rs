//! Front end of the psdc pseudocode compiler.
//!
//! Ties the lexer and the parsing engine together: a [`Frontend`] lexes a
//! source text, runs a start rule over the tokens, and hands back the
//! result with every diagnostic from both phases, collected through one
//! [`DiagnosticQueue`](psdc_diagnostic::DiagnosticQueue).
//!
//! Grammar rules are supplied by the caller; see [`psdc_parse`].

mod config;
mod error;
mod frontend;

pub use config::FrontendConfig;
pub use error::FrontendError;
pub use frontend::{Frontend, Lexed, Parsed};

pub use psdc_diagnostic as diagnostic;
pub use psdc_ir as ir;
pub use psdc_lexer as lexer;
pub use psdc_parse as parse;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=psdc_parse=debug` or
/// `RUST_LOG=psdc_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
