//! Lexical diagnostics.

use psdc_diagnostic::{Diagnostic, ErrorCode};
use psdc_ir::{Decimal, Span};

use crate::escape::InvalidEscape;

/// A run of characters that start no token. Quotes the run.
#[cold]
pub(crate) fn stray(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001, span).with_quoted_message("stray ", " in program")
}

#[cold]
pub(crate) fn unterminated_string(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002, span).with_message("unterminated string literal")
}

#[cold]
pub(crate) fn unterminated_char(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003, span).with_message("unterminated character literal")
}

#[cold]
pub(crate) fn empty_char(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0004, span).with_message("character literal is empty")
}

#[cold]
pub(crate) fn char_too_long(span: Span, first: char) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0005, span)
        .with_message("character literal contains more than one character")
        .with_advice(format!("only first character '{first}' is considered"))
}

#[cold]
pub(crate) fn invalid_escape(span: Span, invalid: InvalidEscape) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E0006, span).with_message(format!(
        "invalid escape sequence `\\{}`",
        invalid.escape
    ));
    match invalid.requirement {
        Some(requirement) => diag.with_advice(requirement),
        None => diag,
    }
}

#[cold]
pub(crate) fn number_out_of_range(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0007, span)
        .with_message("number literal out of range")
        .with_advice(format!("integer literals must be at most {}", i64::MAX))
}

#[cold]
pub(crate) fn real_out_of_range(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0007, span)
        .with_message("number literal out of range")
        .with_advice(format!("real literals must be at most {}", Decimal::MAX))
}
