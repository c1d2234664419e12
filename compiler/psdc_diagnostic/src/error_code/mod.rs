//! Error codes for front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Stray characters that start no token
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unterminated character literal
    E0003,
    /// Empty character literal
    E0004,
    /// Character literal with more than one character
    E0005,
    /// Invalid escape sequence
    E0006,
    /// Number literal out of range
    E0007,

    // Parser Errors (E1xxx)
    /// Syntax error: unexpected token
    E1001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E1001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
        }
    }

    /// One-line description of the problem class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "stray characters in program",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "unterminated character literal",
            ErrorCode::E0004 => "empty character literal",
            ErrorCode::E0005 => "character literal contains more than one character",
            ErrorCode::E0006 => "invalid escape sequence",
            ErrorCode::E0007 => "number literal out of range",
            ErrorCode::E1001 => "syntax error",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
