//! Error codes for all lexical diagnostics.
//!
//! Each code is a stable identifier (e.g. `E0001`) that tooling can filter
//! on and that never changes meaning once released.

use std::fmt;

/// Error codes for lexical diagnostics.
///
/// Format: E#### where the leading `0` marks the lexer phase.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Invalid escape sequence in a string literal
    E0001,
    /// Unterminated string literal
    E0002,
    /// Integer literal does not fit in 64 bits
    E0003,
    /// Character that starts no token
    E0004,
}

/// Error returned when parsing an unknown error code string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code `{0}`")]
pub struct ParseErrorCodeError(pub String);

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
    ];

    /// The stable string form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
        }
    }

    /// One-line explanation, for `--explain` style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "only `\\\"`, `\\n` and `\\\\` are valid escapes; the invalid escape is dropped"
            }
            ErrorCode::E0002 => "a string literal reached end of input before its closing `\"`",
            ErrorCode::E0003 => {
                "an integer literal does not fit in a signed 64-bit integer; its value is clamped"
            }
            ErrorCode::E0004 => "a character that cannot begin any token was skipped",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E0001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseErrorCodeError(s.to_owned()))
    }
}
