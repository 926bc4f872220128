//! The fixed set of lexical diagnostics.
//!
//! Process-wide, immutable, shared by every scanner.

use crate::{DiagnosticDescriptor, ErrorCode, Severity};

/// Argument 0: the two-character escape, e.g. `\y`.
pub static INVALID_ESCAPE_SEQUENCE: DiagnosticDescriptor = DiagnosticDescriptor::new(
    ErrorCode::E0001,
    Severity::Error,
    "Invalid Escape Sequence",
    "Invalid Escape Sequence '{0}'",
);

pub static UNTERMINATED_STRING_LITERAL: DiagnosticDescriptor = DiagnosticDescriptor::new(
    ErrorCode::E0002,
    Severity::Error,
    "Unterminated String Literal",
    "Unterminated String Literal",
);

/// Argument 0: the literal as written, sign and underscores included.
pub static INTEGER_LITERAL_TOO_LARGE: DiagnosticDescriptor = DiagnosticDescriptor::new(
    ErrorCode::E0003,
    Severity::Error,
    "Integer Literal Too Large",
    "The Integer literal {0} is too large",
);

/// Argument 0: the offending character.
pub static UNEXPECTED_CHARACTER: DiagnosticDescriptor = DiagnosticDescriptor::new(
    ErrorCode::E0004,
    Severity::Error,
    "Unexpected Character",
    "Unexpected '{0}'",
);

/// Every descriptor in the catalog, in code order.
pub static ALL: [&DiagnosticDescriptor; 4] = [
    &INVALID_ESCAPE_SEQUENCE,
    &UNTERMINATED_STRING_LITERAL,
    &INTEGER_LITERAL_TOO_LARGE,
    &UNEXPECTED_CHARACTER,
];

/// Look up the descriptor registered for `code`.
pub fn descriptor(code: ErrorCode) -> Option<&'static DiagnosticDescriptor> {
    ALL.iter().copied().find(|d| d.code == code)
}
