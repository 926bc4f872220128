//! Core diagnostic types.
//!
//! Defines [`Severity`] and [`Diagnostic`], the record every scanner emits
//! when it meets malformed input.

use emily_ir::{Location, Span};
use std::fmt;

use crate::{format_message, DiagnosticDescriptor, ErrorCode};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Lint,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Lint => write!(f, "lint"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// One reported problem: a catalog descriptor bound to a source location
/// and the arguments for its message template.
///
/// The message is built on demand by [`message()`](Self::message). A
/// diagnostic is never mutated after construction.
#[derive(Clone, PartialEq, Eq, Debug)]
#[must_use = "diagnostics should be recorded or reported, not silently dropped"]
pub struct Diagnostic<'src> {
    descriptor: &'static DiagnosticDescriptor,
    location: Location<'src>,
    args: Vec<String>,
}

impl<'src> Diagnostic<'src> {
    pub fn new(
        descriptor: &'static DiagnosticDescriptor,
        location: Location<'src>,
        args: Vec<String>,
    ) -> Self {
        Diagnostic {
            descriptor,
            location,
            args,
        }
    }

    pub fn descriptor(&self) -> &'static DiagnosticDescriptor {
        self.descriptor
    }

    /// Stable identifier for tooling and filters.
    pub fn id(&self) -> &'static str {
        self.descriptor.id()
    }

    pub fn code(&self) -> ErrorCode {
        self.descriptor.code
    }

    pub fn severity(&self) -> Severity {
        self.descriptor.severity
    }

    pub fn title(&self) -> &'static str {
        self.descriptor.title
    }

    /// The descriptor's template with this diagnostic's arguments substituted.
    pub fn message(&self) -> String {
        format_message(self.descriptor.message_format, self.args.as_slice())
    }

    /// Message arguments, in positional order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn location(&self) -> Location<'src> {
        self.location
    }

    pub fn span(&self) -> Span {
        self.location.span
    }

    /// The offending source text.
    pub fn source_text(&self) -> &'src str {
        self.location.text()
    }

    /// Check if this is an error (vs warning/lint/note).
    pub fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} ({})",
            self.severity(),
            self.id(),
            self.message(),
            self.span()
        )
    }
}
