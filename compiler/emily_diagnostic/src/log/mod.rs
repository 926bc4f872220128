//! Append-only record of emitted diagnostics.

use emily_ir::Location;
use tracing::debug;

use crate::{Diagnostic, DiagnosticDescriptor, ErrorGuaranteed, Severity};

/// Ordered, append-only collection of diagnostics.
///
/// Insertion order is scan order. There is no deduplication and no
/// filtering by severity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticLog<'src> {
    diagnostics: Vec<Diagnostic<'src>>,
}

impl<'src> DiagnosticLog<'src> {
    pub fn new() -> Self {
        DiagnosticLog {
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic for `descriptor` at `location`.
    pub fn emit(
        &mut self,
        descriptor: &'static DiagnosticDescriptor,
        location: Location<'src>,
        args: &[&str],
    ) {
        let args = args.iter().map(|&a| a.to_owned()).collect();
        self.push(Diagnostic::new(descriptor, location, args));
    }

    /// Record an already-built diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic<'src>) {
        debug!(
            code = diagnostic.id(),
            start = diagnostic.span().start,
            end = diagnostic.span().end(),
            "diagnostic recorded"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic<'src>> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic<'src>] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Proof of a reported error, if the log holds one.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count())
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

impl<'a, 'src> IntoIterator for &'a DiagnosticLog<'src> {
    type Item = &'a Diagnostic<'src>;
    type IntoIter = std::slice::Iter<'a, Diagnostic<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl<'src> IntoIterator for DiagnosticLog<'src> {
    type Item = Diagnostic<'src>;
    type IntoIter = std::vec::IntoIter<Diagnostic<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
