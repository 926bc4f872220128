//! Diagnostic Emitters
//!
//! Renders diagnostics for people. Each emitter implements
//! [`DiagnosticEmitter`] and decides its own output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic<'_>);

    /// Emit multiple diagnostics, in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic<'_>]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
