//! Diagnostic system for lexical error reporting.
//!
//! - [`catalog`] holds one immutable [`DiagnosticDescriptor`] per known problem
//! - a [`Diagnostic`] binds a descriptor to a [`Location`](emily_ir::Location)
//!   and positional message arguments
//! - a [`DiagnosticLog`] records diagnostics in the order they were emitted
//! - [`emitter`] renders them for humans
//!
//! Nothing here filters, deduplicates or sorts. That policy belongs to
//! whoever consumes the log.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained from a log that holds at least
//! one error, so a later stage can prove it is halting for a reported reason.
//!
//! ```text
//! if let Some(guarantee) = scanner.diagnostics().error_guaranteed() {
//!     return Err(guarantee);
//! }
//! ```

pub mod catalog;
mod descriptor;
mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
mod log;
pub mod span_utils;

pub use descriptor::{format_message, DiagnosticDescriptor};
pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use guarantee::ErrorGuaranteed;
pub use log::DiagnosticLog;
