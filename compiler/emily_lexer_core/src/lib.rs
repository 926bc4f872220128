//! Low-level scanning primitives for Emily.
//!
//! [`ScanCursor`] tracks the lexeme being built over a
//! [`SourceBuffer`](emily_ir::SourceBuffer). The [`char_class`] predicates
//! decide which characters start and continue each token family.
//!
//! Nothing here knows about tokens or diagnostics; that is `emily_lexer`'s job.

pub mod char_class;
mod cursor;

pub use cursor::ScanCursor;
