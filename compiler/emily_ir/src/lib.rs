//! Emily IR - shared front-end data types
//!
//! This crate contains the plain data the lexer and its consumers exchange:
//! - [`SourceBuffer`] holding the text of one compilation unit
//! - [`Span`] and [`Location`] for byte ranges into a buffer
//! - [`Token`], [`TokenKind`], and [`TokenValue`] for scanner output
//!
//! Nothing here scans or reports; see `emily_lexer` and `emily_diagnostic`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod source;
mod span;
mod token;

pub use source::{Location, SourceBuffer};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenValue};
