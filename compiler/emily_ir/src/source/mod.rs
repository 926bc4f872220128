//! Source text of one compilation unit, and locations into it.
//!
//! The buffer is immutable for its whole lifetime. Scanners, tokens and
//! diagnostics only ever borrow it, so one buffer may back any number of
//! independent scans.

use std::fmt;

use crate::Span;

/// Name used for buffers built from an in-memory string.
const ANONYMOUS_NAME: &str = "<input>";

/// Immutable, indexed view over the full text of one compilation unit.
///
/// # File Size
///
/// Offsets are `u32`. Text beyond `u32::MAX` bytes is kept but
/// [`len()`](Self::len) saturates, so scanning stops there.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceBuffer {
    /// Display name (a file path or a synthetic label).
    name: String,
    text: String,
    /// Length of `text` in bytes, saturated to `u32::MAX`.
    len: u32,
}

impl SourceBuffer {
    /// Create a buffer with a display name.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        SourceBuffer {
            name: name.into(),
            text,
            len,
        }
    }

    /// Create a buffer named `<input>`.
    pub fn anonymous(text: impl Into<String>) -> Self {
        Self::new(ANONYMOUS_NAME, text)
    }

    /// Display name of the buffer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extract the text covered by `span`.
    ///
    /// Returns `None` if the span runs past the end of the buffer or does
    /// not fall on `char` boundaries.
    pub fn slice(&self, span: Span) -> Option<&str> {
        if span.end() > self.len {
            return None;
        }
        self.text.get(span.to_range())
    }

    /// Extract the text between two byte offsets, clamped to the buffer.
    ///
    /// Used by the scan cursor, whose offsets always sit on `char`
    /// boundaries; anything else yields an empty string.
    pub fn slice_between(&self, start: u32, end: u32) -> &str {
        let end = end.min(self.len);
        let start = start.min(end);
        self.text.get(start as usize..end as usize).unwrap_or_default()
    }

    /// The character starting at byte `offset`, if any.
    #[inline]
    pub fn char_at(&self, offset: u32) -> Option<char> {
        if offset >= self.len {
            return None;
        }
        self.text.get(offset as usize..)?.chars().next()
    }

    /// A [`Location`] for `span` in this buffer.
    pub fn location(&self, span: Span) -> Location<'_> {
        Location::new(self, span)
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("name", &self.name)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// A span together with the buffer it indexes.
///
/// Holds a back-reference to the buffer, never ownership. Two locations are
/// equal when they refer to the same buffer instance and the same span.
#[derive(Clone, Copy)]
pub struct Location<'src> {
    pub source: &'src SourceBuffer,
    pub span: Span,
}

impl<'src> Location<'src> {
    pub fn new(source: &'src SourceBuffer, span: Span) -> Self {
        Location { source, span }
    }

    /// The source text covered by this location.
    ///
    /// Empty when the span is not valid for the buffer.
    pub fn text(&self) -> &'src str {
        self.source.slice(self.span).unwrap_or_default()
    }
}

impl PartialEq for Location<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.span == other.span
    }
}

impl Eq for Location<'_> {}

impl fmt::Debug for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.source.name(), self.span)
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source.name(), self.span)
    }
}
