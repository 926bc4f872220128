//! Source location spans.
//!
//! A span is a `(start, len)` pair of byte offsets into a [`SourceBuffer`](crate::SourceBuffer).

use std::fmt;

/// Error when creating a span from a `usize` range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    #[error("span start {0} (0x{0:X}) exceeds u32::MAX (0xFFFFFFFF)")]
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    #[error("span end {0} (0x{0:X}) exceeds u32::MAX (0xFFFFFFFF)")]
    EndTooLarge(usize),
    /// Span end lies before its start.
    #[error("span end {end} precedes start {start}")]
    Inverted { start: usize, end: usize },
}

/// Byte range into a source buffer.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from the start of the buffer
/// - len: u32 - byte length; `end = start + len` is exclusive
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Span {
    /// Empty span at offset zero.
    pub const DUMMY: Span = Span { start: 0, len: 0 };

    /// Create a new span from a start offset and a length.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Span { start, len }
    }

    /// Create a span covering `start..end`.
    ///
    /// An `end` before `start` produces an empty span at `start`.
    #[inline]
    pub const fn from_bounds(start: u32, end: u32) -> Self {
        Span {
            start,
            len: end.saturating_sub(start),
        }
    }

    /// Try to create a span from a byte range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        if end < start {
            return Err(SpanError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        Ok(Span::from_bounds(start, end))
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.len)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
