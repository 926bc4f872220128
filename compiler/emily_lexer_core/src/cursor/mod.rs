//! The scan window over a source buffer.
//!
//! A [`ScanCursor`] is a `(start, len)` window. `start` is the left edge of
//! the token being scanned; `len` grows as characters are consumed. Once a
//! token is complete, [`advance()`](ScanCursor::advance) commits the window
//! and the next token starts where this one ended.
//!
//! # Clamping
//!
//! Every operation is total. Requests that run past the end of the buffer
//! are truncated, so `start + len <= source.len()` holds at all times. End
//! of input shows up as `None` or an empty string, never as an error.
//!
//! # Units
//!
//! Offsets are byte offsets. Counts passed to [`extend`](ScanCursor::extend),
//! [`peek_n`](ScanCursor::peek_n) and [`next_n`](ScanCursor::next_n) are
//! character counts, so the window never splits a UTF-8 sequence.

use std::fmt;

use emily_ir::{Location, SourceBuffer, Span};

/// Characters of context shown on each side of the window by `Debug`/`Display`.
const DISPLAY_CONTEXT: usize = 10;

/// Window over a [`SourceBuffer`] accumulating the current lexeme.
///
/// Borrows the buffer; never owns it.
#[derive(Clone, Copy)]
pub struct ScanCursor<'src> {
    source: &'src SourceBuffer,
    start: u32,
    len: u32,
}

impl<'src> ScanCursor<'src> {
    /// Create an empty window at the start of `source`.
    pub fn new(source: &'src SourceBuffer) -> Self {
        ScanCursor {
            source,
            start: 0,
            len: 0,
        }
    }

    // === Window state ===

    #[inline]
    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    /// Left edge of the window.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Length of the window in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Right edge of the window (exclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.len)
    }

    #[inline]
    pub fn location(&self) -> Location<'src> {
        self.source.location(self.span())
    }

    /// Text inside the window.
    #[inline]
    pub fn content(&self) -> &'src str {
        self.source.slice_between(self.start, self.end())
    }

    /// True once the window reaches the end of the buffer.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.end() >= self.source.len()
    }

    /// Everything after the window.
    #[inline]
    fn rest(&self) -> &'src str {
        self.source.slice_between(self.end(), self.source.len())
    }

    // === Non-consuming ===

    /// The character right after the window.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The next `count` characters after the window, fewer at end of input.
    pub fn peek_n(&self, count: usize) -> &'src str {
        let rest = self.rest();
        let bytes = rest
            .char_indices()
            .nth(count)
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..bytes]
    }

    /// Longest run after the window whose characters all satisfy `pred`.
    pub fn peek_while(&self, mut pred: impl FnMut(char) -> bool) -> &'src str {
        let rest = self.rest();
        let bytes = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..bytes]
    }

    /// Longest run after the window made only of characters in `chars`.
    pub fn peek_while_any(&self, chars: &[char]) -> &'src str {
        self.peek_while(|c| chars.contains(&c))
    }

    // === Consuming ===

    /// Grow the window by `count` characters, stopping at the end of input.
    pub fn extend(&mut self, count: usize) {
        let bytes = self.peek_n(count).len();
        self.grow(bytes);
    }

    /// Consume one character.
    #[allow(
        clippy::should_implement_trait,
        reason = "a cursor is not an iterator; peek and next come as a pair"
    )]
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.extend(1);
        Some(c)
    }

    /// Consume up to `count` characters and return them.
    pub fn next_n(&mut self, count: usize) -> &'src str {
        let taken = self.peek_n(count);
        self.grow(taken.len());
        taken
    }

    /// Consume the longest run satisfying `pred` and return it.
    pub fn next_while(&mut self, pred: impl FnMut(char) -> bool) -> &'src str {
        let taken = self.peek_while(pred);
        self.grow(taken.len());
        taken
    }

    /// Consume the longest run made only of characters in `chars`.
    pub fn next_while_any(&mut self, chars: &[char]) -> &'src str {
        self.next_while(|c| chars.contains(&c))
    }

    /// Commit the window: the next lexeme starts where this one ended.
    #[inline]
    pub fn advance(&mut self) {
        self.start += self.len;
        self.len = 0;
    }

    /// Grow by `bytes`, which must come from a slice of `rest()`.
    #[inline]
    fn grow(&mut self, bytes: usize) {
        let room = self.source.len().saturating_sub(self.end());
        let bytes = u32::try_from(bytes).unwrap_or(u32::MAX);
        self.len += bytes.min(room);
    }
}

/// Up to [`DISPLAY_CONTEXT`] characters at the end of `text`.
fn tail(text: &str) -> &str {
    let skip = text.chars().count().saturating_sub(DISPLAY_CONTEXT);
    let offset = text
        .char_indices()
        .nth(skip)
        .map_or(text.len(), |(offset, _)| offset);
    &text[offset..]
}

/// Up to [`DISPLAY_CONTEXT`] characters at the start of `text`.
fn head(text: &str) -> &str {
    let offset = text
        .char_indices()
        .nth(DISPLAY_CONTEXT)
        .map_or(text.len(), |(offset, _)| offset);
    &text[..offset]
}

/// Renders the window in context: `before«content»after`.
impl fmt::Display for ScanCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before = self.source.slice_between(0, self.start);
        write!(
            f,
            "{}«{}»{}",
            tail(before),
            self.content(),
            head(self.rest())
        )
    }
}

impl fmt::Debug for ScanCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
