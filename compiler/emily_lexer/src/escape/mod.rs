//! Escape sequences inside string literals.
//!
//! Valid escapes: `\"` `\n` `\\`. Anything else after a backslash is an
//! invalid escape; the scanner reports it and drops it from the value.

/// Resolve the character following a `\`.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        'n' => Some('\n'),
        '\\' => Some('\\'),
        _ => None,
    }
}
