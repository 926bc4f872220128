//! Character classification used by the scanner's dispatch.

/// A letter or `_` may start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Letters, digits and `_` continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Decimal digit. Only ASCII `0-9` form numeric literals.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Digits and the `_` separator make up the body of a numeric literal.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c == '_' || c.is_ascii_digit()
}

#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
