//! Numeric Parsing Helpers
//!
//! Integer literals are an optional sign, then decimal digits with `_`
//! separators anywhere after the first digit.

/// Parse a decimal integer literal, skipping underscores.
///
/// Returns `None` when the value does not fit in an `i64`.
pub(crate) fn parse_int_skip_underscores(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut magnitude: u64 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10)?;
        magnitude = magnitude.checked_mul(10)?;
        magnitude = magnitude.checked_add(u64::from(digit))?;
    }

    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}
