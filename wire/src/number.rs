//! Locale-independent fixed-point number formatting.

use std::fmt::Write;

use crate::error::{WireError, WireResult};

/// Maximum number of fractional digits written for a number.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Formats `value` as a fixed-point decimal token.
///
/// Rounds to [`MAX_FRACTION_DIGITS`] digits, then drops trailing zeros and a
/// dangling decimal point. The separator is always `.` and digits are never
/// grouped. Every value that rounds to zero, including `-0.0`, formats as `0`.
/// Integer parts above 2^53 are written with the exact binary digits.
pub fn format_number(value: f64) -> WireResult<String> {
    let mut out = String::new();
    write_number(&mut out, value)?;
    Ok(out)
}

/// Appends the fixed-point form of `value` to `out`.
///
/// On error `out` is left unchanged.
pub fn write_number(out: &mut String, value: f64) -> WireResult<()> {
    if !value.is_finite() {
        return Err(WireError::NonFiniteNumber { value });
    }

    let start = out.len();
    // Rust float formatting never consults the host locale.
    let _ = write!(out, "{value:.prec$}", prec = MAX_FRACTION_DIGITS);

    let trimmed = {
        let digits = &out[start..];
        let without_zeros = digits.trim_end_matches('0');
        without_zeros.strip_suffix('.').unwrap_or(without_zeros).len()
    };
    out.truncate(start + trimmed);

    if &out[start..] == "-0" {
        out.truncate(start);
        out.push('0');
    }
    Ok(())
}
