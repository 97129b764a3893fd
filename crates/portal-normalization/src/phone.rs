//! Phone number normalization.
//!
//! No national format validation: the canonical form is simply the last
//! [`PHONE_DIGITS`] digits, which drops country codes such as `+20` and keeps
//! shorter numbers as they are.

use crate::identifier::extract_digits;

/// Length of the canonical phone suffix.
pub const PHONE_DIGITS: usize = 11;

/// Keeps the last `n` characters of an ASCII digit string.
pub fn trailing_digits(digits: &str, n: usize) -> &str {
    let start = digits.len().saturating_sub(n);
    &digits[start..]
}

/// Normalizes a raw phone cell to at most [`PHONE_DIGITS`] ASCII digits.
///
/// Arabic-Indic digits count as digits. A missing cell yields an empty string.
pub fn normalize_phone(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let digits = extract_digits(raw);
    trailing_digits(&digits, PHONE_DIGITS).to_string()
}
