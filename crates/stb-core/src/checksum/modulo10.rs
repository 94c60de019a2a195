//! # Modulo 10 (Luhn)
//!
//! Every second digit, starting from the rightmost, is doubled. Doubled
//! values of 10 or more contribute the sum of their two digits. The check
//! digit is `(10 - (sum mod 10)) mod 10`.
//!
//! Any single-digit substitution changes the sum modulo 10, so it is
//! always detected.

use super::digit_values;
use crate::error::StbError;

/// Compute the modulo-10 check digit for a digit string.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `digits` is empty or contains
/// anything other than `0-9`.
pub fn check_digit(digits: &str) -> Result<u8, StbError> {
    let values = digit_values(digits)?;
    let sum: u32 = values
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &digit)| {
            if pos % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    Ok(((10 - sum % 10) % 10) as u8)
}

/// Verify that the last digit of `number` is the modulo-10 check digit of
/// the digits before it.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `number` has fewer than two digits or
/// contains anything other than `0-9`.
pub fn verify(number: &str) -> Result<bool, StbError> {
    let Some(last) = number.chars().last() else {
        return Err(StbError::structure(number, "number must contain at least two digits"));
    };
    let base = &number[..number.len() - last.len_utf8()];
    if base.is_empty() {
        return Err(StbError::structure(number, "number must contain at least two digits"));
    }
    let expected = check_digit(base)?;
    match last.to_digit(10) {
        Some(found) => Ok(found == u32::from(expected)),
        None => Err(StbError::structure(number, "number must consist of characters 0-9")),
    }
}
