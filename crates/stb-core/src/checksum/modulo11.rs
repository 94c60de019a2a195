//! # Modulo 11
//!
//! Weighted sum over the digits read from the right. Verification assigns
//! the weights 1, 2, ..., 10 and then wraps to 1 again; a trailing `X`
//! stands for the value 10. A number is valid iff the weighted sum is
//! divisible by 11.
//!
//! Check-digit computation uses the same cycle shifted by one position
//! (2, 3, ..., 10, 1, 2, ...), since the check digit itself takes weight 1.
//! The result `11 - (sum mod 11)` maps 10 to `X` and 11 to `0`.
//!
//! ## Known limitation
//!
//! Weights repeat every ten positions. For numbers of eleven or more
//! digits, two positions share a weight, so swapping the digits in those
//! positions leaves the sum unchanged and goes undetected. This is a
//! property of the national scheme and is preserved as is.

use super::{digit_char, digit_values};
use crate::error::StbError;

/// Length of the weight cycle.
const WEIGHT_CYCLE: u32 = 10;

/// Verify that `number` ends in a valid modulo-11 check digit.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `number` is empty or contains
/// anything other than `0-9` and an optional trailing `X`.
pub fn verify(number: &str) -> Result<bool, StbError> {
    let (body, trailing_x) = match number.strip_suffix('X') {
        Some(body) => (body, true),
        None => (number, false),
    };
    if number.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(StbError::structure(
            number,
            "number must consist of characters 0-9 and optionally end with X",
        ));
    }

    let mut values: Vec<u32> = body.chars().filter_map(|c| c.to_digit(10)).collect();
    if trailing_x {
        values.push(10);
    }

    let sum: u32 = values
        .iter()
        .rev()
        .zip((1..=WEIGHT_CYCLE).cycle())
        .map(|(value, weight)| value * weight)
        .sum();

    Ok(sum % 11 == 0)
}

/// Compute the modulo-11 check digit for `digits`: `'0'`-`'9'` or `'X'`.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `digits` is empty or contains
/// anything other than `0-9`.
pub fn check_digit(digits: &str) -> Result<char, StbError> {
    let values = digit_values(digits)?;
    let sum: u32 = values
        .iter()
        .rev()
        .zip((1..=WEIGHT_CYCLE).cycle().skip(1))
        .map(|(value, weight)| value * weight)
        .sum();

    Ok(match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        check => digit_char(check as u8),
    })
}
