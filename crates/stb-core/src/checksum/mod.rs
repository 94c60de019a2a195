//! # Check-Digit Engines
//!
//! The two checksum schemes every Swedish identifier and payment code is
//! built on:
//!
//! - [`modulo10`]: the Luhn scheme. Used by personal, coordination and
//!   organization numbers, OCR references, and type-2 bank accounts.
//! - [`modulo11`]: the weighted scheme with cyclic weights 1–10 and `X`
//!   standing for the value 10. Used by type-1 bank accounts and
//!   Handelsbanken.
//!
//! Both are pure functions over ASCII digit strings. The weighting and the
//! digit/`X` mapping must match the national schemes bit for bit.

pub mod modulo10;
pub mod modulo11;

use crate::error::StbError;

/// Parse an ASCII digit string into digit values, rejecting empty input.
pub(crate) fn digit_values(raw: &str) -> Result<Vec<u32>, StbError> {
    if raw.is_empty() {
        return Err(StbError::structure(raw, "number must contain at least one digit"));
    }
    raw.chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| StbError::structure(raw, "number must consist of characters 0-9"))
        })
        .collect()
}

/// Render a digit value (0-9) as its ASCII character.
pub fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit % 10)
}
