//! # Structural Grammar
//!
//! Fixed-width grammars for the identifier kinds, and the field extraction
//! that feeds century resolution and check-digit verification.
//!
//! | Kind | Grammar |
//! |------|---------|
//! | Personal / Coordination | `[YY]YYMMDD[-+]NNNC` |
//! | Organization | `NNNNNN-NNNN`, third digit at least 2 |
//!
//! Parsing here never verifies the check digit. It fails with
//! [`StbError::Structure`] on wrong length, non-digits, a missing or
//! misplaced delimiter, an out-of-range month or day field, or (for
//! organizations) a third digit below 2.

use stb_core::StbError;

/// Grammar description used in structural error messages.
const BIRTH_NUMBER_FORM: &str = "IDs must use form [YY]YYMMDD[-+]NNNC";
const ORGANIZATION_FORM: &str = "IDs must use form NNNNNN-NNNN";

/// How the day-of-month field is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEncoding {
    /// Plain calendar day, 01-31.
    Calendar,
    /// Calendar day plus 60, 61-91.
    Coordination,
}

impl DayEncoding {
    /// Offset added to the calendar day.
    pub fn offset(self) -> u32 {
        match self {
            Self::Calendar => 0,
            Self::Coordination => 60,
        }
    }

    /// Map the raw day field back to a calendar day, checking its range.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if the field is outside the range
    /// of this encoding.
    pub fn calendar_day(self, raw: &str, field: u32) -> Result<u32, StbError> {
        let offset = self.offset();
        if field < offset + 1 || field > offset + 31 {
            return Err(StbError::structure(
                raw,
                format!("day field must be between {:02} and {:02}", offset + 1, offset + 31),
            ));
        }
        Ok(field - offset)
    }
}

/// Fields extracted from a personal or coordination number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthNumberParts {
    /// Explicit century prefix, if the input had 8 date digits.
    pub century: Option<u32>,
    /// Two-digit year.
    pub year: u32,
    /// Month field, already checked to be 01-12.
    pub month: u32,
    /// Raw day field, unchecked (its range depends on the encoding).
    pub day: u32,
    /// `'-'` or `'+'` if present in the input.
    pub delimiter: Option<char>,
    /// Three-digit serial number.
    pub serial: String,
    /// Final digit.
    pub check_digit: char,
}

impl BirthNumberParts {
    /// The nine digits the check digit is computed over: `YYMMDDNNN`.
    pub fn checksum_base(&self) -> String {
        format!("{:02}{:02}{:02}{}", self.year, self.month, self.day, self.serial)
    }
}

/// Parse the `[YY]YYMMDD[-+]NNNC` grammar.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `raw` does not match the grammar or
/// the month field is not 01-12.
pub fn parse_birth_number(raw: &str) -> Result<BirthNumberParts, StbError> {
    let (date_part, delimiter, tail) = match raw.find(['-', '+']) {
        Some(pos) => (&raw[..pos], raw[pos..].chars().next(), &raw[pos + 1..]),
        None => {
            if !is_digits(raw) || raw.len() < 4 {
                return Err(StbError::structure(raw, BIRTH_NUMBER_FORM));
            }
            let split = raw.len() - 4;
            (&raw[..split], None, &raw[split..])
        }
    };

    if !is_digits(date_part) || !is_digits(tail) || tail.len() != 4 {
        return Err(StbError::structure(raw, BIRTH_NUMBER_FORM));
    }
    let (century, date_digits) = match date_part.len() {
        8 => (Some(number(&date_part[..2])), &date_part[2..]),
        6 => (None, date_part),
        _ => return Err(StbError::structure(raw, BIRTH_NUMBER_FORM)),
    };

    let month = number(&date_digits[2..4]);
    if !(1..=12).contains(&month) {
        return Err(StbError::structure(raw, "month field must be between 01 and 12"));
    }

    Ok(BirthNumberParts {
        century,
        year: number(&date_digits[..2]),
        month,
        day: number(&date_digits[4..6]),
        delimiter,
        serial: tail[..3].to_string(),
        check_digit: char::from(tail.as_bytes()[3]),
    })
}

/// Fields extracted from an organization number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationParts {
    /// The ten digits with the delimiter removed.
    pub digits: String,
}

impl OrganizationParts {
    /// Leading group digit.
    pub fn group_digit(&self) -> u32 {
        number(&self.digits[..1])
    }

    /// The eight digits between the group digit and the check digit.
    pub fn serial(&self) -> &str {
        &self.digits[1..9]
    }

    /// The nine digits the check digit is computed over.
    pub fn checksum_base(&self) -> &str {
        &self.digits[..9]
    }

    /// Final digit.
    pub fn check_digit(&self) -> char {
        char::from(self.digits.as_bytes()[9])
    }
}

/// Parse the `NNNNNN-NNNN` grammar.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if `raw` does not match the grammar or
/// its third digit is below 2.
pub fn parse_organization(raw: &str) -> Result<OrganizationParts, StbError> {
    let Some((head, tail)) = raw.split_once('-') else {
        return Err(StbError::structure(raw, ORGANIZATION_FORM));
    };
    if head.len() != 6 || tail.len() != 4 || !is_digits(head) || !is_digits(tail) {
        return Err(StbError::structure(raw, ORGANIZATION_FORM));
    }
    if number(&head[2..3]) < 2 {
        return Err(StbError::structure(raw, "third digit must be at least 2"));
    }

    Ok(OrganizationParts {
        digits: format!("{head}{tail}"),
    })
}

/// True if `s` is non-empty and all ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal value of a short ASCII digit string already checked by [`is_digits`].
fn number(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
