//! # Century Resolution
//!
//! Birth-date identifiers carry a two-digit year. The delimiter decides
//! the century: `-` means the subject is younger than 100 at the reference
//! date, `+` means 100 or older.
//!
//! - **No century in the input.** The `-` candidate is the latest date with
//!   the given YYMMDD that is not after the reference date. `+` selects the
//!   same date one hundred years earlier.
//! - **Explicit century.** The birth date is fixed. The delimiter is
//!   normalized from the age at the reference date, overriding whatever
//!   delimiter the input carried.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use stb_core::temporal::{age_in_years, calendar_date};
use stb_core::StbError;

use crate::grammar::BirthNumberParts;

/// Age at which the delimiter switches from `-` to `+`.
pub const CENTENARIAN_AGE: i32 = 100;

/// Separator between the date and serial segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    /// Subject is younger than 100 at the reference date.
    #[serde(rename = "-")]
    Minus,
    /// Subject is 100 or older at the reference date.
    #[serde(rename = "+")]
    Plus,
}

impl Delimiter {
    /// Map a raw delimiter character. Anything but `+` reads as `-`.
    pub fn from_char(c: Option<char>) -> Self {
        match c {
            Some('+') => Self::Plus,
            _ => Self::Minus,
        }
    }

    /// The delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Plus => '+',
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Outcome of century resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Full birth date, coordination offset removed.
    pub birth_date: NaiveDate,
    /// Delimiter consistent with the birth date and reference date.
    pub delimiter: Delimiter,
}

/// Resolve the full birth date and delimiter of a parsed birth number.
///
/// `day` is the calendar day, with any coordination offset already removed.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if the resolved date does not exist
/// (e.g. February 29th in a non-leap year).
pub fn resolve(
    raw: &str,
    parts: &BirthNumberParts,
    day: u32,
    reference: NaiveDate,
) -> Result<Resolution, StbError> {
    match parts.century {
        Some(century) => {
            let year = (century * 100 + parts.year) as i32;
            let birth_date = calendar_date(raw, year, parts.month, day)?;
            let delimiter = if age_in_years(birth_date, reference) >= CENTENARIAN_AGE {
                Delimiter::Plus
            } else {
                Delimiter::Minus
            };
            Ok(Resolution {
                birth_date,
                delimiter,
            })
        }
        None => {
            let delimiter = Delimiter::from_char(parts.delimiter);
            let mut year = reference.year() - reference.year().rem_euclid(100) + parts.year as i32;
            if (year, parts.month, day) > (reference.year(), reference.month(), reference.day()) {
                year -= 100;
            }
            if delimiter == Delimiter::Plus {
                year -= 100;
            }
            let birth_date = calendar_date(raw, year, parts.month, day)?;
            Ok(Resolution {
                birth_date,
                delimiter,
            })
        }
    }
}
