//! # Personal Identity Numbers (personnummer)
//!
//! Format `[YY]YYMMDD[-+]NNNC`. The serial's last digit encodes sex, and
//! for births before 1990 the first two serial digits encode the county
//! of birth. The check digit is modulo 10 over `YYMMDDNNN`.

use chrono::{Datelike, NaiveDate};
use stb_core::temporal::today;
use stb_core::StbError;

use crate::birth::BirthNumber;
use crate::century::Delimiter;
use crate::county::{BirthCounty, LAST_COUNTY_ENCODING_YEAR};
use crate::grammar::DayEncoding;
use crate::identifier::{IdKind, NationalId};
use crate::sex::Sex;

/// A validated Swedish personal identity number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalId(BirthNumber);

impl_string_serde!(PersonalId);

impl PersonalId {
    /// Parse a personal number, resolving the century against today.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if the input does not match the
    /// grammar or names an impossible date, and [`StbError::CheckDigit`]
    /// if the check digit is wrong.
    pub fn parse(raw: &str) -> Result<Self, StbError> {
        Self::parse_at(raw, today())
    }

    /// Parse a personal number, resolving the century against `reference`.
    ///
    /// # Errors
    ///
    /// Same as [`PersonalId::parse`].
    pub fn parse_at(raw: &str, reference: NaiveDate) -> Result<Self, StbError> {
        BirthNumber::parse(raw, DayEncoding::Calendar, reference).map(Self)
    }

    /// Two-digit century of the birth year.
    pub fn century(&self) -> u32 {
        self.0.century()
    }

    /// Two-digit birth year.
    pub fn year(&self) -> u32 {
        self.0.year()
    }

    /// Birth month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Birth day of month.
    pub fn day(&self) -> u32 {
        self.0.day_field()
    }

    /// The number with its century: `YYYYMMDD{delim}NNNC`.
    pub fn to_long_string(&self) -> String {
        self.0.long_form()
    }

    /// County of birth, for births before 1990.
    pub fn birth_county(&self) -> BirthCounty {
        if self.0.birth_date().year() > LAST_COUNTY_ENCODING_YEAR {
            return BirthCounty::Undefined;
        }
        BirthCounty::from_serial_prefix(self.0.serial_prefix())
    }
}

impl NationalId for PersonalId {
    fn kind(&self) -> IdKind {
        IdKind::Personal
    }

    fn serial(&self) -> &str {
        self.0.serial()
    }

    fn check_digit(&self) -> char {
        self.0.check_digit()
    }

    fn delimiter(&self) -> Delimiter {
        self.0.delimiter()
    }

    fn sex(&self) -> Sex {
        self.0.sex()
    }

    fn birth_date(&self) -> Option<NaiveDate> {
        Some(self.0.birth_date())
    }

    fn birth_county(&self) -> BirthCounty {
        PersonalId::birth_county(self)
    }

    fn long_form(&self) -> String {
        self.to_long_string()
    }
}

impl std::fmt::Display for PersonalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.canonical())
    }
}

impl std::str::FromStr for PersonalId {
    type Err = StbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
