//! Shared core of personal and coordination numbers: grammar, century
//! resolution and check digit, parameterized by the day-field encoding.

use chrono::{Datelike, NaiveDate};
use stb_core::checksum::{digit_char, modulo10};
use stb_core::StbError;

use crate::century::{self, Delimiter};
use crate::grammar::{self, DayEncoding};
use crate::sex::Sex;

/// A validated birth-date identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct BirthNumber {
    birth_date: NaiveDate,
    day_field: u32,
    serial: String,
    check_digit: char,
    delimiter: Delimiter,
    century_in_input: bool,
}

impl BirthNumber {
    /// Parse and validate `raw` against `reference`.
    ///
    /// Structure (grammar, day range, calendar date) is checked before the
    /// check digit, so a structurally foreign input never reports
    /// [`StbError::CheckDigit`].
    pub(crate) fn parse(
        raw: &str,
        encoding: DayEncoding,
        reference: NaiveDate,
    ) -> Result<Self, StbError> {
        let parts = grammar::parse_birth_number(raw)?;
        let day = encoding.calendar_day(raw, parts.day)?;
        let resolution = century::resolve(raw, &parts, day, reference)?;

        let expected = modulo10::check_digit(&parts.checksum_base())?;
        if digit_char(expected) != parts.check_digit {
            return Err(StbError::check_digit(raw));
        }

        Ok(Self {
            birth_date: resolution.birth_date,
            day_field: parts.day,
            serial: parts.serial,
            check_digit: parts.check_digit,
            delimiter: resolution.delimiter,
            century_in_input: parts.century.is_some(),
        })
    }

    pub(crate) fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub(crate) fn century(&self) -> u32 {
        (self.birth_date.year() / 100) as u32
    }

    pub(crate) fn year(&self) -> u32 {
        (self.birth_date.year() % 100) as u32
    }

    pub(crate) fn month(&self) -> u32 {
        self.birth_date.month()
    }

    pub(crate) fn day_field(&self) -> u32 {
        self.day_field
    }

    pub(crate) fn serial(&self) -> &str {
        &self.serial
    }

    pub(crate) fn check_digit(&self) -> char {
        self.check_digit
    }

    pub(crate) fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub(crate) fn sex(&self) -> Sex {
        Sex::from_serial(&self.serial)
    }

    /// First two serial digits.
    pub(crate) fn serial_prefix(&self) -> u32 {
        self.serial
            .bytes()
            .take(2)
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// `YYMMDD{delim}NNNC`.
    pub(crate) fn short_form(&self) -> String {
        format!(
            "{:02}{:02}{:02}{}{}{}",
            self.year(),
            self.month(),
            self.day_field,
            self.delimiter,
            self.serial,
            self.check_digit
        )
    }

    /// `YYYYMMDD{delim}NNNC`.
    pub(crate) fn long_form(&self) -> String {
        format!("{:02}{}", self.century(), self.short_form())
    }

    /// Canonical form: the long form if the input carried a century,
    /// otherwise the short form.
    pub(crate) fn canonical(&self) -> String {
        if self.century_in_input {
            self.long_form()
        } else {
            self.short_form()
        }
    }
}
