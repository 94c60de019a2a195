//! # Calendar Dates
//!
//! Thin helpers over `chrono::NaiveDate` that turn impossible dates into
//! [`StbError::Structure`] instead of `None`, plus the "today" used when a
//! caller supplies no reference date.
//!
//! Identifiers never read the clock themselves. The convenience
//! constructors call [`today`] once and pass the result down, so every
//! date-sensitive computation has an explicit reference date.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::StbError;

/// The current date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Build a calendar date, reporting impossible dates against `raw`.
///
/// # Errors
///
/// Returns [`StbError::Structure`] if the year, month and day do not form
/// a real date (e.g. February 30th).
pub fn calendar_date(raw: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate, StbError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        StbError::structure(raw, format!("{year:04}-{month:02}-{day:02} is not a valid date"))
    })
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`StbError::Structure`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, StbError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| StbError::structure(s, format!("invalid date: {e}")))
}

/// Whole years elapsed from `born` to `at`. Negative if `born` is after `at`.
pub fn age_in_years(born: NaiveDate, at: NaiveDate) -> i32 {
    let mut years = at.year() - born.year();
    if (at.month(), at.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_date_accepts_real_dates() {
        assert_eq!(calendar_date("x", 2000, 2, 29).unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn calendar_date_rejects_impossible_dates() {
        let err = calendar_date("820230-1234", 1982, 2, 30).unwrap_err();
        assert!(err.is_structural());
        assert!(format!("{err}").contains("820230-1234"));
        assert!(calendar_date("x", 1900, 2, 29).is_err());
        assert!(calendar_date("x", 1970, 13, 1).is_err());
        assert!(calendar_date("x", 1970, 1, 0).is_err());
    }

    #[test]
    fn parse_date_iso() {
        assert_eq!(parse_date("1990-01-01").unwrap(), date(1990, 1, 1));
        assert!(parse_date("19900101").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn age_counts_whole_years() {
        assert_eq!(age_in_years(date(1970, 10, 3), date(2070, 10, 2)), 99);
        assert_eq!(age_in_years(date(1970, 10, 3), date(2070, 10, 3)), 100);
        assert_eq!(age_in_years(date(1970, 10, 3), date(1970, 10, 3)), 0);
        assert_eq!(age_in_years(date(2000, 1, 2), date(2000, 1, 1)), -1);
    }

    #[test]
    fn today_is_after_epoch() {
        assert!(today() > date(2000, 1, 1));
    }
}
