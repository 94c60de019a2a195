//! # Coordination Numbers (samordningsnummer)
//!
//! Issued to people who are not, or have not been, registered in Sweden.
//! Identical to a personal number except that the day-of-month field is
//! offset by 60 (61-91). The birth county is never encoded.

use chrono::NaiveDate;
use stb_core::temporal::today;
use stb_core::StbError;

use crate::birth::BirthNumber;
use crate::century::Delimiter;
use crate::grammar::DayEncoding;
use crate::identifier::{IdKind, NationalId};
use crate::sex::Sex;

/// A validated Swedish coordination number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinationId(BirthNumber);

impl_string_serde!(CoordinationId);

impl CoordinationId {
    /// Parse a coordination number, resolving the century against today.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if the input does not match the
    /// grammar, the day field is outside 61-91, or the date is impossible;
    /// [`StbError::CheckDigit`] if the check digit is wrong.
    pub fn parse(raw: &str) -> Result<Self, StbError> {
        Self::parse_at(raw, today())
    }

    /// Parse a coordination number, resolving the century against `reference`.
    ///
    /// # Errors
    ///
    /// Same as [`CoordinationId::parse`].
    pub fn parse_at(raw: &str, reference: NaiveDate) -> Result<Self, StbError> {
        BirthNumber::parse(raw, DayEncoding::Coordination, reference).map(Self)
    }

    pub fn century(&self) -> u32 {
        self.0.century()
    }

    pub fn year(&self) -> u32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The raw day field, offset by 60.
    pub fn day(&self) -> u32 {
        self.0.day_field()
    }

    /// The number with its century: `YYYYMMDD{delim}NNNC`.
    pub fn to_long_string(&self) -> String {
        self.0.long_form()
    }
}

impl NationalId for CoordinationId {
    fn kind(&self) -> IdKind {
        IdKind::Coordination
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

    fn long_form(&self) -> String {
        self.to_long_string()
    }
}

impl std::fmt::Display for CoordinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.canonical())
    }
}

impl std::str::FromStr for CoordinationId {
    type Err = StbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::county::BirthCounty;
    use stb_core::ErrorKind;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn id(raw: &str) -> CoordinationId {
        CoordinationId::parse_at(raw, reference()).unwrap()
    }

    // ---- structure ----

    #[test]
    fn invalid_structure() {
        for raw in [
            "",
            "123456",
            "123456-",
            "-1234",
            "123456-123",
            "123456-12345",
            "1234567-1234",
            "123456-1A34",
            "12A456-1234",
            "123456+",
            "+1234",
            "123456+123",
            "123456+12345",
            "1234567+1234",
            "123456+1A34",
            "12A456+1234",
        ] {
            let err = CoordinationId::parse_at(raw, reference()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{raw:?}");
        }
    }

    #[test]
    fn calendar_day_is_structural_for_coordination() {
        let err = CoordinationId::parse_at("670919-9530", reference()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    // ---- check digit ----

    #[test]
    fn invalid_check_digit() {
        for check in ['0', '1', '3', '4', '5', '6', '7', '8', '9'] {
            for delimiter in ['-', '+'] {
                let raw = format!("820383{delimiter}277{check}");
                let err = CoordinationId::parse_at(&raw, reference()).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::CheckDigit, "{raw}");
            }
        }
        assert!(CoordinationId::parse_at("820383-2772", reference()).is_ok());
    }

    // ---- formats ----

    #[test]
    fn interchangeable_formulas() {
        assert_eq!(id("701063-2391").to_string(), id("7010632391").to_string());
        assert_eq!(id("19701063-2391").to_string(), id("197010632391").to_string());
        assert_eq!(id("19701063-2391").to_string(), id("19701063+2391").to_string());
    }

    #[test]
    fn to_string_short_form() {
        assert_eq!(id("701063-2391").to_string(), "701063-2391");
        assert_eq!(id("701063-2391").to_long_string(), "19701063-2391");
    }

    #[test]
    fn delimiter_normalized_from_century() {
        assert_eq!(id("19701063+2391").delimiter(), Delimiter::Minus);
        assert_eq!(id("18701063-2391").delimiter(), Delimiter::Plus);
        assert_eq!(id("18701063-2391").to_string(), "18701063+2391");
    }

    // ---- derived fields ----

    #[test]
    fn birth_date_removes_offset() {
        let cid = id("701063-2391");
        assert_eq!(cid.day(), 63);
        assert_eq!(cid.birth_date(), NaiveDate::from_ymd_opt(1970, 10, 3));
    }

    #[test]
    fn century_from_delimiter() {
        assert_eq!(id("701063-2391").century(), 19);
        assert_eq!(id("701063+2391").century(), 18);
    }

    #[test]
    fn sex() {
        assert_eq!(id("701063-2391").sex(), Sex::Male);
        assert_eq!(id("770374-0345").sex(), Sex::Female);
    }

    #[test]
    fn birth_county_always_undefined() {
        assert_eq!(id("770374-0345").birth_county(), BirthCounty::Undefined);
    }

    #[test]
    fn century_from_reference_date() {
        let reference = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let cid = CoordinationId::parse_at("1912902390", reference).unwrap();
        assert_eq!(cid.birth_date(), NaiveDate::from_ymd_opt(1919, 12, 30));
    }

    #[test]
    fn serde_roundtrip() {
        let cid = id("701063-2391");
        let json = serde_json::to_string(&cid).unwrap();
        let back: CoordinationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "701063-2391");
    }
}
