//! # Organization Numbers (organisationsnummer)
//!
//! Format `NNNNNN-NNNN`. The third digit is always at least 2, which keeps
//! organization numbers disjoint from personal numbers (whose third digit
//! is the first month digit, 0 or 1). The leading digit hints at the legal
//! form; the check digit is modulo 10 over the first nine digits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stb_core::checksum::{digit_char, modulo10};
use stb_core::StbError;

use crate::century::Delimiter;
use crate::grammar;
use crate::identifier::{IdKind, NationalId};
use crate::sex::Sex;

/// Legal-form group encoded in the leading digit.
///
/// This is a hint only and does not conclusively determine the legal
/// status of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationGroup {
    /// 2: state, county council, municipality or parish.
    Public,
    /// 5: limited company (aktiebolag).
    LimitedCompany,
    /// 6: simple partnership (enkelt bolag).
    SimplePartnership,
    /// 7: economic association (ekonomisk förening).
    EconomicAssociation,
    /// 8: non-profit association or foundation.
    NonProfit,
    /// 9: trading or limited partnership.
    TradingPartnership,
    /// Any other leading digit.
    Unknown,
}

impl OrganizationGroup {
    /// Map the leading digit of an organization number.
    pub fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Public,
            5 => Self::LimitedCompany,
            6 => Self::SimplePartnership,
            7 => Self::EconomicAssociation,
            8 => Self::NonProfit,
            9 => Self::TradingPartnership,
            _ => Self::Unknown,
        }
    }

    /// Swedish description of the group.
    pub fn description(self) -> &'static str {
        match self {
            Self::Public => "Stat, landsting, kommun eller församling",
            Self::LimitedCompany => "Aktiebolag",
            Self::SimplePartnership => "Enkelt bolag",
            Self::EconomicAssociation => "Ekonomisk förening",
            Self::NonProfit => "Ideell förening eller stiftelse",
            Self::TradingPartnership => "Handelsbolag, kommanditbolag eller enkelt bolag",
            Self::Unknown => "Okänd",
        }
    }
}

impl std::fmt::Display for OrganizationGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A validated Swedish organization number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrganizationId {
    digits: String,
}

impl_string_serde!(OrganizationId);

impl OrganizationId {
    /// Parse an organization number.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if the input is not `NNNNNN-NNNN`
    /// or its third digit is below 2, and [`StbError::CheckDigit`] if the
    /// check digit is wrong.
    pub fn parse(raw: &str) -> Result<Self, StbError> {
        let parts = grammar::parse_organization(raw)?;
        let expected = modulo10::check_digit(parts.checksum_base())?;
        if digit_char(expected) != parts.check_digit() {
            return Err(StbError::check_digit(raw));
        }
        Ok(Self {
            digits: parts.digits,
        })
    }

    /// Leading digit.
    pub fn group_digit(&self) -> u32 {
        u32::from(self.digits.as_bytes()[0] - b'0')
    }

    /// Legal-form group hinted by the leading digit.
    pub fn group(&self) -> OrganizationGroup {
        OrganizationGroup::from_digit(self.group_digit())
    }
}

impl NationalId for OrganizationId {
    fn kind(&self) -> IdKind {
        IdKind::Organization
    }

    fn serial(&self) -> &str {
        &self.digits[1..9]
    }

    fn check_digit(&self) -> char {
        char::from(self.digits.as_bytes()[9])
    }

    fn delimiter(&self) -> Delimiter {
        Delimiter::Minus
    }

    fn sex(&self) -> Sex {
        Sex::Other
    }

    fn birth_date(&self) -> Option<NaiveDate> {
        None
    }

    fn long_form(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", &self.digits[..6], &self.digits[6..])
    }
}

impl std::str::FromStr for OrganizationId {
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

    #[test]
    fn parses_valid_numbers() {
        let org = OrganizationId::parse("556016-0680").unwrap();
        assert_eq!(org.to_string(), "556016-0680");
        assert_eq!(org.group_digit(), 5);
        assert_eq!(org.group(), OrganizationGroup::LimitedCompany);
        assert_eq!(org.serial(), "56016068");
        assert_eq!(org.check_digit(), '0');

        let public = OrganizationId::parse("202100-5489").unwrap();
        assert_eq!(public.group(), OrganizationGroup::Public);
    }

    #[test]
    fn invalid_check_digit() {
        let err = OrganizationId::parse("556016-0681").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckDigit);
    }

    #[test]
    fn invalid_structure() {
        for raw in ["", "5560160680", "556016+0680", "551016-0680", "55601A-0680"] {
            let err = OrganizationId::parse(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{raw:?}");
        }
    }

    #[test]
    fn personal_numbers_are_not_organizations() {
        let err = OrganizationId::parse("670919-9530").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    #[test]
    fn no_birth_semantics() {
        let org = OrganizationId::parse("556016-0680").unwrap();
        assert_eq!(org.sex(), Sex::Other);
        assert_eq!(org.birth_date(), None);
        assert_eq!(org.birth_county(), BirthCounty::Undefined);
        assert_eq!(org.delimiter(), Delimiter::Minus);
        assert_eq!(org.long_form(), "556016-0680");
        assert_eq!(org.kind(), IdKind::Organization);
    }

    #[test]
    fn group_descriptions() {
        assert_eq!(OrganizationGroup::from_digit(5).description(), "Aktiebolag");
        assert_eq!(OrganizationGroup::from_digit(3), OrganizationGroup::Unknown);
        assert_eq!(OrganizationGroup::from_digit(1).to_string(), "Okänd");
    }

    #[test]
    fn serde_roundtrip() {
        let org = OrganizationId::parse("556016-0680").unwrap();
        let json = serde_json::to_string(&org).unwrap();
        assert_eq!(json, "\"556016-0680\"");
        let back: OrganizationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, org);
    }
}
