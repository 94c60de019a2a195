//! # Bank Accounts
//!
//! [`BankAccount`] is a clearing number and account number validated
//! against one [`BankType`]. Construction either yields a fully valid
//! account or fails with a single [`StbError`]:
//!
//! 1. clearing shape (4 digits, or 5 for Swedbank 8xxx) and clearing
//!    check digit,
//! 2. clearing range of the bank type,
//! 3. account-number shape,
//! 4. account check digit.

use serde::{Deserialize, Serialize};
use stb_core::checksum::{digit_char, modulo10};
use stb_core::StbError;

use crate::bank::{clearing_value, four_digit_clearing, AccountRules, BankType};

/// A validated Swedish bank account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBankAccount")]
pub struct BankAccount {
    bank_type: BankType,
    clearing: String,
    number: String,
}

/// Unvalidated wire form of a [`BankAccount`].
#[derive(Deserialize)]
struct RawBankAccount {
    bank_type: BankType,
    clearing: String,
    number: String,
}

impl TryFrom<RawBankAccount> for BankAccount {
    type Error = StbError;

    fn try_from(raw: RawBankAccount) -> Result<Self, Self::Error> {
        Self::new(raw.bank_type, &raw.clearing, &raw.number)
    }
}

impl BankAccount {
    /// Validate an explicit bank type, clearing number and account number.
    ///
    /// # Errors
    ///
    /// - [`StbError::Structure`] if the clearing number is malformed or
    ///   outside the bank type's ranges, or the account number has the
    ///   wrong shape.
    /// - [`StbError::CheckDigit`] if the clearing check digit (Swedbank
    ///   8xxx) or the account check digit is wrong.
    pub fn new(bank_type: BankType, clearing: &str, number: &str) -> Result<Self, StbError> {
        let raw = format!("{clearing},{number}");
        let clearing = four_digit_clearing(&bank_type, clearing, &raw)?;

        let value = clearing_value(clearing)?;
        if !bank_type.is_valid_clearing(value) {
            return Err(StbError::structure(
                raw,
                format!("clearing number {clearing} is not used by {bank_type}"),
            ));
        }

        let shape = bank_type.shape();
        if !shape.matches(number) {
            return Err(StbError::structure(
                raw,
                format!("account number must be {shape}"),
            ));
        }

        if !bank_type.is_valid_check_digit(clearing, number) {
            return Err(StbError::check_digit(raw));
        }

        Ok(Self {
            bank_type,
            clearing: clearing.to_string(),
            number: number.to_string(),
        })
    }

    /// Parse a free-form account string, selecting the bank type from the
    /// clearing number.
    ///
    /// Accepted forms: `CCCC,N…`, `CCCC-N…`, `CCCC N…`, `CCCCN…`, and for
    /// Swedbank 8xxx `CCCC-C,N…`. Spaces and dashes inside the account
    /// part are ignored.
    ///
    /// # Errors
    ///
    /// [`StbError::UnsupportedBankType`] if no bank type owns the clearing
    /// number, otherwise as [`BankAccount::new`].
    pub fn parse(raw: &str) -> Result<Self, StbError> {
        let (clearing, number) = split_account(raw)?;
        let bank_type = BankType::from_clearing(&clearing)?;
        Self::new(bank_type, &clearing, &number)
    }

    /// Parse a free-form account string as a known bank type.
    ///
    /// # Errors
    ///
    /// As [`BankAccount::new`].
    pub fn parse_as(bank_type: BankType, raw: &str) -> Result<Self, StbError> {
        let (clearing, number) = split_account(raw)?;
        Self::new(bank_type, &clearing, &number)
    }

    pub fn bank_type(&self) -> BankType {
        self.bank_type
    }

    /// Four-digit clearing number.
    pub fn clearing(&self) -> &str {
        &self.clearing
    }

    /// Fifth clearing digit, for bank types that carry one.
    pub fn clearing_check_digit(&self) -> Option<char> {
        if !self.bank_type.has_clearing_check_digit() {
            return None;
        }
        modulo10::check_digit(&self.clearing).ok().map(digit_char)
    }

    /// Account number as given, including any zero padding.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn bank_name(&self) -> &'static str {
        self.bank_type.bank_name()
    }

    /// Canonical display form, as defined by the bank type.
    pub fn describe(&self) -> String {
        self.bank_type.describe(&self.clearing, &self.number)
    }
}

impl std::fmt::Display for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::str::FromStr for BankAccount {
    type Err = StbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split a free-form account string into clearing and account parts.
fn split_account(raw: &str) -> Result<(String, String), StbError> {
    let trimmed = raw.trim();
    let (clearing, number) = if let Some((clearing, number)) = trimmed.split_once(',') {
        (swedbank_clearing(clearing.trim()), number)
    } else if let Some((clearing, number)) = trimmed.split_once(['-', ' ']) {
        (clearing.to_string(), number)
    } else if trimmed.len() > 4 && trimmed.is_char_boundary(4) {
        let (clearing, number) = trimmed.split_at(4);
        (clearing.to_string(), number)
    } else {
        return Err(StbError::structure(
            raw,
            "account must be a clearing number followed by an account number",
        ));
    };

    let number: String = number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if clearing.is_empty() || number.is_empty() {
        return Err(StbError::structure(
            raw,
            "account must be a clearing number followed by an account number",
        ));
    }
    Ok((clearing, number))
}

/// `CCCC-C` to `CCCCC`; anything else unchanged.
fn swedbank_clearing(clearing: &str) -> String {
    match clearing.split_once('-') {
        Some((head, check)) if head.len() == 4 && check.len() == 1 => format!("{head}{check}"),
        _ => clearing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stb_core::ErrorKind;

    // ---- new ----

    #[test]
    fn new_valid() {
        let account = BankAccount::new(BankType::NordeaTyp1B, "4000", "1234567").unwrap();
        assert_eq!(account.bank_type(), BankType::NordeaTyp1B);
        assert_eq!(account.clearing(), "4000");
        assert_eq!(account.number(), "1234567");
        assert_eq!(account.bank_name(), "Nordea");
        assert_eq!(account.clearing_check_digit(), None);
    }

    #[test]
    fn new_clearing_out_of_range() {
        let err = BankAccount::new(BankType::NordeaTyp1B, "3000", "1234568").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(format!("{err}").contains("clearing number 3000"));
    }

    #[test]
    fn new_bad_shapes() {
        for (clearing, number) in [("400", "1234567"), ("4000", "123456"), ("4000", "12a4567")] {
            let err = BankAccount::new(BankType::NordeaTyp1B, clearing, number).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{clearing},{number}");
        }
    }

    #[test]
    fn new_check_digit() {
        let err = BankAccount::new(BankType::Handelsbanken, "6789", "123456788").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckDigit);
    }

    // ---- swedbank clearing check digit ----

    #[test]
    fn swedbank_five_digit_clearing() {
        let account = BankAccount::new(BankType::SwedbankTyp2, "83279", "1234567897").unwrap();
        assert_eq!(account.clearing(), "8327");
        assert_eq!(account.clearing_check_digit(), Some('9'));

        let err = BankAccount::new(BankType::SwedbankTyp2, "83278", "1234567897").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckDigit);
    }

    #[test]
    fn new_and_validate_agree() {
        for (bank_type, clearing, number) in [
            (BankType::SwedbankTyp2, "83279", "1234567897"),
            (BankType::SwedbankTyp2, "83278", "1234567897"),
            (BankType::SwedbankTyp2, "8327", "1234567897"),
            (BankType::Seb, "50000", "1234560"),
            (BankType::NordeaTyp1B, "3000", "1234568"),
            (BankType::Handelsbanken, "6789", "123456789"),
        ] {
            assert_eq!(
                BankAccount::new(bank_type, clearing, number).is_ok(),
                crate::bank::validate(bank_type, clearing, number),
                "{bank_type:?} {clearing},{number}"
            );
        }
    }

    #[test]
    fn five_digit_clearing_only_for_swedbank() {
        let err = BankAccount::new(BankType::Seb, "50000", "1234560").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    // ---- parse ----

    #[test]
    fn parse_separators() {
        for raw in ["5000,1234560", "5000-1234560", "5000 1234560", "50001234560", " 5000, 1234560 "] {
            let account = BankAccount::parse(raw).unwrap();
            assert_eq!(account.bank_type(), BankType::Seb, "{raw:?}");
            assert_eq!(account.describe(), "5000,1234560");
        }
    }

    #[test]
    fn parse_swedbank_form() {
        let account = BankAccount::parse("8327-9,1234567897").unwrap();
        assert_eq!(account.bank_type(), BankType::SwedbankTyp2);
        assert_eq!(account.to_string(), "8327-9,1234567897");

        let account = BankAccount::parse("8327,123 456 789-7").unwrap();
        assert_eq!(account.number(), "1234567897");
    }

    #[test]
    fn parse_unsupported_clearing() {
        let err = BankAccount::parse("9999,1234567").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedBankType);
    }

    #[test]
    fn parse_malformed() {
        for raw in ["", "1234", ",1234567", "5000,"] {
            let err = BankAccount::parse(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{raw:?}");
        }
    }

    #[test]
    fn parse_as_explicit_type() {
        let account = BankAccount::parse_as(BankType::NordeaPlusgirot, "9960,1234567-4").unwrap();
        assert_eq!(account.describe(), "1234567-4");
        let err = BankAccount::parse_as(BankType::Seb, "4000,1234567").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
    }

    // ---- serde ----

    #[test]
    fn serde_validates() {
        let account = BankAccount::parse("6789,123456789").unwrap();
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["bank_type"], "handelsbanken");
        assert_eq!(json["clearing"], "6789");
        let back: BankAccount = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);

        let tampered = serde_json::json!({
            "bank_type": "handelsbanken",
            "clearing": "6789",
            "number": "123456788",
        });
        assert!(serde_json::from_value::<BankAccount>(tampered).is_err());
    }
}
