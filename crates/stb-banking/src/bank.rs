//! # Bank Types and Account Rules
//!
//! Every Swedish bank account number is a clearing number followed by an
//! account number. The clearing number selects the bank, and the bank
//! decides the account number's shape and which digits its check digit
//! covers. Bankgirot groups the banks into rule families:
//!
//! | Family | Checksum | Digits covered |
//! |--------|----------|----------------|
//! | Type 1, comment 1 | modulo 11 | last 3 clearing digits + 7 account digits |
//! | Type 1, comment 2 | modulo 11 | all 4 clearing digits + 7 account digits |
//! | Type 2, comment 1 | modulo 10 | 10 account digits |
//! | Type 2, comment 2 | modulo 11 | 9 account digits |
//! | Type 2, comment 3 | modulo 10 | up to 10 account digits |
//!
//! ## Design
//!
//! [`BankType`] is the closed set of known banks. [`AccountRules`] is the
//! capability set each bank type provides; it is implemented once, for
//! [`BankType`], by dispatching on the rule family. Clearing ranges do not
//! overlap, so [`BankType::from_clearing`] is unambiguous. A clearing
//! number owned by no bank type is [`StbError::UnsupportedBankType`]; this
//! module never guesses.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use stb_core::checksum::{digit_char, modulo10, modulo11};
use stb_core::StbError;

/// Checksum family a bank type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Modulo 11 over the last 3 clearing digits and 7 account digits.
    Type1Comment1,
    /// Modulo 11 over the 4 clearing digits and 7 account digits.
    Type1Comment2,
    /// Modulo 10 over a 10-digit account number.
    Type2Comment1,
    /// Modulo 11 over a 9-digit account number.
    Type2Comment2,
    /// Modulo 10 over a variable-length account number.
    Type2Comment3,
}

/// Allowed shape of the account-number part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountShape {
    /// Exactly `significant` digits, optionally left-padded with up to
    /// `padding` zeros.
    Padded { significant: usize, padding: usize },
    /// Between `min` and `max` digits.
    Variable { min: usize, max: usize },
}

impl AccountShape {
    /// True if `number` has this shape.
    pub fn matches(self, number: &str) -> bool {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match self {
            Self::Padded {
                significant,
                padding,
            } => {
                let len = number.len();
                len >= significant
                    && len <= significant + padding
                    && number[..len - significant].bytes().all(|b| b == b'0')
            }
            Self::Variable { min, max } => (min..=max).contains(&number.len()),
        }
    }
}

impl std::fmt::Display for AccountShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Padded {
                significant,
                padding: 0,
            } => write!(f, "{significant} digits"),
            Self::Padded {
                significant,
                padding,
            } => write!(f, "{significant} digits, with up to {padding} leading zeros"),
            Self::Variable { min, max } => write!(f, "{min} to {max} digits"),
        }
    }
}

/// A known Swedish bank type, keyed by clearing-number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankType {
    #[serde(rename = "nordea_typ1a")]
    NordeaTyp1A,
    #[serde(rename = "nordea_typ1b")]
    NordeaTyp1B,
    /// Nordea accounts numbered by the holder's personal identity number.
    NordeaPersonkonto,
    NordeaPlusgirot,
    Seb,
    /// Swedbank, clearing 7xxx.
    Swedbank,
    /// Swedbank, clearing 8xxx, with a fifth clearing check digit.
    SwedbankTyp2,
    Handelsbanken,
    DanskeBank,
    DanskeBankTyp2,
    IcaBanken,
    Skandiabanken,
    Avanza,
    #[serde(rename = "lansforsakringar_typ1a")]
    LansforsakringarTyp1A,
    #[serde(rename = "lansforsakringar_typ1b")]
    LansforsakringarTyp1B,
    SparbankenSyd,
}

impl BankType {
    /// Every known bank type.
    pub const ALL: [BankType; 16] = [
        Self::NordeaTyp1A,
        Self::NordeaTyp1B,
        Self::NordeaPersonkonto,
        Self::NordeaPlusgirot,
        Self::Seb,
        Self::Swedbank,
        Self::SwedbankTyp2,
        Self::Handelsbanken,
        Self::DanskeBank,
        Self::DanskeBankTyp2,
        Self::IcaBanken,
        Self::Skandiabanken,
        Self::Avanza,
        Self::LansforsakringarTyp1A,
        Self::LansforsakringarTyp1B,
        Self::SparbankenSyd,
    ];

    /// Find the bank type owning a clearing number.
    ///
    /// Only the first four digits are considered, so a Swedbank clearing
    /// number with its fifth check digit dispatches too.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if `clearing` does not start with
    /// four digits, and [`StbError::UnsupportedBankType`] if no bank type
    /// owns it.
    pub fn from_clearing(clearing: &str) -> Result<Self, StbError> {
        let value = clearing_value(clearing)?;
        Self::ALL
            .into_iter()
            .find(|bank_type| bank_type.is_valid_clearing(value))
            .ok_or_else(|| StbError::UnsupportedBankType {
                clearing: clearing.to_string(),
            })
    }

    /// The checksum family of this bank type.
    pub fn family(self) -> RuleFamily {
        match self {
            Self::NordeaTyp1A
            | Self::Seb
            | Self::Swedbank
            | Self::DanskeBank
            | Self::IcaBanken
            | Self::LansforsakringarTyp1A => RuleFamily::Type1Comment1,
            Self::NordeaTyp1B
            | Self::Skandiabanken
            | Self::Avanza
            | Self::LansforsakringarTyp1B => RuleFamily::Type1Comment2,
            Self::NordeaPersonkonto | Self::DanskeBankTyp2 | Self::SparbankenSyd => {
                RuleFamily::Type2Comment1
            }
            Self::Handelsbanken => RuleFamily::Type2Comment2,
            Self::NordeaPlusgirot | Self::SwedbankTyp2 => RuleFamily::Type2Comment3,
        }
    }

    /// Stable identifier, as used by serde and [`FromStr`](std::str::FromStr).
    pub fn slug(self) -> &'static str {
        match self {
            Self::NordeaTyp1A => "nordea_typ1a",
            Self::NordeaTyp1B => "nordea_typ1b",
            Self::NordeaPersonkonto => "nordea_personkonto",
            Self::NordeaPlusgirot => "nordea_plusgirot",
            Self::Seb => "seb",
            Self::Swedbank => "swedbank",
            Self::SwedbankTyp2 => "swedbank_typ2",
            Self::Handelsbanken => "handelsbanken",
            Self::DanskeBank => "danske_bank",
            Self::DanskeBankTyp2 => "danske_bank_typ2",
            Self::IcaBanken => "ica_banken",
            Self::Skandiabanken => "skandiabanken",
            Self::Avanza => "avanza",
            Self::LansforsakringarTyp1A => "lansforsakringar_typ1a",
            Self::LansforsakringarTyp1B => "lansforsakringar_typ1b",
            Self::SparbankenSyd => "sparbanken_syd",
        }
    }
}

impl std::fmt::Display for BankType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bank_name())
    }
}

impl std::str::FromStr for BankType {
    type Err = StbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bank_type| bank_type.slug() == s)
            .ok_or_else(|| StbError::structure(s, "unknown bank type"))
    }
}

/// Per-bank-type validation and formatting rules.
///
/// `clearing` is the four-digit clearing number everywhere except
/// [`AccountRules::validate`], which also takes the five-digit form of bank
/// types with a clearing check digit.
pub trait AccountRules {
    /// Human readable bank name.
    fn bank_name(&self) -> &'static str;

    /// Clearing-number ranges owned by this bank type.
    fn clearing_ranges(&self) -> &'static [RangeInclusive<u16>];

    /// Allowed shape of the account-number part.
    fn shape(&self) -> AccountShape;

    /// True if the account's check digit is correct. Assumes `number` has
    /// already matched [`AccountRules::shape`].
    fn is_valid_check_digit(&self, clearing: &str, number: &str) -> bool;

    /// Canonical display form of the account.
    fn describe(&self, clearing: &str, number: &str) -> String;

    /// True if the clearing number may carry a fifth, modulo-10 check digit.
    fn has_clearing_check_digit(&self) -> bool {
        false
    }

    fn is_valid_clearing(&self, clearing: u16) -> bool {
        self.clearing_ranges()
            .iter()
            .any(|range| range.contains(&clearing))
    }

    /// Clearing form, clearing range, account shape and check digit, in
    /// that order.
    fn validate(&self, clearing: &str, number: &str) -> bool {
        let Ok(clearing) = four_digit_clearing(self, clearing, clearing) else {
            return false;
        };
        clearing_value(clearing).is_ok_and(|value| self.is_valid_clearing(value))
            && self.shape().matches(number)
            && self.is_valid_check_digit(clearing, number)
    }
}

impl AccountRules for BankType {
    fn bank_name(&self) -> &'static str {
        match self {
            Self::NordeaTyp1A | Self::NordeaTyp1B | Self::NordeaPersonkonto => "Nordea",
            Self::NordeaPlusgirot => "Nordea Plusgirot",
            Self::Seb => "SEB",
            Self::Swedbank | Self::SwedbankTyp2 => "Swedbank",
            Self::Handelsbanken => "Handelsbanken",
            Self::DanskeBank | Self::DanskeBankTyp2 => "Danske Bank",
            Self::IcaBanken => "ICA Banken",
            Self::Skandiabanken => "Skandiabanken",
            Self::Avanza => "Avanza Bank",
            Self::LansforsakringarTyp1A | Self::LansforsakringarTyp1B => "Länsförsäkringar Bank",
            Self::SparbankenSyd => "Sparbanken Syd",
        }
    }

    fn has_clearing_check_digit(&self) -> bool {
        *self == Self::SwedbankTyp2
    }

    fn clearing_ranges(&self) -> &'static [RangeInclusive<u16>] {
        match self {
            Self::NordeaTyp1A => &[
                1100..=1199,
                1400..=2099,
                3000..=3299,
                3301..=3399,
                3410..=3781,
                3783..=3999,
            ],
            Self::NordeaTyp1B => &[4000..=4999],
            Self::NordeaPersonkonto => &[3300..=3300, 3782..=3782],
            Self::NordeaPlusgirot => &[9500..=9549, 9960..=9969],
            Self::Seb => &[5000..=5999, 9120..=9124, 9130..=9149],
            Self::Swedbank => &[7000..=7999],
            Self::SwedbankTyp2 => &[8000..=8999],
            Self::Handelsbanken => &[6000..=6999],
            Self::DanskeBank => &[1200..=1399, 2400..=2499],
            Self::DanskeBankTyp2 => &[9180..=9189],
            Self::IcaBanken => &[9270..=9279],
            Self::Skandiabanken => &[9150..=9169],
            Self::Avanza => &[9550..=9569],
            Self::LansforsakringarTyp1A => &[3400..=3409, 9060..=9069],
            Self::LansforsakringarTyp1B => &[9020..=9029],
            Self::SparbankenSyd => &[9570..=9579],
        }
    }

    fn shape(&self) -> AccountShape {
        match self.family() {
            RuleFamily::Type1Comment1 | RuleFamily::Type1Comment2 => AccountShape::Padded {
                significant: 7,
                padding: 5,
            },
            RuleFamily::Type2Comment1 => AccountShape::Padded {
                significant: 10,
                padding: 0,
            },
            RuleFamily::Type2Comment2 => AccountShape::Padded {
                significant: 9,
                padding: 3,
            },
            RuleFamily::Type2Comment3 => match self {
                Self::SwedbankTyp2 => AccountShape::Variable { min: 6, max: 10 },
                _ => AccountShape::Variable { min: 2, max: 10 },
            },
        }
    }

    fn is_valid_check_digit(&self, clearing: &str, number: &str) -> bool {
        let checked = match self.family() {
            RuleFamily::Type1Comment1 => {
                modulo11::verify(&format!("{}{}", tail(clearing, 3), tail(number, 7)))
            }
            RuleFamily::Type1Comment2 => {
                modulo11::verify(&format!("{clearing}{}", tail(number, 7)))
            }
            RuleFamily::Type2Comment1 => modulo10::verify(tail(number, 10)),
            RuleFamily::Type2Comment2 => modulo11::verify(tail(number, 9)),
            RuleFamily::Type2Comment3 => modulo10::verify(number),
        };
        checked.unwrap_or(false)
    }

    fn describe(&self, clearing: &str, number: &str) -> String {
        match self.family() {
            RuleFamily::Type1Comment1 | RuleFamily::Type1Comment2 => {
                format!("{clearing},{}", tail(number, 7))
            }
            RuleFamily::Type2Comment1 => format!("{clearing},{}", tail(number, 10)),
            RuleFamily::Type2Comment2 => format!("{clearing},{}", tail(number, 9)),
            RuleFamily::Type2Comment3 => {
                let significant = strip_zeros(number);
                if *self == Self::SwedbankTyp2 {
                    let check = modulo10::check_digit(clearing)
                        .map(digit_char)
                        .unwrap_or('0');
                    format!("{clearing}-{check},{significant}")
                } else {
                    let (body, check) = significant.split_at(significant.len().saturating_sub(1));
                    format!("{body}-{check}")
                }
            }
        }
    }
}

/// Validate a clearing number and account number against `bank_type`.
pub fn validate(bank_type: BankType, clearing: &str, number: &str) -> bool {
    bank_type.validate(clearing, number)
}

/// Numeric value of the first four digits of a clearing number.
pub(crate) fn clearing_value(clearing: &str) -> Result<u16, StbError> {
    clearing
        .get(..4)
        .filter(|head| head.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|head| head.parse().ok())
        .ok_or_else(|| StbError::structure(clearing, "clearing number must start with 4 digits"))
}

/// Reduce a clearing number to its four-digit form, verifying a fifth
/// check digit when `rules` allows one. `raw` is reported in errors.
pub(crate) fn four_digit_clearing<'a, R: AccountRules + ?Sized>(
    rules: &R,
    clearing: &'a str,
    raw: &str,
) -> Result<&'a str, StbError> {
    let all_digits = clearing.bytes().all(|b| b.is_ascii_digit());
    match clearing.len() {
        4 if all_digits => Ok(clearing),
        5 if all_digits && rules.has_clearing_check_digit() => {
            if modulo10::verify(clearing)? {
                Ok(&clearing[..4])
            } else {
                Err(StbError::check_digit(raw))
            }
        }
        _ if rules.has_clearing_check_digit() => Err(StbError::structure(
            raw,
            "clearing number must be 4 digits, or 5 with check digit",
        )),
        _ => Err(StbError::structure(raw, "clearing number must be 4 digits")),
    }
}

/// The last `n` characters of an ASCII digit string.
fn tail(s: &str, n: usize) -> &str {
    s.get(s.len().saturating_sub(n)..).unwrap_or(s)
}

/// `number` without leading zeros, keeping at least two digits.
fn strip_zeros(number: &str) -> &str {
    let trimmed = number.trim_start_matches('0');
    if trimmed.len() >= 2 {
        trimmed
    } else {
        tail(number, 2)
    }
}
