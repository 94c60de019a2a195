//! # Identifier Kinds
//!
//! [`NationalId`] is the capability set shared by the three identifier
//! kinds. [`Identifier`] is the closed sum over them, returned by the
//! builder and the factory chain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stb_core::StbError;

use crate::century::Delimiter;
use crate::coordination::CoordinationId;
use crate::county::BirthCounty;
use crate::organization::OrganizationId;
use crate::personal::PersonalId;
use crate::sex::Sex;

/// The kind of a national identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    /// Personal identity number (personnummer).
    Personal,
    /// Coordination number (samordningsnummer).
    Coordination,
    /// Organization number (organisationsnummer).
    Organization,
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Personal => "personal",
            Self::Coordination => "coordination",
            Self::Organization => "organization",
        };
        f.write_str(s)
    }
}

/// Accessors shared by every validated identifier.
///
/// `Display` renders the canonical form.
pub trait NationalId: std::fmt::Display {
    /// Which kind of identifier this is.
    fn kind(&self) -> IdKind;

    /// Serial number: three digits for birth-date identifiers, the eight
    /// digits between group and check digit for organizations.
    fn serial(&self) -> &str;

    /// The trailing check digit.
    fn check_digit(&self) -> char;

    /// Date/serial delimiter. Always `-` for organizations.
    fn delimiter(&self) -> Delimiter;

    /// Sex hint.
    fn sex(&self) -> Sex;

    /// Birth date, for identifiers that carry one.
    fn birth_date(&self) -> Option<NaiveDate>;

    /// Historical birth county, where the mapping applies.
    fn birth_county(&self) -> BirthCounty {
        BirthCounty::Undefined
    }

    /// Canonical form with the century, where one exists.
    fn long_form(&self) -> String;
}

/// Any validated national identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Identifier {
    Personal(PersonalId),
    Coordination(CoordinationId),
    Organization(OrganizationId),
}

impl Identifier {
    /// Parse `raw` strictly as the given kind.
    ///
    /// # Errors
    ///
    /// Whatever error the kind's own parser reports.
    pub fn parse_as(kind: IdKind, raw: &str, reference: NaiveDate) -> Result<Self, StbError> {
        match kind {
            IdKind::Personal => PersonalId::parse_at(raw, reference).map(Self::Personal),
            IdKind::Coordination => CoordinationId::parse_at(raw, reference).map(Self::Coordination),
            IdKind::Organization => OrganizationId::parse(raw).map(Self::Organization),
        }
    }

    fn inner(&self) -> &dyn NationalId {
        match self {
            Self::Personal(id) => id,
            Self::Coordination(id) => id,
            Self::Organization(id) => id,
        }
    }
}

impl NationalId for Identifier {
    fn kind(&self) -> IdKind {
        self.inner().kind()
    }

    fn serial(&self) -> &str {
        self.inner().serial()
    }

    fn check_digit(&self) -> char {
        self.inner().check_digit()
    }

    fn delimiter(&self) -> Delimiter {
        self.inner().delimiter()
    }

    fn sex(&self) -> Sex {
        self.inner().sex()
    }

    fn birth_date(&self) -> Option<NaiveDate> {
        self.inner().birth_date()
    }

    fn birth_county(&self) -> BirthCounty {
        self.inner().birth_county()
    }

    fn long_form(&self) -> String {
        self.inner().long_form()
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.inner(), f)
    }
}

impl From<PersonalId> for Identifier {
    fn from(id: PersonalId) -> Self {
        Self::Personal(id)
    }
}

impl From<CoordinationId> for Identifier {
    fn from(id: CoordinationId) -> Self {
        Self::Coordination(id)
    }
}

impl From<OrganizationId> for Identifier {
    fn from(id: OrganizationId) -> Self {
        Self::Organization(id)
    }
}
