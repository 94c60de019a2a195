//! # Identifier Builder
//!
//! Classifies a raw string into the right identifier kind, in fixed
//! precedence order: Organization, then Personal, then Coordination.
//! Organization is always attempted; Personal and Coordination can be
//! disabled through [`BuilderConfig`].
//!
//! ## Fallthrough rule
//!
//! Only a structural mismatch moves on to the next kind. A kind whose
//! grammar matches but whose check digit fails ends the classification
//! with [`StbError::CheckDigit`]. When the last enabled kind fails, its
//! error is returned.
//!
//! The grammars are disjoint in practice (an organization's third digit is
//! at least 2, a personal number's day field is 01-31, a coordination
//! number's 61-91), so precedence only matters for which error is reported.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stb_core::temporal::today;
use stb_core::StbError;

use crate::coordination::CoordinationId;
use crate::identifier::Identifier;
use crate::organization::OrganizationId;
use crate::personal::PersonalId;

/// Which optional identifier kinds the builder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Accept personal identity numbers.
    pub allow_personal: bool,
    /// Accept coordination numbers.
    pub allow_coordination: bool,
}

impl BuilderConfig {
    /// Accept every identifier kind.
    pub const fn all() -> Self {
        Self {
            allow_personal: true,
            allow_coordination: true,
        }
    }

    /// Accept organization numbers only.
    pub const fn organizations_only() -> Self {
        Self {
            allow_personal: false,
            allow_coordination: false,
        }
    }

    /// Same configuration with personal numbers enabled or disabled.
    pub const fn with_personal(self, allow: bool) -> Self {
        Self {
            allow_personal: allow,
            ..self
        }
    }

    /// Same configuration with coordination numbers enabled or disabled.
    pub const fn with_coordination(self, allow: bool) -> Self {
        Self {
            allow_coordination: allow,
            ..self
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::all()
    }
}

/// Classify `raw` under `config`, resolving centuries against `reference`.
///
/// # Errors
///
/// - [`StbError::CheckDigit`] from the first kind whose grammar matched.
/// - [`StbError::Structure`] from the last kind attempted, when no enabled
///   kind matched structurally.
pub fn classify(
    raw: &str,
    config: BuilderConfig,
    reference: NaiveDate,
) -> Result<Identifier, StbError> {
    let organization_err = match OrganizationId::parse(raw) {
        Ok(id) => return Ok(id.into()),
        Err(e) if e.is_structural() => e,
        Err(e) => return Err(e),
    };

    if !config.allow_personal && !config.allow_coordination {
        return Err(organization_err);
    }

    if config.allow_personal {
        match PersonalId::parse_at(raw, reference) {
            Ok(id) => return Ok(id.into()),
            Err(e) if e.is_structural() && config.allow_coordination => {}
            Err(e) => return Err(e),
        }
    }

    CoordinationId::parse_at(raw, reference).map(Identifier::from)
}

/// A configured classifier bound to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierBuilder {
    config: BuilderConfig,
    reference: NaiveDate,
}

impl IdentifierBuilder {
    /// Builder resolving centuries against today.
    pub fn new(config: BuilderConfig) -> Self {
        Self::at(config, today())
    }

    /// Builder resolving centuries against `reference`.
    pub fn at(config: BuilderConfig, reference: NaiveDate) -> Self {
        Self { config, reference }
    }

    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Classify `raw`. See [`classify`].
    ///
    /// # Errors
    ///
    /// Same as [`classify`].
    pub fn build(&self, raw: &str) -> Result<Identifier, StbError> {
        classify(raw, self.config, self.reference)
    }
}

impl Default for IdentifierBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}
