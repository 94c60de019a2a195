//! # stb-id — Swedish National Identifiers
//!
//! Validated newtypes for the three kinds of Swedish national
//! identification number, and the classifiers that pick between them.
//!
//! - [`PersonalId`]: personal identity number, `[YY]YYMMDD[-+]NNNC`.
//! - [`CoordinationId`]: coordination number, day field offset by 60.
//! - [`OrganizationId`]: organization number, `NNNNNN-NNNN`.
//!
//! ## Validation
//!
//! Every identifier validates at construction time. Structure is checked
//! before the check digit, so [`StbError::Structure`](stb_core::StbError)
//! means "this is not that kind of number" and
//! [`StbError::CheckDigit`](stb_core::StbError) means "this is that kind
//! of number, mistyped". Serde deserialization routes through the same
//! parser: an invalid string never becomes a value.
//!
//! ## Classification
//!
//! [`IdentifierBuilder`] applies a fixed precedence (Organization, then
//! Personal, then Coordination) and stops at the first check digit
//! failure. The [`factory`] chain is the lenient alternative: caller
//! ordered, and it recovers from every error.
//!
//! ## Reference Dates
//!
//! Two-digit years are resolved against a reference date. `parse` uses
//! today; `parse_at` takes the date explicitly and is what tests use.

/// Implement `Serialize` via `Display` and `Deserialize` via `parse()`.
///
/// Deserializes as a plain `String`, then routes through the type's
/// `parse()` constructor so that invalid values are rejected at
/// deserialization time.
macro_rules! impl_string_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod birth;
pub mod builder;
pub mod century;
pub mod coordination;
pub mod county;
pub mod factory;
pub mod grammar;
pub mod identifier;
pub mod organization;
pub mod personal;
pub mod sex;

// Re-export primary types for ergonomic imports.
pub use builder::{classify, BuilderConfig, IdentifierBuilder};
pub use century::Delimiter;
pub use coordination::CoordinationId;
pub use county::BirthCounty;
pub use factory::{FailingFactory, IdFactory, KindFactory};
pub use identifier::{IdKind, Identifier, NationalId};
pub use organization::{OrganizationGroup, OrganizationId};
pub use personal::PersonalId;
pub use sex::Sex;
