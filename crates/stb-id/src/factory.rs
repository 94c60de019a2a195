//! # Factory Chain
//!
//! A lenient alternative to the [builder](crate::builder): each factory
//! tries one identifier kind and, on any failure, hands the raw input to
//! the factory it wraps. The chain ends in [`FailingFactory`], which
//! reports [`StbError::UnableToClassify`].
//!
//! ```
//! use stb_id::factory::{IdFactory, KindFactory};
//! use stb_id::IdKind;
//!
//! let factory = KindFactory::with_fallback(
//!     IdKind::Personal,
//!     KindFactory::new(IdKind::Organization),
//! );
//! assert!(factory.create_id("556016-0680").is_ok());
//! ```
//!
//! Unlike the builder, the chain recovers from every error kind, check
//! digit failures included. The order of the chain is the caller's choice.

use chrono::NaiveDate;
use stb_core::temporal::today;
use stb_core::StbError;

use crate::identifier::{IdKind, Identifier};

/// Creates identifiers from raw strings.
pub trait IdFactory {
    /// Create an identifier from `raw`.
    ///
    /// # Errors
    ///
    /// Implementation defined; the terminal [`FailingFactory`] reports
    /// [`StbError::UnableToClassify`].
    fn create_id(&self, raw: &str) -> Result<Identifier, StbError>;
}

impl<T: IdFactory + ?Sized> IdFactory for &T {
    fn create_id(&self, raw: &str) -> Result<Identifier, StbError> {
        (**self).create_id(raw)
    }
}

impl<T: IdFactory + ?Sized> IdFactory for Box<T> {
    fn create_id(&self, raw: &str) -> Result<Identifier, StbError> {
        (**self).create_id(raw)
    }
}

/// Terminal factory: never creates anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailingFactory;

impl IdFactory for FailingFactory {
    fn create_id(&self, raw: &str) -> Result<Identifier, StbError> {
        Err(StbError::UnableToClassify {
            raw: raw.to_string(),
        })
    }
}

/// Tries one identifier kind, delegating to `fallback` on failure.
#[derive(Debug, Clone)]
pub struct KindFactory<F = FailingFactory> {
    kind: IdKind,
    reference: Option<NaiveDate>,
    fallback: F,
}

impl KindFactory<FailingFactory> {
    /// Factory for `kind` with no fallback.
    pub fn new(kind: IdKind) -> Self {
        Self::with_fallback(kind, FailingFactory)
    }
}

impl<F: IdFactory> KindFactory<F> {
    /// Factory for `kind` that delegates to `fallback` on failure.
    pub fn with_fallback(kind: IdKind, fallback: F) -> Self {
        Self {
            kind,
            reference: None,
            fallback,
        }
    }

    /// Resolve centuries against `reference` instead of today.
    ///
    /// Applies to this link only; set it on each link that needs it.
    pub fn at(mut self, reference: NaiveDate) -> Self {
        self.reference = Some(reference);
        self
    }

    /// The kind this link tries.
    pub fn kind(&self) -> IdKind {
        self.kind
    }
}

impl<F: IdFactory> IdFactory for KindFactory<F> {
    fn create_id(&self, raw: &str) -> Result<Identifier, StbError> {
        let reference = self.reference.unwrap_or_else(today);
        Identifier::parse_as(self.kind, raw, reference).or_else(|_| self.fallback.create_id(raw))
    }
}

/// Build a chain trying `kinds` in order, ending in [`FailingFactory`].
pub fn chain(kinds: &[IdKind], reference: Option<NaiveDate>) -> Box<dyn IdFactory> {
    kinds
        .iter()
        .rev()
        .fold(Box::new(FailingFactory) as Box<dyn IdFactory>, |fallback, &kind| {
            let link = KindFactory::with_fallback(kind, fallback);
            let link = match reference {
                Some(date) => link.at(date),
                None => link,
            };
            Box::new(link) as Box<dyn IdFactory>
        })
}
