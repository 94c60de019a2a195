//! # stb-core — Foundational Types for Swedish Technical Bureaucracy
//!
//! This crate is the leaf of the workspace. It defines the error taxonomy
//! and the two check-digit engines that every identifier and payment code
//! in the other crates is validated with.
//!
//! ## Key Design Principles
//!
//! 1. **One flat error enum.** [`StbError`] has one variant per failure
//!    kind. Callers branch on [`ErrorKind`]; nothing is signalled by
//!    panicking or by partially constructed values.
//!
//! 2. **Pure checksum functions.** [`checksum::modulo10`] and
//!    [`checksum::modulo11`] take `&str` and return `Result`. No state, no
//!    configuration, no allocation beyond the digit buffer.
//!
//! 3. **Explicit reference dates.** Date-sensitive code receives a
//!    `NaiveDate`. Only [`temporal::today`] reads the clock.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stb-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No logging. Presentation belongs to callers.

pub mod checksum;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ErrorKind, StbError};
