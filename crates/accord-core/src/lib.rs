//! Accord Core - Foundational types for quorum authorization
//!
//! This crate provides the leaf types of the Accord multi-party
//! authorization system: party and proxy identifiers, the unified error
//! type, and the validated [`SignerSet`] value.
//!
//! # Architecture
//!
//! Dependency order is leaves-first: this crate knows nothing about the
//! proxy registry built on top of it. A [`SignerSet`] is created once, at
//! proxy-construction time, and is immutable thereafter, so it can be
//! shared freely by reference.

#![forbid(unsafe_code)]

/// Party and proxy identifiers
pub mod identifiers;

/// Unified error handling
pub mod errors;

/// Validated signer sets with quorum thresholds
pub mod signer_set;

pub use errors::{MultisigError, Result};
pub use identifiers::{PartyId, ProxyIndex};
pub use signer_set::SignerSet;
