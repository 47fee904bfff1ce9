//! Accord Multisig - Quorum-gated signature proxy registry
//!
//! This crate provides the multi-party authorization core of Accord: an
//! append-only registry of independently configured signature proxies, each
//! requiring a quorum of distinct authorized parties before it is considered
//! complete.
//!
//! # Architecture
//!
//! - [`ProxyRegistry`] owns all proxy state and exposes the full public
//!   operation surface: `add_multisig_proxy`, `sign`, and the side-effect-free
//!   queries.
//! - Each proxy pairs an immutable [`SignerSet`] with its accumulated
//!   signatures; the per-proxy type is crate-private so mutation is only
//!   reachable through the registry.
//! - Every accepted mutation appends typed [`MultisigEvent`]s to an ordered,
//!   externally observable log.
//!
//! Execution of the authorized action, persistence, transport, and caller
//! authentication are all the hosting layer's concern; this core assumes the
//! caller identity it is handed has been authenticated upstream.
//!
//! # Example
//!
//! ```
//! use accord_multisig::{PartyId, ProxyRegistry};
//!
//! let alice = PartyId::new();
//! let bob = PartyId::new();
//!
//! let mut registry = ProxyRegistry::new();
//! let index = registry.add_multisig_proxy(2, vec![alice, bob])?;
//!
//! registry.sign(index, alice)?;
//! assert!(!registry.is_complete(index)?);
//!
//! registry.sign(index, bob)?;
//! assert!(registry.is_complete(index)?);
//! # Ok::<(), accord_multisig::MultisigError>(())
//! ```

#![forbid(unsafe_code)]

/// Registry configuration
pub mod config;

/// Typed registry events
pub mod events;

/// The proxy registry and its operation surface
pub mod registry;

mod proxy;

pub use config::RegistryConfig;
pub use events::MultisigEvent;
pub use registry::ProxyRegistry;

pub use accord_core::{MultisigError, PartyId, ProxyIndex, Result, SignerSet};
