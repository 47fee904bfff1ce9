//! Core identifier types for the Accord authorization system
//!
//! This module provides the identifier types that name parties and proxies
//! throughout the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a party authorized to sign
///
/// A party is an externally authenticated principal. The nil UUID is the
/// null identifier and is never a valid member of a signer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(pub Uuid);

impl PartyId {
    /// Create a new random party ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// The null party identifier
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the null party identifier
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for PartyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "party-{}", self.0)
    }
}

impl From<Uuid> for PartyId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PartyId> for Uuid {
    fn from(party_id: PartyId) -> Self {
        party_id.0
    }
}

/// Position of a proxy within the registry
///
/// Indices are 0-based, dense, and assigned in creation order. An index is
/// the proxy's stable identity for its whole lifetime; proxies are never
/// deleted, so an index never gets reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProxyIndex(pub u64);

impl ProxyIndex {
    /// Create a proxy index
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the inner index value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProxyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proxy-{}", self.0)
    }
}

impl From<u64> for ProxyIndex {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl From<ProxyIndex> for u64 {
    fn from(index: ProxyIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_party_id_is_detected() {
        assert!(PartyId::nil().is_nil());
        assert!(!PartyId::from_uuid(Uuid::from_u128(7)).is_nil());
    }

    #[test]
    fn party_id_display_includes_uuid() {
        let id = PartyId::from_uuid(Uuid::from_u128(1));
        assert_eq!(format!("{id}"), format!("party-{}", id.uuid()));
    }

    #[test]
    fn proxy_index_ordering_follows_value() {
        assert!(ProxyIndex::new(0) < ProxyIndex::new(1));
        assert_eq!(ProxyIndex::from(3).value(), 3);
    }
}
