//! Signer set construction and validation
//!
//! A [`SignerSet`] is the immutable half of a signature proxy: the ordered
//! list of authorized parties plus the quorum threshold. Validation happens
//! once, at construction; a value of this type always satisfies
//! `1 <= quorum <= signers.len()` with unique, non-nil identifiers.

use crate::errors::{MultisigError, Result};
use crate::identifiers::PartyId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An immutable, validated set of authorized parties and a quorum threshold
///
/// Signer order is the order supplied at construction and is preserved for
/// query purposes. Construction is pure: no side effects, and a rejected set
/// leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerSet {
    quorum: u64,
    signers: Vec<PartyId>,
}

impl SignerSet {
    /// Validate and construct a signer set
    ///
    /// Checks, in order: every identifier is non-nil, all identifiers are
    /// distinct, and `1 <= quorum <= signers.len()`. An empty signer list
    /// fails the quorum range check, since no threshold lies in `[1, 0]`.
    ///
    /// # Errors
    ///
    /// Returns [`MultisigError::InvalidSigner`] for a nil or duplicated
    /// identifier, and [`MultisigError::InvalidQuorum`] for a threshold
    /// outside `[1, signers.len()]`.
    pub fn new(quorum: u64, signers: Vec<PartyId>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for &signer in &signers {
            if signer.is_nil() || !seen.insert(signer) {
                return Err(MultisigError::InvalidSigner { signer });
            }
        }

        let signer_count = signers.len() as u64;
        if !(1..=signer_count).contains(&quorum) {
            return Err(MultisigError::InvalidQuorum {
                quorum,
                signer_count,
            });
        }

        Ok(Self { quorum, signers })
    }

    /// The quorum threshold
    pub fn quorum(&self) -> u64 {
        self.quorum
    }

    /// The authorized parties, in construction order
    pub fn signers(&self) -> &[PartyId] {
        &self.signers
    }

    /// Number of authorized parties
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Whether the set is empty (never true for a constructed set)
    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Whether `party` is an authorized signer
    pub fn contains(&self, party: PartyId) -> bool {
        self.signers.contains(&party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn party(n: u128) -> PartyId {
        PartyId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn construction_preserves_signer_order() {
        let signers = vec![party(3), party(1), party(2)];
        let set = SignerSet::new(2, signers.clone()).unwrap();

        assert_eq!(set.quorum(), 2);
        assert_eq!(set.signers(), signers.as_slice());
        assert_eq!(set.len(), 3);
        assert!(set.contains(party(1)));
        assert!(!set.contains(party(4)));
    }

    #[test]
    fn quorum_above_signer_count_is_rejected() {
        let result = SignerSet::new(4, vec![party(1), party(2), party(3)]);
        assert_eq!(
            result,
            Err(MultisigError::InvalidQuorum {
                quorum: 4,
                signer_count: 3,
            })
        );
    }

    #[test]
    fn zero_quorum_is_rejected() {
        let result = SignerSet::new(0, vec![party(1), party(2)]);
        assert_eq!(
            result,
            Err(MultisigError::InvalidQuorum {
                quorum: 0,
                signer_count: 2,
            })
        );
    }

    #[test]
    fn empty_signer_list_is_rejected_as_invalid_quorum() {
        let result = SignerSet::new(1, Vec::new());
        assert_eq!(
            result,
            Err(MultisigError::InvalidQuorum {
                quorum: 1,
                signer_count: 0,
            })
        );
    }

    #[test]
    fn nil_signer_is_rejected() {
        let result = SignerSet::new(2, vec![party(1), PartyId::nil(), party(3)]);
        assert_eq!(
            result,
            Err(MultisigError::InvalidSigner {
                signer: PartyId::nil(),
            })
        );
    }

    #[test]
    fn duplicate_signer_is_rejected() {
        let result = SignerSet::new(2, vec![party(1), party(2), party(1)]);
        assert_eq!(
            result,
            Err(MultisigError::InvalidSigner { signer: party(1) })
        );
    }

    #[test]
    fn quorum_equal_to_signer_count_is_accepted() {
        let set = SignerSet::new(3, vec![party(1), party(2), party(3)]).unwrap();
        assert_eq!(set.quorum() as usize, set.len());
    }
}
