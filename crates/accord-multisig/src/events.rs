//! Typed event log for the proxy registry
//!
//! Every accepted mutation appends one or two events to an ordered log owned
//! by the registry. Events are immutable once appended; the log only grows,
//! and its order is the order in which operations were accepted.

use accord_core::{PartyId, ProxyIndex};
use serde::{Deserialize, Serialize};

/// Events emitted by the proxy registry
///
/// Within a single `sign` call that crosses the quorum threshold,
/// [`MultisigSigned`](MultisigEvent::MultisigSigned) precedes
/// [`MultisigCompleted`](MultisigEvent::MultisigCompleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultisigEvent {
    /// A proxy was appended to the registry
    MultisigAdded {
        /// Index assigned to the new proxy
        index: ProxyIndex,
        /// Quorum threshold of the new proxy
        quorum: u64,
        /// Final ordered signer list of the new proxy
        signers: Vec<PartyId>,
    },
    /// A signature was recorded on a proxy
    MultisigSigned {
        /// Proxy the signature was recorded on
        index: ProxyIndex,
        /// Party whose signature was recorded
        signer: PartyId,
    },
    /// A proxy's signature count reached its quorum threshold
    MultisigCompleted {
        /// Proxy that reached quorum
        index: ProxyIndex,
    },
}

impl MultisigEvent {
    /// The registry index this event refers to
    pub fn index(&self) -> ProxyIndex {
        match self {
            Self::MultisigAdded { index, .. }
            | Self::MultisigSigned { index, .. }
            | Self::MultisigCompleted { index } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn every_variant_reports_its_index() {
        let signer = PartyId::from_uuid(Uuid::from_u128(1));
        let events = [
            MultisigEvent::MultisigAdded {
                index: ProxyIndex::new(4),
                quorum: 1,
                signers: vec![signer],
            },
            MultisigEvent::MultisigSigned {
                index: ProxyIndex::new(4),
                signer,
            },
            MultisigEvent::MultisigCompleted {
                index: ProxyIndex::new(4),
            },
        ];

        for event in &events {
            assert_eq!(event.index(), ProxyIndex::new(4));
        }
    }
}
