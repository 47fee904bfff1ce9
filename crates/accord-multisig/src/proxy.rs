//! Per-proxy signature state
//!
//! A [`Proxy`] pairs an immutable [`SignerSet`] with the mutable signature
//! state accumulated against it. The type and its signing helper are
//! crate-private: all mutation goes through the registry, which is what
//! keeps the public capability surface down to the registry's operations.

use accord_core::{PartyId, SignerSet};
use std::collections::BTreeSet;

/// One quorum-authorization instance in the registry
#[derive(Debug, Clone)]
pub(crate) struct Proxy {
    signer_set: SignerSet,
    signatures: BTreeSet<PartyId>,
    complete: bool,
}

impl Proxy {
    pub(crate) fn new(signer_set: SignerSet) -> Self {
        Self {
            signer_set,
            signatures: BTreeSet::new(),
            complete: false,
        }
    }

    pub(crate) fn signer_set(&self) -> &SignerSet {
        &self.signer_set
    }

    pub(crate) fn has_signed(&self, party: PartyId) -> bool {
        self.signatures.contains(&party)
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.complete
    }

    /// Record a signature and re-evaluate quorum in the same step
    ///
    /// Returns `true` exactly when this signature moved the proxy from
    /// pending to complete. The caller must have checked membership and
    /// exactly-once preconditions already. `complete` is monotonic: once
    /// set it is never cleared, and later signatures return `false`.
    pub(crate) fn record_signature(&mut self, signer: PartyId) -> bool {
        self.signatures.insert(signer);
        if !self.complete && self.signatures.len() as u64 >= self.signer_set.quorum() {
            self.complete = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn party(n: u128) -> PartyId {
        PartyId::from_uuid(Uuid::from_u128(n))
    }

    fn proxy_2_of_3() -> Proxy {
        let set = SignerSet::new(2, vec![party(1), party(2), party(3)]).unwrap();
        Proxy::new(set)
    }

    #[test]
    fn completion_fires_exactly_on_the_threshold_signature() {
        let mut proxy = proxy_2_of_3();

        assert!(!proxy.record_signature(party(1)));
        assert!(!proxy.is_complete());

        assert!(proxy.record_signature(party(2)));
        assert!(proxy.is_complete());
    }

    #[test]
    fn completion_does_not_fire_twice() {
        let mut proxy = proxy_2_of_3();
        proxy.record_signature(party(1));
        proxy.record_signature(party(2));

        // Third member keeps signing; the flag stays set without re-firing
        assert!(!proxy.record_signature(party(3)));
        assert!(proxy.is_complete());
    }

    #[test]
    fn membership_is_tested_by_identity() {
        let mut proxy = proxy_2_of_3();
        proxy.record_signature(party(2));

        assert!(proxy.has_signed(party(2)));
        assert!(!proxy.has_signed(party(1)));
    }
}
