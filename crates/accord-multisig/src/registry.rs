//! Append-only registry of signature proxies
//!
//! The registry is the single owner of all proxy state. Mutators take
//! `&mut self` and complete synchronously, so accepted operations form one
//! total order that fixes both proxy indices and event order. Concurrent
//! callers are serialized by whatever hosts the registry; nothing here
//! blocks or suspends.

use crate::config::RegistryConfig;
use crate::events::MultisigEvent;
use crate::proxy::Proxy;
use accord_core::{MultisigError, PartyId, ProxyIndex, Result, SignerSet};

/// Append-only, index-addressed collection of signature proxies
///
/// Construction and signing are all-or-nothing: a rejected operation leaves
/// the registry, including its event log, untouched. Proxies are never
/// deleted; completed and incomplete proxies alike persist for audit.
#[derive(Debug, Default)]
pub struct ProxyRegistry {
    config: RegistryConfig,
    proxies: Vec<Proxy>,
    events: Vec<MultisigEvent>,
}

impl ProxyRegistry {
    /// Create an empty registry with the default (permissive) configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with an explicit configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            proxies: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Validate and append a new proxy
    ///
    /// Returns the assigned index and emits
    /// [`MultisigEvent::MultisigAdded`] carrying the final ordered signer
    /// list and quorum. Indices are dense and 0-based: the returned index
    /// always equals the number of previously accepted constructions.
    ///
    /// # Errors
    ///
    /// Propagates [`MultisigError::InvalidQuorum`] and
    /// [`MultisigError::InvalidSigner`] from signer-set validation without
    /// mutating the registry.
    pub fn add_multisig_proxy(&mut self, quorum: u64, signers: Vec<PartyId>) -> Result<ProxyIndex> {
        let signer_set = SignerSet::new(quorum, signers)?;
        Ok(self.append_signer_set(signer_set))
    }

    /// Record `caller`'s signature on the proxy at `index`
    ///
    /// Preconditions are checked in order: the index must exist, the caller
    /// must be a member of the proxy's signer set, and the caller must not
    /// have signed before. On success the signature is recorded and quorum
    /// is re-evaluated in the same step; there is no observable state where
    /// the threshold-crossing signature is recorded but completion is not.
    ///
    /// Emits [`MultisigEvent::MultisigSigned`] on every accepted signature,
    /// followed by [`MultisigEvent::MultisigCompleted`] when this signature
    /// crossed the threshold.
    ///
    /// The caller identity must be authenticated by the hosting layer; this
    /// core trusts it.
    ///
    /// # Errors
    ///
    /// [`MultisigError::UnknownProxy`], [`MultisigError::UnauthorizedSigner`],
    /// [`MultisigError::AlreadySigned`], or, under
    /// [`RegistryConfig::strict`], [`MultisigError::ProxyComplete`].
    pub fn sign(&mut self, index: ProxyIndex, caller: PartyId) -> Result<()> {
        let allow_post_completion = self.config.allow_post_completion_signing;
        let proxy = self.proxy_mut(index)?;

        if !proxy.signer_set().contains(caller) {
            tracing::debug!(%index, signer = %caller, "rejected signature from non-member");
            return Err(MultisigError::UnauthorizedSigner {
                index,
                signer: caller,
            });
        }
        if proxy.has_signed(caller) {
            tracing::debug!(%index, signer = %caller, "rejected repeat signature");
            return Err(MultisigError::AlreadySigned {
                index,
                signer: caller,
            });
        }
        if proxy.is_complete() && !allow_post_completion {
            tracing::debug!(%index, signer = %caller, "rejected signature on completed proxy");
            return Err(MultisigError::ProxyComplete { index });
        }

        let crossed_threshold = proxy.record_signature(caller);

        self.events.push(MultisigEvent::MultisigSigned {
            index,
            signer: caller,
        });
        tracing::debug!(%index, signer = %caller, "signature recorded");

        if crossed_threshold {
            self.events.push(MultisigEvent::MultisigCompleted { index });
            tracing::info!(%index, "quorum reached");
        }

        Ok(())
    }

    /// Quorum threshold of the proxy at `index`
    pub fn quorum(&self, index: ProxyIndex) -> Result<u64> {
        Ok(self.proxy(index)?.signer_set().quorum())
    }

    /// Authorized signers of the proxy at `index`, in creation order
    pub fn signers(&self, index: ProxyIndex) -> Result<&[PartyId]> {
        Ok(self.proxy(index)?.signer_set().signers())
    }

    /// Whether `party` has signed the proxy at `index`
    ///
    /// Returns `Ok(false)`, not an error, when `party` is not a member or
    /// simply has not signed.
    pub fn has_signed(&self, index: ProxyIndex, party: PartyId) -> Result<bool> {
        Ok(self.proxy(index)?.has_signed(party))
    }

    /// Whether the proxy at `index` has reached its quorum
    pub fn is_complete(&self, index: ProxyIndex) -> Result<bool> {
        Ok(self.proxy(index)?.is_complete())
    }

    /// Number of proxies in the registry
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Whether the registry holds no proxies
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// The event log, in operation-acceptance order
    pub fn events(&self) -> &[MultisigEvent] {
        &self.events
    }

    /// Append a validated signer set as a fresh proxy
    ///
    /// Internal on purpose: exposing this would let callers skip the
    /// validation path in `add_multisig_proxy`.
    fn append_signer_set(&mut self, signer_set: SignerSet) -> ProxyIndex {
        let index = ProxyIndex::new(self.proxies.len() as u64);
        self.events.push(MultisigEvent::MultisigAdded {
            index,
            quorum: signer_set.quorum(),
            signers: signer_set.signers().to_vec(),
        });
        tracing::debug!(
            %index,
            quorum = signer_set.quorum(),
            signer_count = signer_set.len(),
            "proxy added"
        );
        self.proxies.push(Proxy::new(signer_set));
        index
    }

    fn proxy(&self, index: ProxyIndex) -> Result<&Proxy> {
        self.proxies
            .get(index.value() as usize)
            .ok_or(MultisigError::UnknownProxy { index })
    }

    fn proxy_mut(&mut self, index: ProxyIndex) -> Result<&mut Proxy> {
        self.proxies
            .get_mut(index.value() as usize)
            .ok_or(MultisigError::UnknownProxy { index })
    }
}
