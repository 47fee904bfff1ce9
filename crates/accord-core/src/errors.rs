//! Unified error type for Accord authorization operations
//!
//! Every rejected operation surfaces as one of these variants; no failure is
//! reported as a successful no-op. All errors are detected synchronously and
//! abort the whole operation with zero partial state change.

use crate::identifiers::{PartyId, ProxyIndex};
use serde::{Deserialize, Serialize};

/// Errors signaled by signer-set construction and registry operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MultisigError {
    /// Quorum threshold outside `[1, signer_count]` at construction
    #[error("invalid quorum {quorum} for {signer_count} signer(s)")]
    InvalidQuorum {
        /// The rejected threshold
        quorum: u64,
        /// Number of signers the threshold was checked against
        signer_count: u64,
    },

    /// Nil or duplicated identifier in a signer list at construction
    #[error("invalid signer {signer}: nil or duplicate identifier")]
    InvalidSigner {
        /// The offending identifier
        signer: PartyId,
    },

    /// Index does not address an existing proxy
    #[error("unknown {index}")]
    UnknownProxy {
        /// The out-of-range index
        index: ProxyIndex,
    },

    /// Caller is not a member of the proxy's signer set
    #[error("{signer} is not an authorized signer for {index}")]
    UnauthorizedSigner {
        /// The proxy the signature was submitted against
        index: ProxyIndex,
        /// The rejected caller
        signer: PartyId,
    },

    /// Caller has already signed this proxy
    #[error("{signer} has already signed {index}")]
    AlreadySigned {
        /// The proxy the signature was submitted against
        index: ProxyIndex,
        /// The repeating caller
        signer: PartyId,
    },

    /// Proxy already reached quorum and the registry rejects late signatures
    ///
    /// Only reachable when the registry configuration disables
    /// post-completion signing.
    #[error("{index} is already complete")]
    ProxyComplete {
        /// The completed proxy
        index: ProxyIndex,
    },
}

/// Result type for Accord operations
pub type Result<T> = std::result::Result<T, MultisigError>;
