//! Registry configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`ProxyRegistry`](crate::ProxyRegistry)
///
/// Set once at registry construction; configuration is not changed over a
/// registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Whether members who have not yet signed may still sign a proxy that
    /// already reached quorum
    ///
    /// Completion is a threshold-crossing flag, not a closed door: the
    /// permissive default keeps recording late signatures for audit. With
    /// this set to `false`, a late signature is rejected with
    /// [`MultisigError::ProxyComplete`](accord_core::MultisigError::ProxyComplete).
    pub allow_post_completion_signing: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_post_completion_signing: true,
        }
    }
}

impl RegistryConfig {
    /// Strict configuration: proxies stop accepting signatures at quorum
    pub fn strict() -> Self {
        Self {
            allow_post_completion_signing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        assert!(RegistryConfig::default().allow_post_completion_signing);
        assert!(!RegistryConfig::strict().allow_post_completion_signing);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = RegistryConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        let back: RegistryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
