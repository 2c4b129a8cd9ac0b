//! Per-chain deployment configuration resolution.
//!
//! Turns the static [`ChainRegistry`](crate::chain::ChainRegistry) plus
//! an injected [`SecretSource`] into the configuration artifact the
//! deployment/verification driver consumes:
//!
//! - **Network entry** — RPC endpoint and chain id bound to the signing
//!   credential.
//! - **Verification entry** — explorer endpoints bound to a per-chain
//!   API key, or the `"not-needed"` sentinel for keyless explorers.
//!
//! One signing credential is shared by every chain. That is a deliberate
//! operational choice carried over from the original deployment setup;
//! the variable name is an explicit parameter so a call site that wants
//! per-chain credentials can run one resolution pass per variable.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::chain::ChainRegistry;
use crate::error::Error;
use crate::secrets::SecretSource;

/// Default environment variable holding the signing credential.
pub const DEFAULT_CREDENTIAL_VAR: &str = "PRIVATE_KEY";

/// Sentinel API key for explorers that verify without one.
pub const NO_KEY_SENTINEL: &str = "not-needed";

/// Connection settings for one chain, bound to the signing credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkEntry {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// HTTP(S) JSON-RPC endpoint.
    pub rpc_url: &'static str,
    /// Signing credential authorising transactions on this chain.
    pub credential: String,
}

/// Source-verification settings for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationEntry {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Explorer API key, or [`NO_KEY_SENTINEL`].
    pub api_key: String,
    /// Explorer verification API endpoint.
    pub api_url: &'static str,
    /// Explorer browser URL.
    pub browser_url: &'static str,
}

/// Full resolved configuration for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainProfile {
    /// Connection and credential binding.
    pub network: NetworkEntry,
    /// Verification provider binding.
    pub verification: VerificationEntry,
}

/// Resolved configuration for every registered chain, keyed by name.
///
/// A `BTreeMap` keeps serialisation order deterministic for the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig(pub BTreeMap<String, ChainProfile>);

/// Environment variable name holding a chain's explorer API key.
///
/// The chain name is uppercased and every hyphen becomes an underscore:
/// `dfk-testnet` → `DFK_TESTNET_API_KEY`.
#[must_use]
pub fn api_key_var(chain_name: &str) -> String {
    format!("{}_API_KEY", chain_name.to_uppercase().replace('-', "_"))
}

/// Resolve deployment configuration for every chain in `registry`.
///
/// The signing credential under `credential_var` is looked up once,
/// before any chain is processed; the same value is bound to every
/// network entry. Missing per-chain API keys fall back to
/// [`NO_KEY_SENTINEL`] instead of failing, since several of the
/// registered explorers verify without a key.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] if `credential_var` is unset or
/// empty in `secrets`. No partial configuration is produced.
pub fn resolve_all(
    registry: &ChainRegistry,
    secrets: &dyn SecretSource,
    credential_var: &str,
) -> Result<ResolvedConfig, Error> {
    let credential = secrets
        .get(credential_var)
        .ok_or_else(|| Error::MissingCredential(credential_var.to_owned()))?;

    let mut profiles = BTreeMap::new();
    for chain in registry.all() {
        let key_var = api_key_var(chain.name);
        let api_key = secrets.get(&key_var).unwrap_or_else(|| {
            debug!(chain = chain.name, var = %key_var, "no explorer API key, using sentinel");
            NO_KEY_SENTINEL.to_owned()
        });

        profiles.insert(
            chain.name.to_owned(),
            ChainProfile {
                network: NetworkEntry {
                    chain_id: chain.chain_id,
                    rpc_url: chain.rpc_url,
                    credential: credential.clone(),
                },
                verification: VerificationEntry {
                    chain_id: chain.chain_id,
                    api_key,
                    api_url: chain.explorer_api_url,
                    browser_url: chain.explorer_browser_url,
                },
            },
        );
    }

    debug!(chains = profiles.len(), "resolved deployment configuration");
    Ok(ResolvedConfig(profiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::testing::MapSecrets;

    #[test]
    fn api_key_var_uppercases_and_replaces_every_hyphen() {
        assert_eq!(api_key_var("avalanche"), "AVALANCHE_API_KEY");
        assert_eq!(api_key_var("dfk-testnet"), "DFK_TESTNET_API_KEY");
        assert_eq!(api_key_var("a-b-c"), "A_B_C_API_KEY");
    }

    #[test]
    fn missing_credential_fails_before_any_chain_resolves() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("AVALANCHE_API_KEY", "irrelevant")]);
        let err = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap_err();
        assert!(matches!(err, Error::MissingCredential(var) if var == "PRIVATE_KEY"));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("PRIVATE_KEY", "")]);
        let err = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap_err();
        assert!(matches!(err, Error::MissingCredential(_)));
    }

    #[test]
    fn every_chain_shares_the_single_credential() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("PRIVATE_KEY", "0xdeadbeef")]);
        let resolved = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap();

        assert_eq!(resolved.0.len(), registry.len());
        for (name, profile) in &resolved.0 {
            assert_eq!(profile.network.credential, "0xdeadbeef", "chain {name}");
        }
    }

    #[test]
    fn absent_api_key_falls_back_to_sentinel() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("PRIVATE_KEY", "0xdeadbeef")]);
        let resolved = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap();
        for profile in resolved.0.values() {
            assert_eq!(profile.verification.api_key, NO_KEY_SENTINEL);
        }
    }

    #[test]
    fn explicit_api_key_is_used_verbatim() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[
            ("PRIVATE_KEY", "0xdeadbeef"),
            ("AVALANCHE_API_KEY", "snowtrace-key-123"),
        ]);
        let resolved = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap();
        assert_eq!(resolved.0["avalanche"].verification.api_key, "snowtrace-key-123");
        assert_eq!(resolved.0["dfk"].verification.api_key, NO_KEY_SENTINEL);
    }

    #[test]
    fn descriptor_endpoints_pass_through_unchanged() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("PRIVATE_KEY", "k")]);
        let resolved = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap();

        for chain in registry.all() {
            let profile = &resolved.0[chain.name];
            assert_eq!(profile.network.chain_id, chain.chain_id);
            assert_eq!(profile.network.rpc_url, chain.rpc_url);
            assert_eq!(profile.verification.api_url, chain.explorer_api_url);
            assert_eq!(profile.verification.browser_url, chain.explorer_browser_url);
        }
    }

    #[test]
    fn custom_credential_var_is_honoured() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("STAGING_KEY", "0xstaging")]);
        let resolved = resolve_all(&registry, &secrets, "STAGING_KEY").unwrap();
        assert_eq!(resolved.0["klaytn"].network.credential, "0xstaging");
    }

    #[test]
    fn resolved_map_is_keyed_by_chain_name() {
        let registry = ChainRegistry::new();
        let secrets = MapSecrets::with(&[("PRIVATE_KEY", "k")]);
        let resolved = resolve_all(&registry, &secrets, DEFAULT_CREDENTIAL_VAR).unwrap();
        let keys: Vec<_> = resolved.0.keys().map(String::as_str).collect();
        assert_eq!(keys, ["avalanche", "dfk", "dfk-testnet", "klaytn"]);
    }
}
