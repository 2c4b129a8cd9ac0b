//! Static chain descriptors and the registry over them.
//!
//! The supported chains are compiled-in constants: deployments target a
//! fixed, audited set of networks, and a config file would only add a
//! way to drift from it. The registry is constructed once at startup and
//! passed by reference to consumers; nothing in the process can add,
//! remove, or mutate an entry.

use serde::Serialize;

use crate::error::Error;

/// Connection and explorer endpoints for one supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainDescriptor {
    /// Registry key, unique across the supported set.
    pub name: &'static str,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// HTTP(S) JSON-RPC endpoint.
    pub rpc_url: &'static str,
    /// Block-explorer API endpoint used for source verification.
    pub explorer_api_url: &'static str,
    /// Block-explorer browser URL for humans.
    pub explorer_browser_url: &'static str,
}

/// The supported deployment targets, in registry order.
pub const SUPPORTED_CHAINS: [ChainDescriptor; 4] = [
    ChainDescriptor {
        name: "avalanche",
        chain_id: 43_114,
        rpc_url: "https://api.avax.network/ext/bc/C/rpc",
        explorer_api_url: "https://api.snowtrace.io/api",
        explorer_browser_url: "https://snowtrace.io",
    },
    ChainDescriptor {
        name: "dfk",
        chain_id: 53_935,
        rpc_url: "https://subnets.avax.network/defi-kingdoms/dfk-chain/rpc",
        explorer_api_url: "https://api.routescan.io/v2/network/mainnet/evm/53935/etherscan",
        explorer_browser_url: "https://53935.routescan.io",
    },
    ChainDescriptor {
        name: "dfk-testnet",
        chain_id: 335,
        rpc_url: "https://subnets.avax.network/defi-kingdoms/dfk-chain-testnet/rpc",
        explorer_api_url: "https://api.routescan.io/v2/network/testnet/evm/335/etherscan",
        explorer_browser_url: "https://subnets-test.avax.network/defi-kingdoms/",
    },
    ChainDescriptor {
        name: "klaytn",
        chain_id: 8_217,
        rpc_url: "https://public-node-api.klaytnapi.com/v1/cypress",
        explorer_api_url: "https://scope.klaytn.com/api",
        explorer_browser_url: "https://scope.klaytn.com/",
    },
];

/// Immutable, ordered view over the supported chains.
#[derive(Debug, Clone, Copy)]
pub struct ChainRegistry {
    chains: &'static [ChainDescriptor],
}

impl ChainRegistry {
    /// Creates the registry over the compiled-in chain set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chains: &SUPPORTED_CHAINS,
        }
    }

    /// Looks up a chain descriptor by registry name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `name` is not registered.
    pub fn lookup(&self, name: &str) -> Result<&'static ChainDescriptor, Error> {
        self.chains
            .iter()
            .find(|chain| chain.name == name)
            .ok_or_else(|| Error::UnknownChain(name.to_owned()))
    }

    /// Iterates the descriptors in registration order.
    ///
    /// The order is stable across calls and across processes.
    pub fn all(&self) -> impl Iterator<Item = &'static ChainDescriptor> {
        self.chains.iter()
    }

    /// Number of registered chains.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the registry is empty. It never is for the shipped set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_exactly_the_supported_set() {
        let registry = ChainRegistry::new();
        let names: Vec<_> = registry.all().map(|c| c.name).collect();
        assert_eq!(names, ["avalanche", "dfk", "dfk-testnet", "klaytn"]);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn chain_ids_match_the_documented_networks() {
        let registry = ChainRegistry::new();
        assert_eq!(registry.lookup("avalanche").unwrap().chain_id, 43_114);
        assert_eq!(registry.lookup("dfk").unwrap().chain_id, 53_935);
        assert_eq!(registry.lookup("dfk-testnet").unwrap().chain_id, 335);
        assert_eq!(registry.lookup("klaytn").unwrap().chain_id, 8_217);
    }

    #[test]
    fn unknown_chain_fails_lookup() {
        let registry = ChainRegistry::new();
        let err = registry.lookup("unknown-chain").unwrap_err();
        assert!(matches!(err, Error::UnknownChain(name) if name == "unknown-chain"));
    }

    #[test]
    fn iteration_is_restartable() {
        let registry = ChainRegistry::new();
        let first: Vec<_> = registry.all().collect();
        let second: Vec<_> = registry.all().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn names_and_ids_are_unique() {
        let registry = ChainRegistry::new();
        for (i, a) in registry.all().enumerate() {
            for b in registry.all().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.chain_id, b.chain_id);
            }
        }
    }
}
