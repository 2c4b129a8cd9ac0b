//! CLI definitions and command implementations for the deployer.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CREDENTIAL_VAR;

pub mod chains;
pub mod resolve;
pub mod storage_location;

/// Multi-chain deployment configuration and storage-slot tooling.
#[derive(Debug, Parser)]
#[command(name = "deployer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive the namespaced storage location for an identifier.
    GenerateStorageLocation {
        /// Namespace identifier, e.g. `elite-oracle.storage.DMA`.
        identifier: String,
    },

    /// Resolve per-chain deployment configuration and print it as JSON.
    ResolveConfig {
        /// Environment variable holding the signing credential.
        #[arg(long, env = "CREDENTIAL_VAR", default_value = DEFAULT_CREDENTIAL_VAR)]
        credential_var: String,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// List the supported chains, or show one chain in full as JSON.
    Chains {
        /// Chain name to show in detail.
        name: Option<String>,
    },
}
