//! Multi-chain deployment tooling.
//!
//! A CLI companion to the contract deployment driver: derives
//! namespaced storage locations for upgradeable contracts and resolves
//! per-chain network/verification configuration from the compiled-in
//! chain registry plus the environment.
//!
//! ```sh
//! deployer generate-storage-location elite-oracle.storage.DMA
//! deployer resolve-config --pretty
//! deployer chains
//! ```

mod chain;
mod cmd;
mod config;
mod error;
mod secrets;
mod storage;
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};

#[allow(clippy::print_stderr)]
fn main() {
    telemetry::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateStorageLocation { identifier } => {
            cmd::storage_location::run(&identifier)
        }
        Commands::ResolveConfig {
            credential_var,
            pretty,
        } => cmd::resolve::run(&credential_var, pretty),
        Commands::Chains { name } => cmd::chains::run(name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
