//! `deployer resolve-config` command.
//!
//! Resolves the full per-chain configuration map and prints it as JSON
//! on stdout, ready for the deployment/verification driver.

use dotenvy::dotenv;

use crate::chain::ChainRegistry;
use crate::config::resolve_all;
use crate::error::Error;
use crate::secrets::EnvSecrets;

/// Execute the `resolve-config` command.
///
/// # Errors
///
/// Returns [`Error::MissingCredential`] if the signing credential is not
/// configured, or [`Error::Serialization`] if JSON encoding fails.
#[allow(clippy::print_stdout)]
pub fn run(credential_var: &str, pretty: bool) -> Result<(), Error> {
    // Load .env variables
    dotenv().ok();

    let registry = ChainRegistry::new();
    let resolved = resolve_all(&registry, &EnvSecrets, credential_var)?;

    let json = if pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    println!("{json}");
    Ok(())
}
