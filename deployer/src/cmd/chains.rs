//! `deployer chains` command — inspect the chain registry.

use crate::chain::ChainRegistry;
use crate::error::Error;

/// Execute the `chains` command.
///
/// Without a name, prints a one-line summary per registered chain. With
/// a name, prints the full descriptor as JSON.
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `name` is given but not
/// registered.
#[allow(clippy::print_stdout)]
pub fn run(name: Option<&str>) -> Result<(), Error> {
    let registry = ChainRegistry::new();

    if let Some(name) = name {
        let chain = registry.lookup(name)?;
        println!("{}", serde_json::to_string_pretty(chain)?);
        return Ok(());
    }

    for chain in registry.all() {
        println!("{:<14} {:>8}  {}", chain.name, chain.chain_id, chain.rpc_url);
    }
    Ok(())
}
