//! `deployer generate-storage-location` command.

use crate::error::Error;
use crate::storage::derive_storage_location;

/// Execute the `generate-storage-location` command.
///
/// Prints the derived slot as a 0x-prefixed 32-byte hex value on stdout.
///
/// # Errors
///
/// Returns [`Error::Derivation`] if the identifier hashes to the zero
/// word.
#[allow(clippy::print_stdout)]
pub fn run(identifier: &str) -> Result<(), Error> {
    let slot = derive_storage_location(identifier)?;
    println!("{slot}");
    Ok(())
}
