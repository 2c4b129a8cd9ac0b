//! Namespaced storage-slot derivation for upgradeable contracts.
//!
//! Upgrade-safe contracts place their state in a storage region addressed
//! by a hash of a human-readable namespace (e.g.
//! `elite-oracle.storage.DMA`) instead of declaration order, so that new
//! implementation versions cannot collide with inherited layouts.
//!
//! The derivation is `keccak256(id) - 1` with the low byte cleared. The
//! subtraction keeps the raw hash of the namespace itself reserved, and
//! the cleared byte leaves 256 sub-slots of headroom that sequential
//! field allocation can never reach.

use alloy_primitives::{B256, U256, keccak256};

use crate::error::Error;

/// Derive the storage location for a namespace identifier.
///
/// Pure and deterministic: the same identifier always yields the same
/// slot, and the low 8 bits of the result are always zero. The empty
/// identifier is accepted; it hashes like any other byte string.
///
/// # Errors
///
/// Returns [`Error::Derivation`] if the identifier hashes to the zero
/// word (see [`location_from_hash`]).
pub fn derive_storage_location(identifier: &str) -> Result<B256, Error> {
    location_from_hash(keccak256(identifier.as_bytes()))
}

/// Compute a storage location from an already-hashed namespace.
///
/// # Errors
///
/// Returns [`Error::Derivation`] if `hash` is the zero word: the
/// decrement step would wrap to `U256::MAX`, and a silently wrapped slot
/// is worse than an outright failure. No real keccak output is expected
/// to trip this.
pub fn location_from_hash(hash: B256) -> Result<B256, Error> {
    if hash.is_zero() {
        return Err(Error::Derivation(
            "namespace hash is the zero word, refusing to wrap".into(),
        ));
    }
    let raw = U256::from_be_bytes(hash.0) - U256::ONE;
    let slot = raw & !U256::from(0xffu64);
    Ok(B256::from(slot))
}
