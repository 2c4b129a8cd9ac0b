//! Secret lookup capability.
//!
//! The resolver never reads the process environment directly; it is
//! handed a [`SecretSource`] so tests can substitute an in-memory map
//! and production code keeps a single, visible seam for credentials.

/// Read-only lookup of named secrets.
///
/// Implementations must be idempotent and side-effect-free: the resolver
/// may query the same key any number of times within a pass.
pub trait SecretSource {
    /// Returns the secret stored under `key`, or `None` if it is absent
    /// or empty. Empty values are indistinguishable from unset ones on
    /// purpose: an empty credential or API key is never usable.
    fn get(&self, key: &str) -> Option<String>;
}

/// [`SecretSource`] backed by the process environment.
///
/// `.env` loading (via `dotenvy`) happens at the CLI boundary before
/// this source is constructed, so both real and dotfile-provided
/// variables are visible here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}
