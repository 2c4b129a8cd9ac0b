//! Unified error types for the deployer.

use thiserror::Error;

/// Top-level error type for the deployer application.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage-slot derivation was handed an invalid hash value.
    #[error("derivation: {0}")]
    Derivation(String),

    /// A chain name is not present in the registry.
    #[error("unknown chain '{0}', run `deployer chains` for the supported set")]
    UnknownChain(String),

    /// The required signing credential is absent from the secret source.
    #[error("missing credential: '{0}' is not set or empty")]
    MissingCredential(String),

    /// Resolved configuration could not be serialised for the driver.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
