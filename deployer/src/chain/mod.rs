//! Supported deployment chains.
//!
//! - [`registry`] — [`ChainDescriptor`] static data and the immutable
//!   [`ChainRegistry`] handed to configuration consumers.

mod registry;

pub use self::registry::*;
