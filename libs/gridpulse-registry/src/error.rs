//! Registry construction errors
//!
//! Every variant here is fatal at startup, before any request is
//! served. Call-time failures use [`gridpulse_model::FetchError`].

use gridpulse_model::Capability;
use thiserror::Error;

/// Errors raised while building the adapter registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two adapter implementations registered under the same module name.
    #[error("Duplicate adapter name '{0}' in adapter set")]
    DuplicateAdapter(String),

    /// Two configuration entries claim the same capability and key.
    #[error("Duplicate registration for {capability} on '{key}'")]
    DuplicateRegistration { capability: Capability, key: String },

    /// A `"module.function"` reference could not be interpreted.
    #[error("Invalid adapter reference '{reference}' for '{key}': {reason}")]
    InvalidReference {
        reference: String,
        key: String,
        reason: String,
    },

    /// The referenced module name matches no registered adapter.
    #[error("Unknown adapter module '{module}' referenced by '{key}'")]
    UnknownAdapter { module: String, key: String },

    /// The referenced adapter does not declare the capability.
    #[error("Adapter '{module}' does not declare {capability}, referenced by '{key}'")]
    UndeclaredCapability {
        module: String,
        capability: Capability,
        key: String,
    },

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] common::ConfigError),
}
