//! Declarative sources configuration
//!
//! Describes, per zone and per cross-border pair, which adapter
//! implements which capability. Consumed once at startup by
//! [`crate::registry::AdapterRegistry::build`].
//!
//! ```yaml
//! zones:
//!   AW:
//!     parsers:
//!       production: AW.fetch_production
//!   FR:
//!     parsers:
//!       production: FR.fetch_production
//!       price: FR.fetch_price
//! exchanges:
//!   AX->SE:
//!     parsers:
//!       exchange: AX.fetch_exchange
//! ```

use crate::error::RegistryError;
use gridpulse_model::{Capability, SortedZonePair, ZoneKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Capability wiring for one zone or exchange entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// `capability -> "module.function"` references.
    pub parsers: BTreeMap<Capability, String>,
}

/// The full declarative sources configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub zones: BTreeMap<ZoneKey, EntryConfig>,
    pub exchanges: BTreeMap<SortedZonePair, EntryConfig>,
}

impl SourcesConfig {
    /// Load from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, common::ConfigError> {
        common::load_config_from_file(path)
    }
}

/// A parsed `"module.function"` adapter reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRef {
    pub module: String,
    pub function: String,
}

impl AdapterRef {
    /// Parse a reference, reporting the offending registry `key` on error.
    pub fn parse(reference: &str, key: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidReference {
            reference: reference.to_string(),
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let (module, function) = reference
            .split_once('.')
            .ok_or_else(|| invalid("expected 'module.function'"))?;
        if module.is_empty() || function.is_empty() {
            return Err(invalid("empty module or function name"));
        }
        if function.contains('.') {
            return Err(invalid("expected exactly one '.' separator"));
        }

        Ok(Self {
            module: module.to_string(),
            function: function.to_string(),
        })
    }
}
