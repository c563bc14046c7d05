//! GridPulse Registry Library
//!
//! The dispatch layer between callers and source adapters. A request
//! for "zone X, capability Y" is resolved against a lookup table built
//! once at process start from declarative configuration - no runtime
//! string-based resolution, no ambient global state.
//!
//! # Modules
//!
//! - `contract`: The `SourceAdapter` trait every adapter implements
//! - `adapters`: The named set of available adapter implementations
//! - `config`: Declarative sources configuration (zones, exchanges)
//! - `registry`: The read-only `(capability, key) -> adapter` table
//! - `error`: Registry construction errors (fatal at startup)
//!
//! # Example
//!
//! ```no_run
//! use gridpulse_registry::{AdapterRegistry, AdapterSet, Session, SourcesConfig};
//!
//! # fn adapters() -> AdapterSet { AdapterSet::new() }
//! let config = SourcesConfig::from_file("config/sources.yaml")?;
//! let registry = AdapterRegistry::build(&config, &adapters())?;
//!
//! let session = Session::new();
//! let _points = registry.fetch_production(&"AW".into(), &session, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adapters;
pub mod config;
pub mod contract;
pub mod error;
pub mod registry;

// Re-exports for convenience
pub use adapters::AdapterSet;
pub use config::{AdapterRef, EntryConfig, SourcesConfig};
pub use contract::{Session, SourceAdapter};
pub use error::RegistryError;
pub use registry::{AdapterRegistry, RegistryKey};
