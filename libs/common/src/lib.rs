//! GridPulse Common Library
//!
//! Shared bootstrap utilities used by every GridPulse crate and by
//! callers embedding the core: logging initialization and configuration
//! file loading. No domain logic lives here.

pub mod config;
pub mod logging;

pub use config::{load_config, load_config_from_file, ConfigError};
pub use logging::init_logging;
