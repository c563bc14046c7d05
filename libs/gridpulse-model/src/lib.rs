//! GridPulse Model Library
//!
//! Core domain types for grid-telemetry normalization.
//! This library provides pure data types without service dependencies.
//!
//! # Modules
//!
//! - `zone`: Zone identifiers and canonical sorted zone pairs
//! - `capability`: The fixed set of data categories an adapter can provide
//! - `mode`: Generation/storage fuel categories and mode-keyed mix maps
//! - `datapoint`: The unified datapoint records crossing the system boundary
//! - `time`: Interval-start timestamp convention helpers
//! - `error`: Shared fetch error taxonomy
//!
//! # Example
//!
//! ```
//! use gridpulse_model::{SortedZonePair, ZoneKey};
//!
//! let pair = SortedZonePair::new(ZoneKey::from("SE"), ZoneKey::from("AX"));
//! assert_eq!(pair.to_string(), "AX->SE");
//! ```

pub mod capability;
pub mod datapoint;
pub mod error;
pub mod mode;
pub mod time;
pub mod zone;

// Re-exports for convenience
pub use capability::Capability;
pub use datapoint::{
    ConsumptionDatapoint, ExchangeDatapoint, ForecastDatapoint, PriceDatapoint,
    ProductionDatapoint, ProductionUnitDatapoint,
};
pub use error::{FetchError, FetchResult};
pub use mode::{Mode, ModeMix};
pub use time::interval_start;
pub use zone::{SortedZonePair, ZoneKey};
