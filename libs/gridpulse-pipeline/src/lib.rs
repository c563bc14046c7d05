//! GridPulse Pipeline Library
//!
//! Post-processing layer between raw adapter output and the unified
//! schema. Pure numeric logic; no I/O beyond configuration loading.
//!
//! # Modules
//!
//! - `config`: Externally supplied per-zone/per-mode quality thresholds
//! - `validate`: Per-datapoint numeric rules (required modes, negative
//!   handling, floor) and reported-total reconciliation
//! - `diffbound`: Rejection of implausible jumps between consecutive samples
//! - `merge`: Union of partial production-mix series
//! - `exchange`: Canonical sorted-pair / signed net-flow normalization
//!
//! Per-datapoint rejections are recovered locally (dropped with a
//! warning); only structural problems - inconsistent totals beyond the
//! hard limit - abort a fetch.

pub mod config;
pub mod diffbound;
pub mod exchange;
pub mod merge;
pub mod validate;

// Re-exports for convenience
pub use config::{QualityConfig, ValidationRules, ZoneQuality};
pub use diffbound::validate_production_diffs;
pub use exchange::ExchangeNormalizer;
pub use merge::{apply_ownership, merge_partial_mixes};
pub use validate::{unknown_from_total, validate, validate_all, DEFAULT_TOTAL_RATIO_LIMIT};
