//! Fetch Error Taxonomy
//!
//! Typed outcomes a capability fetch can fail with. Expected conditions
//! (unsupported historical range, inconsistent upstream numbers, missing
//! registration) are distinct variants so callers can branch on them
//! without generic exception handling. Per-datapoint validation issues
//! are *not* errors; they are recovered by the pipeline (drop + warn).

use crate::capability::Capability;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for capability fetches.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors surfaced by adapters and dispatch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// No adapter is registered for the capability and key.
    #[error("No adapter registered for {capability} on '{key}'")]
    AdapterNotFound { capability: Capability, key: String },

    /// The adapter exists but does not implement the capability.
    ///
    /// Registry construction verifies declared capabilities, so hitting
    /// this at runtime indicates a registration bug.
    #[error("Adapter '{adapter}' does not implement {capability}")]
    UnsupportedCapability { adapter: String, capability: Capability },

    /// The adapter cannot serve historical data for the requested
    /// instant. Surfaced to the caller unchanged, never retried here.
    #[error("'{key}' cannot serve historical data for {target}")]
    UnsupportedTimeRange { key: String, target: DateTime<Utc> },

    /// Upstream numbers failed a sanity check. Fatal for this fetch;
    /// carries the offending key and both values for diagnosis.
    #[error("Inconsistent source data for '{key}': {message}")]
    SourceDataInconsistent { key: String, message: String },

    /// Network or protocol failure in the underlying transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn unsupported_time_range(key: impl Into<String>, target: DateTime<Utc>) -> Self {
        FetchError::UnsupportedTimeRange {
            key: key.into(),
            target,
        }
    }

    pub fn inconsistent(key: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::SourceDataInconsistent {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
