//! Unified datapoint records
//!
//! These are the only representations crossing the boundary to storage
//! and serving systems, so their serialized field names follow the
//! unified schema (`zoneKey`, `sortedZoneKeys`, `netFlow`, ...).
//!
//! All datetimes are timezone-aware UTC instants marking the *start* of
//! the measurement interval. Sources reporting interval-end timestamps
//! must be shifted back by one interval before entering this model
//! (see [`crate::time::interval_start`]).

use crate::mode::{Mode, ModeMix};
use crate::zone::{SortedZonePair, ZoneKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One production-mix measurement for a zone.
///
/// `production` holds MW generated per mode; `storage` holds MW consumed
/// by storage per mode (positive while charging). Modes absent from
/// either map are unknown/unreported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDatapoint {
    pub zone_key: ZoneKey,
    pub datetime: DateTime<Utc>,
    pub production: ModeMix,
    pub storage: ModeMix,
    pub source: String,
    /// Installed capacity per mode, when the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<ModeMix>,
}

impl ProductionDatapoint {
    /// Datapoint with empty production and storage maps.
    pub fn new(zone_key: ZoneKey, datetime: DateTime<Utc>, source: impl Into<String>) -> Self {
        Self {
            zone_key,
            datetime,
            production: ModeMix::new(),
            storage: ModeMix::new(),
            source: source.into(),
            capacity: None,
        }
    }
}

/// One total-consumption measurement for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionDatapoint {
    pub zone_key: ZoneKey,
    pub datetime: DateTime<Utc>,
    /// Total consumption in MW.
    pub consumption: f64,
    pub source: String,
}

/// One wholesale price measurement for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDatapoint {
    pub zone_key: ZoneKey,
    pub datetime: DateTime<Utc>,
    /// Price per MWh in `currency`.
    pub price: f64,
    pub currency: String,
    pub source: String,
}

/// One forecast value for a zone (consumption or total generation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDatapoint {
    pub zone_key: ZoneKey,
    pub datetime: DateTime<Utc>,
    /// Forecast value in MW.
    pub value: f64,
    pub source: String,
}

/// One per-unit production measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionUnitDatapoint {
    pub zone_key: ZoneKey,
    pub datetime: DateTime<Utc>,
    /// Source-assigned generating unit name.
    pub unit: String,
    /// The unit's fuel mode, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Unit output in MW.
    pub value: f64,
    pub source: String,
}

/// One cross-border exchange measurement.
///
/// `net_flow` is signed so that positive means power flowing from the
/// alphabetically-first zone of the pair to the second. `None` means the
/// source could not report a flow for the interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeDatapoint {
    pub sorted_zone_keys: SortedZonePair,
    pub datetime: DateTime<Utc>,
    pub net_flow: Option<f64>,
    pub source: String,
}
