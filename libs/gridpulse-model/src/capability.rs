//! Adapter capabilities
//!
//! A capability is a category of data an adapter can provide. The set is
//! closed: configuration, registry keys, and the adapter contract all
//! agree on these nine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of data categories served by source adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "production")]
    Production,
    #[serde(rename = "consumption")]
    Consumption,
    #[serde(rename = "exchange")]
    Exchange,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "consumptionForecast")]
    ConsumptionForecast,
    #[serde(rename = "generationForecast")]
    GenerationForecast,
    #[serde(rename = "exchangeForecast")]
    ExchangeForecast,
    #[serde(rename = "productionPerModeForecast")]
    ProductionPerModeForecast,
    #[serde(rename = "productionPerUnit")]
    ProductionPerUnit,
}

impl Capability {
    /// All capabilities, in configuration order.
    pub const ALL: [Capability; 9] = [
        Capability::Production,
        Capability::Consumption,
        Capability::Exchange,
        Capability::Price,
        Capability::ConsumptionForecast,
        Capability::GenerationForecast,
        Capability::ExchangeForecast,
        Capability::ProductionPerModeForecast,
        Capability::ProductionPerUnit,
    ];

    /// The capability name as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Production => "production",
            Capability::Consumption => "consumption",
            Capability::Exchange => "exchange",
            Capability::Price => "price",
            Capability::ConsumptionForecast => "consumptionForecast",
            Capability::GenerationForecast => "generationForecast",
            Capability::ExchangeForecast => "exchangeForecast",
            Capability::ProductionPerModeForecast => "productionPerModeForecast",
            Capability::ProductionPerUnit => "productionPerUnit",
        }
    }

    /// The contract method name an adapter reference must use for this
    /// capability (the `function` half of a `"module.function"` reference).
    pub fn fetch_fn(&self) -> &'static str {
        match self {
            Capability::Production => "fetch_production",
            Capability::Consumption => "fetch_consumption",
            Capability::Exchange => "fetch_exchange",
            Capability::Price => "fetch_price",
            Capability::ConsumptionForecast => "fetch_consumption_forecast",
            Capability::GenerationForecast => "fetch_generation_forecast",
            Capability::ExchangeForecast => "fetch_exchange_forecast",
            Capability::ProductionPerModeForecast => "fetch_production_per_mode_forecast",
            Capability::ProductionPerUnit => "fetch_production_per_unit",
        }
    }

    /// Whether this capability is keyed by a sorted zone pair rather
    /// than a single zone.
    pub fn is_exchange(&self) -> bool {
        matches!(self, Capability::Exchange | Capability::ExchangeForecast)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown capability: '{}'", s))
    }
}
