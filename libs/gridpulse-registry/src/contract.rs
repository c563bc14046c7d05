//! Capability Contract
//!
//! The interface every source adapter satisfies: one method per
//! capability with a fixed input/output shape. Adapters perform network
//! I/O only and never mutate registry state.
//!
//! `target_datetime = None` requests the most recent available data; a
//! non-null value requests historical data as of that instant. An
//! adapter that cannot serve a historical point returns
//! [`FetchError::UnsupportedTimeRange`] rather than silently returning
//! live data.

use chrono::{DateTime, Utc};
use gridpulse_model::{
    Capability, ConsumptionDatapoint, ExchangeDatapoint, FetchError, FetchResult,
    ForecastDatapoint, PriceDatapoint, ProductionDatapoint, ProductionUnitDatapoint,
    SortedZonePair, ZoneKey,
};

/// Blocking HTTP session handed to adapters.
///
/// Retry, timeout, and cancellation policy live in the transport; this
/// core defines none of its own.
pub type Session = reqwest::blocking::Client;

/// The contract every source adapter implements.
///
/// Default method bodies return [`FetchError::UnsupportedCapability`],
/// so a concrete adapter implements only the capabilities it declares
/// in [`SourceAdapter::capabilities`]. Registry construction verifies
/// the declaration against the configuration, which makes reaching a
/// default body a registration bug rather than a runtime surprise.
pub trait SourceAdapter: Send + Sync {
    /// Upstream attribution string (e.g. `"eia.gov"`).
    fn source(&self) -> &str;

    /// The capabilities this adapter actually implements.
    fn capabilities(&self) -> &[Capability];

    fn fetch_production(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionDatapoint>> {
        Err(self.unsupported(Capability::Production))
    }

    fn fetch_consumption(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ConsumptionDatapoint>> {
        Err(self.unsupported(Capability::Consumption))
    }

    fn fetch_exchange(
        &self,
        _sorted_zone_keys: &SortedZonePair,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ExchangeDatapoint>> {
        Err(self.unsupported(Capability::Exchange))
    }

    fn fetch_price(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<PriceDatapoint>> {
        Err(self.unsupported(Capability::Price))
    }

    fn fetch_consumption_forecast(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ForecastDatapoint>> {
        Err(self.unsupported(Capability::ConsumptionForecast))
    }

    fn fetch_generation_forecast(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ForecastDatapoint>> {
        Err(self.unsupported(Capability::GenerationForecast))
    }

    fn fetch_exchange_forecast(
        &self,
        _sorted_zone_keys: &SortedZonePair,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ExchangeDatapoint>> {
        Err(self.unsupported(Capability::ExchangeForecast))
    }

    fn fetch_production_per_mode_forecast(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionDatapoint>> {
        Err(self.unsupported(Capability::ProductionPerModeForecast))
    }

    fn fetch_production_per_unit(
        &self,
        _zone_key: &ZoneKey,
        _session: &Session,
        _target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionUnitDatapoint>> {
        Err(self.unsupported(Capability::ProductionPerUnit))
    }

    /// Whether this adapter declares `capability`.
    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Error value for a capability this adapter does not implement.
    fn unsupported(&self, capability: Capability) -> FetchError {
        FetchError::UnsupportedCapability {
            adapter: self.source().to_string(),
            capability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ProductionOnly;

    impl SourceAdapter for ProductionOnly {
        fn source(&self) -> &str {
            "test.example"
        }

        fn capabilities(&self) -> &[Capability] {
            &[Capability::Production]
        }

        fn fetch_production(
            &self,
            zone_key: &ZoneKey,
            _session: &Session,
            _target_datetime: Option<DateTime<Utc>>,
        ) -> FetchResult<Vec<ProductionDatapoint>> {
            Ok(vec![ProductionDatapoint::new(
                zone_key.clone(),
                chrono::Utc::now(),
                self.source(),
            )])
        }
    }

    #[test]
    fn test_supports_reflects_declaration() {
        let adapter = ProductionOnly;
        assert!(adapter.supports(Capability::Production));
        assert!(!adapter.supports(Capability::Price));
    }

    #[test]
    fn test_default_body_signals_unsupported_capability() {
        let adapter = ProductionOnly;
        let session = Session::new();
        let err = adapter
            .fetch_price(&ZoneKey::from("AW"), &session, None)
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::UnsupportedCapability {
                adapter: "test.example".to_string(),
                capability: Capability::Price,
            }
        );
    }
}
