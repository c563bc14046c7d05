//! Adapter Registry & Dispatch
//!
//! Built once at process start from declarative configuration; maps
//! `(capability, zone)` or `(capability, sorted pair)` to a concrete
//! adapter. Read-only after construction, so concurrent dispatch from
//! many callers needs no locking.

use crate::adapters::AdapterSet;
use crate::config::{AdapterRef, EntryConfig, SourcesConfig};
use crate::contract::{Session, SourceAdapter};
use crate::error::RegistryError;
use chrono::{DateTime, Utc};
use gridpulse_model::{
    Capability, ConsumptionDatapoint, ExchangeDatapoint, FetchError, FetchResult,
    ForecastDatapoint, PriceDatapoint, ProductionDatapoint, ProductionUnitDatapoint,
    SortedZonePair, ZoneKey,
};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Key of one registry entry: a zone for zone-scoped capabilities, a
/// sorted pair for exchange capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryKey {
    Zone(ZoneKey),
    Pair(SortedZonePair),
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKey::Zone(zone) => write!(f, "{}", zone),
            RegistryKey::Pair(pair) => write!(f, "{}", pair),
        }
    }
}

impl From<ZoneKey> for RegistryKey {
    fn from(zone: ZoneKey) -> Self {
        RegistryKey::Zone(zone)
    }
}

impl From<SortedZonePair> for RegistryKey {
    fn from(pair: SortedZonePair) -> Self {
        RegistryKey::Pair(pair)
    }
}

/// The `(capability, key) -> adapter` lookup table.
///
/// Construction resolves every configured reference against the
/// [`AdapterSet`] and fails fast on any wiring mistake; dispatch is a
/// pure lookup.
pub struct AdapterRegistry {
    entries: FxHashMap<(Capability, RegistryKey), Arc<dyn SourceAdapter>>,
}

impl AdapterRegistry {
    /// Build the registry from configuration.
    ///
    /// For every configured zone/exchange entry and every declared
    /// capability, the `"module.function"` reference is resolved to a
    /// registered adapter and inserted. Duplicates, unknown modules,
    /// malformed references, function names not matching the
    /// capability, and undeclared capabilities are all fatal here -
    /// never at call time.
    pub fn build(config: &SourcesConfig, adapters: &AdapterSet) -> Result<Self, RegistryError> {
        Self::build_all([config], adapters)
    }

    /// Build from several configuration stores (e.g. per-region files).
    ///
    /// The same `(capability, key)` appearing in two stores is a
    /// duplicate registration and fails the build.
    pub fn build_all<'a>(
        configs: impl IntoIterator<Item = &'a SourcesConfig>,
        adapters: &AdapterSet,
    ) -> Result<Self, RegistryError> {
        let mut entries: FxHashMap<(Capability, RegistryKey), Arc<dyn SourceAdapter>> =
            FxHashMap::default();
        let mut zones = 0usize;
        let mut exchanges = 0usize;

        for config in configs {
            for (zone, entry) in &config.zones {
                let key = RegistryKey::Zone(zone.clone());
                insert_entry_capabilities(&mut entries, adapters, &key, entry, false)?;
            }
            for (pair, entry) in &config.exchanges {
                let key = RegistryKey::Pair(pair.clone());
                insert_entry_capabilities(&mut entries, adapters, &key, entry, true)?;
            }
            zones += config.zones.len();
            exchanges += config.exchanges.len();
        }

        info!(
            registrations = entries.len(),
            zones,
            exchanges,
            "Adapter registry built"
        );
        Ok(Self { entries })
    }

    /// Pure lookup. `None` means no registration exists for the pair -
    /// distinct from a registered adapter refusing a time range.
    pub fn resolve(
        &self,
        capability: Capability,
        key: &RegistryKey,
    ) -> Option<&Arc<dyn SourceAdapter>> {
        self.entries.get(&(capability, key.clone()))
    }

    /// Number of `(capability, key)` registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The capabilities registered for a key, in configuration order.
    pub fn capabilities_for(&self, key: &RegistryKey) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.entries.contains_key(&(*c, key.clone())))
            .collect()
    }

    fn dispatch(
        &self,
        capability: Capability,
        key: RegistryKey,
    ) -> FetchResult<&Arc<dyn SourceAdapter>> {
        self.resolve(capability, &key)
            .ok_or(FetchError::AdapterNotFound {
                capability,
                key: key.to_string(),
            })
    }

    pub fn fetch_production(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionDatapoint>> {
        self.dispatch(Capability::Production, zone_key.clone().into())?
            .fetch_production(zone_key, session, target_datetime)
    }

    pub fn fetch_consumption(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ConsumptionDatapoint>> {
        self.dispatch(Capability::Consumption, zone_key.clone().into())?
            .fetch_consumption(zone_key, session, target_datetime)
    }

    /// Dispatch an exchange fetch. The caller may pass the two zones in
    /// any order; resolution and the returned datapoints both use the
    /// canonical sorted pair.
    pub fn fetch_exchange(
        &self,
        zone_key1: &ZoneKey,
        zone_key2: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ExchangeDatapoint>> {
        let pair = SortedZonePair::new(zone_key1.clone(), zone_key2.clone());
        self.dispatch(Capability::Exchange, pair.clone().into())?
            .fetch_exchange(&pair, session, target_datetime)
    }

    pub fn fetch_price(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<PriceDatapoint>> {
        self.dispatch(Capability::Price, zone_key.clone().into())?
            .fetch_price(zone_key, session, target_datetime)
    }

    pub fn fetch_consumption_forecast(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ForecastDatapoint>> {
        self.dispatch(Capability::ConsumptionForecast, zone_key.clone().into())?
            .fetch_consumption_forecast(zone_key, session, target_datetime)
    }

    pub fn fetch_generation_forecast(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ForecastDatapoint>> {
        self.dispatch(Capability::GenerationForecast, zone_key.clone().into())?
            .fetch_generation_forecast(zone_key, session, target_datetime)
    }

    pub fn fetch_exchange_forecast(
        &self,
        zone_key1: &ZoneKey,
        zone_key2: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ExchangeDatapoint>> {
        let pair = SortedZonePair::new(zone_key1.clone(), zone_key2.clone());
        self.dispatch(Capability::ExchangeForecast, pair.clone().into())?
            .fetch_exchange_forecast(&pair, session, target_datetime)
    }

    pub fn fetch_production_per_mode_forecast(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionDatapoint>> {
        self.dispatch(
            Capability::ProductionPerModeForecast,
            zone_key.clone().into(),
        )?
        .fetch_production_per_mode_forecast(zone_key, session, target_datetime)
    }

    pub fn fetch_production_per_unit(
        &self,
        zone_key: &ZoneKey,
        session: &Session,
        target_datetime: Option<DateTime<Utc>>,
    ) -> FetchResult<Vec<ProductionUnitDatapoint>> {
        self.dispatch(Capability::ProductionPerUnit, zone_key.clone().into())?
            .fetch_production_per_unit(zone_key, session, target_datetime)
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("registrations", &self.entries.len())
            .finish()
    }
}

fn insert_entry_capabilities(
    entries: &mut FxHashMap<(Capability, RegistryKey), Arc<dyn SourceAdapter>>,
    adapters: &AdapterSet,
    key: &RegistryKey,
    entry: &EntryConfig,
    pair_entry: bool,
) -> Result<(), RegistryError> {
    for (&capability, reference) in &entry.parsers {
        if capability.is_exchange() != pair_entry {
            return Err(RegistryError::InvalidReference {
                reference: reference.clone(),
                key: key.to_string(),
                reason: if pair_entry {
                    format!("{} cannot be registered on an exchange pair", capability)
                } else {
                    format!("{} cannot be registered on a single zone", capability)
                },
            });
        }

        let adapter_ref = AdapterRef::parse(reference, &key.to_string())?;
        if adapter_ref.function != capability.fetch_fn() {
            return Err(RegistryError::InvalidReference {
                reference: reference.clone(),
                key: key.to_string(),
                reason: format!(
                    "function '{}' does not serve {} (expected '{}')",
                    adapter_ref.function,
                    capability,
                    capability.fetch_fn()
                ),
            });
        }

        let adapter = adapters
            .get(&adapter_ref.module)
            .ok_or_else(|| RegistryError::UnknownAdapter {
                module: adapter_ref.module.clone(),
                key: key.to_string(),
            })?;
        if !adapter.supports(capability) {
            return Err(RegistryError::UndeclaredCapability {
                module: adapter_ref.module,
                capability,
                key: key.to_string(),
            });
        }

        let previous = entries.insert((capability, key.clone()), Arc::clone(adapter));
        if previous.is_some() {
            return Err(RegistryError::DuplicateRegistration {
                capability,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
