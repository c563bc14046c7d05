//! Mix Merger
//!
//! Combines N partial production-mix series - one query per fuel type,
//! or supplying-zone contributions - into one per-timestamp union.
//!
//! The series whose final timestamp is most recent defines the reference
//! timeframe; points from other series outside it are stale partial data
//! (a fuel type reporting with a multi-month lag) and are discarded so
//! they cannot silently degrade the freshness of the merged mix.

use chrono::{DateTime, Utc};
use gridpulse_model::{ProductionDatapoint, ZoneKey};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Scale a partial series by a configured ownership percentage.
///
/// Used when a single physical asset is split across reporting zones
/// and only `share` of its output belongs to the merged zone.
pub fn apply_ownership(datapoints: &mut [ProductionDatapoint], share: f64) {
    for datapoint in datapoints {
        datapoint.production.scale(share);
        datapoint.storage.scale(share);
    }
}

/// Merge partial production-mix series into one series for `zone_key`.
///
/// Same-mode contributions at the same timestamp are summed across
/// series (production and storage alike). Modes with no contributing
/// source stay unreported - `None`, never `0.0`. When no series has any
/// timestamp the result is empty, which is an expected outcome rather
/// than an error.
pub fn merge_partial_mixes(
    partials: Vec<Vec<ProductionDatapoint>>,
    zone_key: &ZoneKey,
    merge_source: &str,
) -> Vec<ProductionDatapoint> {
    let indexed: Vec<BTreeMap<DateTime<Utc>, ProductionDatapoint>> = partials
        .into_iter()
        .map(index_by_timestamp)
        .filter(|series| !series.is_empty())
        .collect();

    if indexed.is_empty() {
        debug!(zone = %zone_key, "No partial mixes with timestamps to merge");
        return Vec::new();
    }

    // The series with the most recent final timestamp is authoritative
    let reference: BTreeSet<DateTime<Utc>> = indexed
        .iter()
        .max_by_key(|series| series.keys().next_back().copied())
        .map(|series| series.keys().copied().collect())
        .unwrap_or_default();

    let mut merged: BTreeMap<DateTime<Utc>, ProductionDatapoint> = BTreeMap::new();
    for series in indexed {
        for (timestamp, datapoint) in series {
            if !reference.contains(&timestamp) {
                debug!(
                    zone = %zone_key,
                    %timestamp,
                    source = %datapoint.source,
                    "Discarding stale datapoint outside the reference timeframe"
                );
                continue;
            }

            let entry = merged.entry(timestamp).or_insert_with(|| {
                ProductionDatapoint::new(zone_key.clone(), timestamp, merge_source)
            });
            for (mode, value) in datapoint.production.iter() {
                entry.production.add(mode, value);
            }
            for (mode, value) in datapoint.storage.iter() {
                entry.storage.add(mode, value);
            }
        }
    }

    merged.into_values().collect()
}

/// Index a series by timestamp; a duplicate timestamp within one series
/// keeps the later entry.
fn index_by_timestamp(
    datapoints: Vec<ProductionDatapoint>,
) -> BTreeMap<DateTime<Utc>, ProductionDatapoint> {
    datapoints
        .into_iter()
        .map(|datapoint| (datapoint.datetime, datapoint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gridpulse_model::Mode;

    fn dt(day: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, h, 0, 0).unwrap()
    }

    fn single_mode_series(
        mode: Mode,
        points: &[(DateTime<Utc>, f64)],
    ) -> Vec<ProductionDatapoint> {
        points
            .iter()
            .map(|(ts, v)| {
                let mut dp = ProductionDatapoint::new(ZoneKey::from("US-CENT-SWPP"), *ts, "eia.gov");
                dp.production.set(mode, *v);
                dp
            })
            .collect()
    }

    #[test]
    fn test_union_of_disjoint_modes() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let gas = single_mode_series(Mode::Gas, &[(dt(1, 0), 900.0), (dt(1, 1), 950.0)]);
        let wind = single_mode_series(Mode::Wind, &[(dt(1, 0), 400.0), (dt(1, 1), 380.0)]);

        let merged = merge_partial_mixes(vec![gas, wind], &zone, "eia.gov");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].production.get(Mode::Gas), Some(900.0));
        assert_eq!(merged[0].production.get(Mode::Wind), Some(400.0));
        // No source contributed solar: unreported, not zero
        assert_eq!(merged[0].production.get(Mode::Solar), None);
    }

    #[test]
    fn test_same_mode_contributions_sum() {
        let zone = ZoneKey::from("US-CAR-SCEG");
        let own = single_mode_series(Mode::Nuclear, &[(dt(1, 0), 600.0)]);
        let supplier = single_mode_series(Mode::Nuclear, &[(dt(1, 0), 300.0)]);

        let merged = merge_partial_mixes(vec![own, supplier], &zone, "eia.gov");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].production.get(Mode::Nuclear), Some(900.0));
    }

    #[test]
    fn test_ownership_share_scales_before_merge() {
        let zone = ZoneKey::from("US-CAR-SC");
        let mut supplier = single_mode_series(Mode::Nuclear, &[(dt(1, 0), 900.0)]);
        apply_ownership(&mut supplier, 1.0 / 3.0);

        let merged = merge_partial_mixes(vec![supplier], &zone, "eia.gov");
        assert_eq!(merged[0].production.get(Mode::Nuclear), Some(300.0));
    }

    #[test]
    fn test_stale_series_discarded_outside_reference() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        // Oil last reported months ago; gas is fresh
        let oil = single_mode_series(Mode::Oil, &[(dt(1, 0), 50.0), (dt(1, 1), 55.0)]);
        let gas = single_mode_series(Mode::Gas, &[(dt(20, 0), 900.0), (dt(20, 1), 950.0)]);

        let merged = merge_partial_mixes(vec![oil, gas], &zone, "eia.gov");
        assert_eq!(merged.len(), 2);
        for dp in &merged {
            assert_eq!(dp.production.get(Mode::Oil), None);
            assert!(dp.production.get(Mode::Gas).is_some());
        }
    }

    #[test]
    fn test_overlapping_timestamp_in_stale_series_kept() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        // Oil overlaps the first fresh timestamp but then stops
        let oil = single_mode_series(Mode::Oil, &[(dt(20, 0), 50.0)]);
        let gas = single_mode_series(Mode::Gas, &[(dt(20, 0), 900.0), (dt(20, 1), 950.0)]);

        let merged = merge_partial_mixes(vec![oil, gas], &zone, "eia.gov");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].production.get(Mode::Oil), Some(50.0));
        assert_eq!(merged[1].production.get(Mode::Oil), None);
    }

    #[test]
    fn test_single_series_merge_is_identity() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let gas = single_mode_series(Mode::Gas, &[(dt(1, 0), 900.0), (dt(1, 1), 950.0)]);

        let merged = merge_partial_mixes(vec![gas.clone()], &zone, "eia.gov");
        assert_eq!(merged, gas);
    }

    #[test]
    fn test_duplicated_input_doubles_only_from_inputs() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let gas = single_mode_series(Mode::Gas, &[(dt(1, 0), 900.0)]);

        let merged = merge_partial_mixes(vec![gas.clone(), gas], &zone, "eia.gov");
        assert_eq!(merged[0].production.get(Mode::Gas), Some(1800.0));
    }

    #[test]
    fn test_storage_merged_like_production() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let mut pumping = ProductionDatapoint::new(zone.clone(), dt(1, 0), "eia.gov");
        pumping.storage.add(Mode::Hydro, 250.0);

        let gas = single_mode_series(Mode::Gas, &[(dt(1, 0), 900.0)]);
        let merged = merge_partial_mixes(vec![vec![pumping], gas], &zone, "eia.gov");
        assert_eq!(merged[0].storage.get(Mode::Hydro), Some(250.0));
        assert_eq!(merged[0].production.get(Mode::Gas), Some(900.0));
    }

    #[test]
    fn test_all_series_empty_yields_empty() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let merged = merge_partial_mixes(vec![Vec::new(), Vec::new()], &zone, "eia.gov");
        assert!(merged.is_empty());

        let merged = merge_partial_mixes(Vec::new(), &zone, "eia.gov");
        assert!(merged.is_empty());
    }

    #[test]
    fn test_duplicate_timestamp_within_series_keeps_later() {
        let zone = ZoneKey::from("US-CENT-SWPP");
        let gas = single_mode_series(Mode::Gas, &[(dt(1, 0), 900.0), (dt(1, 0), 910.0)]);

        let merged = merge_partial_mixes(vec![gas], &zone, "eia.gov");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].production.get(Mode::Gas), Some(910.0));
    }
}
