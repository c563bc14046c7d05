//! Diff-Bound Validator
//!
//! Rejects samples whose per-mode change from the previous accepted
//! sample exceeds a plausibility threshold. Exactly one point is removed
//! per violation, and the comparison baseline resumes from the last
//! *accepted* point, so a single corrupt sample cannot cascade into
//! rejecting the rest of the series.

use gridpulse_model::{Mode, ProductionDatapoint};
use std::collections::BTreeMap;
use tracing::warn;

/// Filter a time-ordered, same-zone production series against per-mode
/// maximum plausible deltas.
///
/// `max_diffs` maps each checked mode to the largest credible change in
/// MW between consecutive samples; modes without an entry are not
/// checked. The input must be ordered by time.
pub fn validate_production_diffs(
    datapoints: Vec<ProductionDatapoint>,
    max_diffs: &BTreeMap<Mode, f64>,
) -> Vec<ProductionDatapoint> {
    let mut accepted = Vec::with_capacity(datapoints.len());
    let mut baseline: BTreeMap<Mode, f64> = BTreeMap::new();

    for datapoint in datapoints {
        let violation = max_diffs.iter().find_map(|(&mode, &bound)| {
            let previous = baseline.get(&mode).copied()?;
            let current = datapoint.production.get(mode)?;
            let diff = (current - previous).abs();
            (diff > bound).then_some((mode, previous, current))
        });

        if let Some((mode, previous, current)) = violation {
            warn!(
                zone = %datapoint.zone_key,
                mode = %mode,
                previous,
                current,
                "Dropping datapoint: implausible change between consecutive samples"
            );
            // Baseline intentionally unchanged: the next sample is
            // compared against the last accepted value
            continue;
        }

        for (mode, value) in datapoint.production.iter() {
            baseline.insert(mode, value);
        }
        accepted.push(datapoint);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use gridpulse_model::ZoneKey;

    fn dt(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap()
    }

    fn series(mode: Mode, values: &[f64]) -> Vec<ProductionDatapoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut dp = ProductionDatapoint::new(ZoneKey::from("FR"), dt(i as u32), "test");
                dp.production.set(mode, *v);
                dp
            })
            .collect()
    }

    fn values(points: &[ProductionDatapoint], mode: Mode) -> Vec<f64> {
        points
            .iter()
            .filter_map(|dp| dp.production.get(mode))
            .collect()
    }

    #[test]
    fn test_anomalous_point_dropped_baseline_resumes() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Hydro, 1600.0)].into_iter().collect();

        // 3000 jumps 2890 from 110; the next point is compared against
        // 110 (the last accepted), not 3000
        let out = validate_production_diffs(
            series(Mode::Hydro, &[100.0, 110.0, 3000.0, 115.0]),
            &max_diffs,
        );
        assert_eq!(values(&out, Mode::Hydro), vec![100.0, 110.0, 115.0]);
    }

    #[test]
    fn test_exactly_one_point_removed_per_violation() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Wind, 1000.0)].into_iter().collect();

        let out = validate_production_diffs(
            series(Mode::Wind, &[500.0, 5000.0, 480.0, 5100.0, 470.0]),
            &max_diffs,
        );
        assert_eq!(values(&out, Mode::Wind), vec![500.0, 480.0, 470.0]);
    }

    #[test]
    fn test_within_bound_all_retained() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Nuclear, 1300.0)].into_iter().collect();

        let input = series(Mode::Nuclear, &[40000.0, 41000.0, 40200.0]);
        let out = validate_production_diffs(input.clone(), &max_diffs);
        assert_eq!(out, input);
    }

    #[test]
    fn test_unchecked_modes_ignored() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Hydro, 1600.0)].into_iter().collect();

        // Solar swings wildly but only hydro is bounded
        let input = series(Mode::Solar, &[0.0, 4000.0, 0.0]);
        let out = validate_production_diffs(input.clone(), &max_diffs);
        assert_eq!(out, input);
    }

    #[test]
    fn test_unreported_mode_skips_comparison() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Hydro, 1600.0)].into_iter().collect();

        let mut points = series(Mode::Hydro, &[1000.0, 1100.0]);
        // Middle point without hydro at all
        let mut gap = ProductionDatapoint::new(ZoneKey::from("FR"), dt(10), "test");
        gap.production.set(Mode::Wind, 300.0);
        points.insert(1, gap);

        let out = validate_production_diffs(points, &max_diffs);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_empty_series() {
        let max_diffs: BTreeMap<Mode, f64> = [(Mode::Hydro, 1600.0)].into_iter().collect();
        assert!(validate_production_diffs(Vec::new(), &max_diffs).is_empty());
    }
}
