//! Validation Engine
//!
//! Per-datapoint numeric rules applied to raw adapter output before it
//! is trusted downstream. Check order is fixed: required-mode presence
//! first (fail fast), then negative handling, then the floor check on
//! the resulting total.
//!
//! Rejections are recovered locally - the datapoint is dropped and a
//! warning emitted - so partial success is the normal outcome for a
//! batch. Only a negative value beyond the hard multiple of its
//! tolerance aborts the whole fetch.

use crate::config::ValidationRules;
use gridpulse_model::{FetchError, FetchResult, Mode, ModeMix, ProductionDatapoint, ZoneKey};
use tracing::warn;

/// Sources-to-reported-total ratio above which upstream numbers are
/// internally inconsistent rather than merely rounded.
pub const DEFAULT_TOTAL_RATIO_LIMIT: f64 = 1.1;

/// Validate one production datapoint.
///
/// Returns `Ok(Some(..))` for an accepted (possibly adjusted) datapoint,
/// `Ok(None)` for a dropped one, and `Err` only for the fatal
/// inconsistency case.
pub fn validate(
    datapoint: ProductionDatapoint,
    rules: &ValidationRules,
) -> FetchResult<Option<ProductionDatapoint>> {
    let mut datapoint = datapoint;

    // 1. Required modes: absence of a key mode means a broken fetch,
    //    not true zero generation
    for mode in &rules.required {
        if !datapoint.production.contains(*mode) {
            warn!(
                zone = %datapoint.zone_key,
                mode = %mode,
                source = %datapoint.source,
                "Dropping datapoint: required mode not reported"
            );
            return Ok(None);
        }
    }

    // 2. Negative handling
    if rules.remove_negative {
        let negatives: Vec<(Mode, f64)> = datapoint
            .production
            .iter()
            .filter(|(_, v)| *v < 0.0)
            .collect();

        for (mode, value) in negatives {
            // Modes with a storage concept are exempt from clamping:
            // any negative value is charging, not sensor noise
            if mode.has_storage() {
                datapoint.production.remove(mode);
                datapoint.storage.add(mode, -value);
                continue;
            }

            let tolerance = rules.negative_tolerance(mode);

            if value >= tolerance {
                // Sensor noise: clamp to reported zero
                datapoint.production.set(mode, 0.0);
            } else {
                let hard_limit = tolerance * rules.hard_fail_multiple;
                if value < hard_limit {
                    return Err(FetchError::inconsistent(
                        datapoint.zone_key.as_str(),
                        format!(
                            "{} reports {} MW, beyond the hard limit of {} MW",
                            mode, value, hard_limit
                        ),
                    ));
                }
                warn!(
                    zone = %datapoint.zone_key,
                    mode = %mode,
                    value,
                    tolerance,
                    "Dropping datapoint: negative value beyond tolerance on a mode without storage"
                );
                return Ok(None);
            }
        }
    }

    // 3. Floor check on the adjusted total
    if let Some(floor) = rules.floor {
        let total = datapoint.production.total();
        if total < floor {
            warn!(
                zone = %datapoint.zone_key,
                total,
                floor,
                "Dropping datapoint: total production below floor"
            );
            return Ok(None);
        }
    }

    Ok(Some(datapoint))
}

/// Validate a batch, dropping rejected datapoints and keeping the rest.
pub fn validate_all(
    datapoints: Vec<ProductionDatapoint>,
    rules: &ValidationRules,
) -> FetchResult<Vec<ProductionDatapoint>> {
    let mut accepted = Vec::with_capacity(datapoints.len());
    for datapoint in datapoints {
        if let Some(datapoint) = validate(datapoint, rules)? {
            accepted.push(datapoint);
        }
    }
    Ok(accepted)
}

/// Reconcile per-mode values against a separately reported total.
///
/// Returns the `unknown` contribution: the part of the reported total
/// the per-mode values do not account for (never negative). When the
/// per-mode sum exceeds the reported total by more than `ratio_limit`,
/// the upstream numbers are inconsistent and the fetch fails.
///
/// # Examples
/// ```
/// use gridpulse_model::{Mode, ModeMix, ZoneKey};
/// use gridpulse_pipeline::{unknown_from_total, DEFAULT_TOTAL_RATIO_LIMIT};
///
/// let mix: ModeMix = [
///     (Mode::Oil, 100.0),
///     (Mode::Wind, 50.0),
///     (Mode::Solar, 20.0),
///     (Mode::Biomass, 5.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let unknown =
///     unknown_from_total(&mix, 180.0, &ZoneKey::from("AW"), DEFAULT_TOTAL_RATIO_LIMIT).unwrap();
/// assert_eq!(unknown, 5.0);
/// ```
pub fn unknown_from_total(
    mix: &ModeMix,
    reported_total: f64,
    zone: &ZoneKey,
    ratio_limit: f64,
) -> FetchResult<f64> {
    let sources_total = mix.total();

    if sources_total > 0.0 && (reported_total <= 0.0 || sources_total / reported_total > ratio_limit)
    {
        return Err(FetchError::inconsistent(
            zone.as_str(),
            format!(
                "fuel sources add up to {} MW but reported total generation {} MW is lower",
                sources_total, reported_total
            ),
        ));
    }

    let missing = reported_total - sources_total;
    Ok(if missing > 0.0 { missing } else { 0.0 })
}
