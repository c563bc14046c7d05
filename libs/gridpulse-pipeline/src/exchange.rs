//! Exchange Normalizer
//!
//! Canonicalizes a directional flow measurement into the fixed
//! sorted-pair + signed net-flow convention: positive means power
//! flowing from the alphabetically-first zone of the pair to the second.

use chrono::{DateTime, Utc};
use gridpulse_model::{ExchangeDatapoint, SortedZonePair, ZoneKey};
use std::collections::BTreeSet;

/// Normalizes exchange measurements into the canonical convention.
///
/// Carries the configured inversion table for sources that report flow
/// with an inherently reversed convention; their sign is flipped once
/// more after the sorted-pair correction.
#[derive(Debug, Clone, Default)]
pub struct ExchangeNormalizer {
    inverted_pairs: BTreeSet<SortedZonePair>,
}

impl ExchangeNormalizer {
    /// Normalizer with an empty inversion table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with the given inversion table.
    pub fn with_inverted_pairs(pairs: impl IntoIterator<Item = SortedZonePair>) -> Self {
        Self {
            inverted_pairs: pairs.into_iter().collect(),
        }
    }

    /// Whether a pair's source reports with a reversed convention.
    pub fn is_inverted(&self, pair: &SortedZonePair) -> bool {
        self.inverted_pairs.contains(pair)
    }

    /// Canonicalize one flow measurement.
    ///
    /// `native_flow` is the flow the source reports from `zone_key1` to
    /// `zone_key2`, in the caller's order. The output sign is relative
    /// to the sorted pair, independent of call order: the flow is
    /// negated iff `zone_key1` is not the alphabetically-first key, and
    /// negated again iff the pair is in the inversion table.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use gridpulse_model::ZoneKey;
    /// use gridpulse_pipeline::ExchangeNormalizer;
    ///
    /// let normalizer = ExchangeNormalizer::new();
    /// let dp = normalizer.normalize(
    ///     &ZoneKey::from("SE"),
    ///     &ZoneKey::from("AX"),
    ///     Some(120.0),
    ///     Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ///     "kraftnat.ax",
    /// );
    /// assert_eq!(dp.sorted_zone_keys.to_string(), "AX->SE");
    /// assert_eq!(dp.net_flow, Some(-120.0));
    /// ```
    pub fn normalize(
        &self,
        zone_key1: &ZoneKey,
        zone_key2: &ZoneKey,
        native_flow: Option<f64>,
        datetime: DateTime<Utc>,
        source: impl Into<String>,
    ) -> ExchangeDatapoint {
        let pair = SortedZonePair::new(zone_key1.clone(), zone_key2.clone());

        let net_flow = native_flow.map(|flow| {
            let mut flow = flow;
            if !pair.is_first(zone_key1) {
                flow = -flow;
            }
            if self.is_inverted(&pair) {
                flow = -flow;
            }
            flow
        });

        ExchangeDatapoint {
            sorted_zone_keys: pair,
            datetime,
            net_flow,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_caller_first_zone_not_sorted_first_negates() {
        // Source reports 120 MW flowing SE -> AX; AX sorts first
        let normalizer = ExchangeNormalizer::new();
        let dp = normalizer.normalize(
            &ZoneKey::from("SE"),
            &ZoneKey::from("AX"),
            Some(120.0),
            dt(),
            "kraftnat.ax",
        );
        assert_eq!(dp.sorted_zone_keys.to_string(), "AX->SE");
        assert_eq!(dp.net_flow, Some(-120.0));
    }

    #[test]
    fn test_caller_order_swap_negates_flow() {
        let normalizer = ExchangeNormalizer::new();
        let a = normalizer.normalize(
            &ZoneKey::from("AX"),
            &ZoneKey::from("SE"),
            Some(120.0),
            dt(),
            "kraftnat.ax",
        );
        let b = normalizer.normalize(
            &ZoneKey::from("SE"),
            &ZoneKey::from("AX"),
            Some(120.0),
            dt(),
            "kraftnat.ax",
        );

        assert_eq!(a.sorted_zone_keys, b.sorted_zone_keys);
        assert_eq!(a.net_flow, Some(120.0));
        assert_eq!(b.net_flow, Some(-120.0));
    }

    #[test]
    fn test_inversion_table_flips_once_more() {
        let pair: SortedZonePair = "CA-SK->US-CENT-SWPP".parse().unwrap();
        let normalizer = ExchangeNormalizer::with_inverted_pairs([pair.clone()]);
        assert!(normalizer.is_inverted(&pair));

        let dp = normalizer.normalize(
            &ZoneKey::from("CA-SK"),
            &ZoneKey::from("US-CENT-SWPP"),
            Some(75.0),
            dt(),
            "eia.gov",
        );
        // Caller order matches sorted order, so only the inversion applies
        assert_eq!(dp.net_flow, Some(-75.0));

        // Swapped caller order: both corrections apply
        let dp = normalizer.normalize(
            &ZoneKey::from("US-CENT-SWPP"),
            &ZoneKey::from("CA-SK"),
            Some(75.0),
            dt(),
            "eia.gov",
        );
        assert_eq!(dp.net_flow, Some(75.0));
    }

    #[test]
    fn test_unreported_flow_passes_through() {
        let normalizer = ExchangeNormalizer::new();
        let dp = normalizer.normalize(
            &ZoneKey::from("FI"),
            &ZoneKey::from("AX"),
            None,
            dt(),
            "kraftnat.ax",
        );
        assert_eq!(dp.net_flow, None);
        assert_eq!(dp.sorted_zone_keys.to_string(), "AX->FI");
    }
}
