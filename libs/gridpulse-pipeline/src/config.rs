//! Quality thresholds configuration
//!
//! Floor values, negative tolerances, required modes, and diff bounds
//! are empirically tuned per data source and retuned often, so they are
//! externally supplied configuration rather than literals. The shipped
//! defaults reflect the tolerances the upstream feeds have historically
//! needed.

use gridpulse_model::{Mode, SortedZonePair, ZoneKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-datapoint validation rules for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum acceptable sum of all reported production values, in MW.
    /// A total below the floor is a sensor/reporting glitch and the
    /// datapoint is dropped.
    pub floor: Option<f64>,

    /// Whether to apply negative-value handling at all.
    pub remove_negative: bool,

    /// Modes that must be present (reported, non-null) for the datapoint
    /// to be trusted; a missing one indicates a broken fetch rather than
    /// true zero generation.
    pub required: Vec<Mode>,

    /// Per-mode negative tolerance in MW (negative numbers). A value
    /// between the tolerance and zero is sensor noise and clamps to zero.
    pub negative_tolerances: BTreeMap<Mode, f64>,

    /// Tolerance for modes without an entry in `negative_tolerances`.
    pub default_negative_tolerance: f64,

    /// A negative value worse than this multiple of the mode's tolerance
    /// is no longer a droppable glitch but an inconsistency that aborts
    /// the fetch.
    pub hard_fail_multiple: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            floor: None,
            remove_negative: true,
            required: Vec::new(),
            negative_tolerances: [
                (Mode::Coal, -50.0),
                (Mode::Gas, -20.0),
                (Mode::Solar, -100.0),
                (Mode::Wind, -20.0),
                (Mode::Unknown, -50.0),
            ]
            .into_iter()
            .collect(),
            default_negative_tolerance: -10.0,
            hard_fail_multiple: 10.0,
        }
    }
}

impl ValidationRules {
    /// The negative tolerance for a mode, falling back to the default.
    pub fn negative_tolerance(&self, mode: Mode) -> f64 {
        self.negative_tolerances
            .get(&mode)
            .copied()
            .unwrap_or(self.default_negative_tolerance)
    }
}

/// Zone-specific quality settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneQuality {
    /// Validation rules overriding the configuration-wide defaults.
    pub rules: Option<ValidationRules>,

    /// Maximum plausible change per mode between consecutive samples,
    /// in MW. Modes without an entry are not diff-checked.
    pub max_diffs: BTreeMap<Mode, f64>,
}

/// Quality configuration for the whole pipeline.
///
/// Loaded from `quality.yaml` (or TOML/JSON) through [`common::config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Rules applied to zones without an override.
    pub defaults: ValidationRules,

    /// Per-zone overrides and diff bounds.
    pub zones: BTreeMap<ZoneKey, ZoneQuality>,

    /// Exchange pairs whose sources report flow with an inherently
    /// reversed convention; the normalizer flips their sign once more.
    pub reverse_exchanges: Vec<SortedZonePair>,
}

impl QualityConfig {
    /// Load from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, common::ConfigError> {
        common::load_config_from_file(path)
    }

    /// Validation rules for a zone, falling back to the defaults.
    pub fn rules_for(&self, zone: &ZoneKey) -> &ValidationRules {
        self.zones
            .get(zone)
            .and_then(|z| z.rules.as_ref())
            .unwrap_or(&self.defaults)
    }

    /// Diff bounds for a zone. Empty when the zone has none configured.
    pub fn max_diffs_for(&self, zone: &ZoneKey) -> &BTreeMap<Mode, f64> {
        static EMPTY: BTreeMap<Mode, f64> = BTreeMap::new();
        self.zones.get(zone).map_or(&EMPTY, |z| &z.max_diffs)
    }
}
