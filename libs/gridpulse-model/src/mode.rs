//! Generation modes and mode-keyed mix maps
//!
//! A `Mode` is a generation or storage fuel category. A `ModeMix` maps
//! modes to MW values; a mode that is *absent* from the map means
//! "unknown/unreported", which is semantically distinct from a present
//! `0.0` ("reported zero").

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Generation/storage fuel category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Biomass,
    Coal,
    Gas,
    Geothermal,
    Hydro,
    Nuclear,
    Oil,
    Solar,
    Wind,
    Unknown,
}

impl Mode {
    /// All modes, in canonical order.
    pub const ALL: [Mode; 10] = [
        Mode::Biomass,
        Mode::Coal,
        Mode::Gas,
        Mode::Geothermal,
        Mode::Hydro,
        Mode::Nuclear,
        Mode::Oil,
        Mode::Solar,
        Mode::Wind,
        Mode::Unknown,
    ];

    /// The mode name as it appears in configuration and serialized mixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Biomass => "biomass",
            Mode::Coal => "coal",
            Mode::Gas => "gas",
            Mode::Geothermal => "geothermal",
            Mode::Hydro => "hydro",
            Mode::Nuclear => "nuclear",
            Mode::Oil => "oil",
            Mode::Solar => "solar",
            Mode::Wind => "wind",
            Mode::Unknown => "unknown",
        }
    }

    /// Whether this mode has a storage concept.
    ///
    /// A legitimately negative production value on such a mode is
    /// storage charging (hydro pumped storage), not a sensor fault.
    pub fn has_storage(&self) -> bool {
        matches!(self, Mode::Hydro)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown mode: '{}'", s))
    }
}

/// Mode-keyed map of MW values.
///
/// Used for both production mixes and storage maps. Absence of a mode
/// means the value is unknown/unreported; callers must not conflate that
/// with a reported `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeMix {
    values: BTreeMap<Mode, f64>,
}

impl ModeMix {
    /// Empty mix (every mode unreported).
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a value for a mode, replacing any previous value.
    pub fn set(&mut self, mode: Mode, value: f64) {
        self.values.insert(mode, value);
    }

    /// Add to a mode's value, treating an unreported mode as absent
    /// (the first contribution reports it).
    pub fn add(&mut self, mode: Mode, value: f64) {
        *self.values.entry(mode).or_insert(0.0) += value;
    }

    /// The reported value for a mode, or `None` when unreported.
    pub fn get(&self, mode: Mode) -> Option<f64> {
        self.values.get(&mode).copied()
    }

    /// Remove a mode's value, returning it if it was reported.
    pub fn remove(&mut self, mode: Mode) -> Option<f64> {
        self.values.remove(&mode)
    }

    /// Whether the mode has a reported value.
    pub fn contains(&self, mode: Mode) -> bool {
        self.values.contains_key(&mode)
    }

    /// Whether no mode is reported.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of reported modes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Sum of all reported values. Unreported modes contribute nothing.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Scale every reported value by `factor`.
    ///
    /// Used when a physical asset is split across reporting zones by a
    /// configured ownership percentage.
    pub fn scale(&mut self, factor: f64) {
        for value in self.values.values_mut() {
            *value *= factor;
        }
    }

    /// Iterate over reported `(mode, value)` entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }

    /// Iterate over the reported modes in canonical order.
    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.values.keys().copied()
    }
}

impl FromIterator<(Mode, f64)> for ModeMix {
    fn from_iter<I: IntoIterator<Item = (Mode, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
