//! Zone identifiers
//!
//! A `ZoneKey` names a grid area (a country or sub-national balancing
//! authority). A `SortedZonePair` is the canonical representation of an
//! unordered pair of zones, used to key cross-border exchanges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier for a grid area (e.g. `"FR"`, `"US-CAR-SCEG"`).
///
/// Zone keys are globally unique within configuration and compare
/// lexicographically, which is what the sorted-pair convention relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneKey(String);

impl ZoneKey {
    /// Create a new zone key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZoneKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ZoneKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ZoneKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Zone key cannot be empty".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

/// Canonical `"A->B"` pair of zone keys, alphabetically ordered.
///
/// The pair string is always reproducible by sorting the two keys,
/// regardless of the order the caller supplied them in.
///
/// # Examples
/// ```
/// use gridpulse_model::{SortedZonePair, ZoneKey};
///
/// let a = SortedZonePair::new(ZoneKey::from("SE"), ZoneKey::from("AX"));
/// let b = SortedZonePair::new(ZoneKey::from("AX"), ZoneKey::from("SE"));
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "AX->SE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SortedZonePair {
    first: ZoneKey,
    second: ZoneKey,
}

impl SortedZonePair {
    /// Build the canonical pair from two zone keys, in any order.
    pub fn new(a: ZoneKey, b: ZoneKey) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The alphabetically-first zone of the pair.
    pub fn first(&self) -> &ZoneKey {
        &self.first
    }

    /// The alphabetically-second zone of the pair.
    pub fn second(&self) -> &ZoneKey {
        &self.second
    }

    /// Whether `zone` is one of the two zones in the pair.
    pub fn contains(&self, zone: &ZoneKey) -> bool {
        &self.first == zone || &self.second == zone
    }

    /// Whether `zone` is the alphabetically-first zone.
    ///
    /// The exchange sign convention hangs off this: a positive net flow
    /// means power moving from the first zone to the second.
    pub fn is_first(&self, zone: &ZoneKey) -> bool {
        &self.first == zone
    }
}

impl fmt::Display for SortedZonePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.first, self.second)
    }
}

impl From<SortedZonePair> for String {
    fn from(pair: SortedZonePair) -> Self {
        pair.to_string()
    }
}

impl FromStr for SortedZonePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split("->");
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!(
                "Invalid zone pair '{}': expected exactly one '->' separator",
                s
            ));
        };
        if a.is_empty() || b.is_empty() {
            return Err(format!("Invalid zone pair '{}': empty zone key", s));
        }
        Ok(Self::new(ZoneKey::from(a), ZoneKey::from(b)))
    }
}

impl TryFrom<String> for SortedZonePair {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
