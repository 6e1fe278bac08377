//! # Temperature Bands
//!
//! The rounded average forecast temperature selects exactly one
//! [`TemperatureBand`]; the band's clothing is injected into `clothes`.
//!
//! | Band     | Average (°C) |
//! |----------|--------------|
//! | freezing | < 0          |
//! | cold     | [0, 10)      |
//! | mild     | [10, 20]     |
//! | warm     | (20, 30]     |
//! | hot      | > 30         |

use std::collections::BTreeMap;

use packwise_core::ItemQuantityRule;
use serde::{Deserialize, Serialize};

/// Average-temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// All bands from coldest to hottest.
    pub fn all() -> &'static [TemperatureBand] {
        &[
            Self::Freezing,
            Self::Cold,
            Self::Mild,
            Self::Warm,
            Self::Hot,
        ]
    }

    /// The band containing `avg_temp`.
    pub fn classify(avg_temp: i32) -> Self {
        match avg_temp {
            t if t < 0 => Self::Freezing,
            t if t < 10 => Self::Cold,
            t if t <= 20 => Self::Mild,
            t if t <= 30 => Self::Warm,
            _ => Self::Hot,
        }
    }

    /// Returns the lowercase band name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Mild => "mild",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }

    /// Reason text attached to this band's items.
    pub fn reason(&self, avg_temp: i32) -> String {
        format!("{} weather, avg {avg_temp}°C", self.as_str())
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clothing injected for one band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandRule {
    /// The band this rule serves.
    pub band: TemperatureBand,
    /// Items keyed by name.
    pub items: BTreeMap<String, ItemQuantityRule>,
}

impl BandRule {
    /// Build a band rule from `(name, rule)` pairs.
    pub fn new(band: TemperatureBand, items: Vec<(&str, ItemQuantityRule)>) -> Self {
        Self {
            band,
            items: items
                .into_iter()
                .map(|(name, rule)| (name.to_string(), rule))
                .collect(),
        }
    }

    /// Rule id used in validation errors.
    pub fn id(&self) -> String {
        format!("temperature.{}", self.band)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Exactly one band contains any average, and bands are ordered.
        #[test]
        fn bands_are_monotonic(a in -60i32..60, b in -60i32..60) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(TemperatureBand::classify(lo) <= TemperatureBand::classify(hi));
        }
    }
}
