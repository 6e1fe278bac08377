//! # Rule Groups
//!
//! Every item in a generated list records which rule group injected it.

use serde::{Deserialize, Serialize};

/// The family of rules an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    /// Always-packed essentials.
    Essentials,
    /// Average-temperature clothing bands.
    TemperatureClothing,
    /// Forecast-triggered weather gear.
    Weather,
    /// Per-activity gear.
    Activities,
    /// Trip-type items.
    TripTypes,
    /// Trip-length items.
    Duration,
    /// Free-text notes keyword scan.
    Keywords,
    /// Transportation base items and sub-rules.
    Transportation,
    /// Accommodation base items and sub-rules.
    Accommodation,
    /// Transportation × accommodation combinations.
    Combinations,
}

impl RuleGroup {
    /// Return all rule groups in pipeline order.
    pub fn all() -> &'static [RuleGroup] {
        &[
            Self::Essentials,
            Self::TemperatureClothing,
            Self::Weather,
            Self::Activities,
            Self::TripTypes,
            Self::Duration,
            Self::Keywords,
            Self::Transportation,
            Self::Accommodation,
            Self::Combinations,
        ]
    }

    /// Returns the group identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::TemperatureClothing => "temperature_clothing",
            Self::Weather => "weather",
            Self::Activities => "activities",
            Self::TripTypes => "trip_types",
            Self::Duration => "duration",
            Self::Keywords => "keywords",
            Self::Transportation => "transportation",
            Self::Accommodation => "accommodation",
            Self::Combinations => "combinations",
        }
    }
}

impl std::fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
