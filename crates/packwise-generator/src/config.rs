//! # Generator Configuration
//!
//! Every numeric threshold the pipeline uses, with defaults matching the
//! reference behaviour. All fields are optional in serialized form.

use packwise_core::{PackwiseError, PackwiseResult};
use serde::{Deserialize, Serialize};

/// How oversized categories are trimmed when the list is too long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneStrategy {
    /// Remove the first half of non-essential items in key order.
    #[default]
    IterationOrder,
    /// Remove items from the lowest-priority rule groups first.
    RulePriority,
}

impl PruneStrategy {
    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IterationOrder => "iteration_order",
            Self::RulePriority => "rule_priority",
        }
    }
}

impl std::fmt::Display for PruneStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunables for [`crate::Generator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Pruning starts once the list holds more items than this.
    pub max_total_items: usize,
    /// Only categories with more items than this are pruned.
    pub oversized_category_items: usize,
    /// Trips of at most this many nights are short.
    pub short_trip_max_nights: u32,
    /// Quantity factor for short trips.
    pub short_trip_factor: f64,
    /// Trips of at least this many nights are long.
    pub long_trip_min_nights: u32,
    /// Quantity factor for long trips.
    pub long_trip_factor: f64,
    /// Average temperature assumed without a forecast, in °C.
    pub default_avg_temp: i32,
    pub prune_strategy: PruneStrategy,
    /// Remove the items that cabin-bag alternatives replace.
    pub enforce_carry_on_restrictions: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_total_items: 100,
            oversized_category_items: 10,
            short_trip_max_nights: 2,
            short_trip_factor: 0.8,
            long_trip_min_nights: 14,
            long_trip_factor: 1.2,
            default_avg_temp: 20,
            prune_strategy: PruneStrategy::IterationOrder,
            enforce_carry_on_restrictions: false,
        }
    }
}

impl GeneratorConfig {
    /// Reject out-of-range values.
    pub fn validate(&self) -> PackwiseResult<()> {
        for (name, factor) in [
            ("short_trip_factor", self.short_trip_factor),
            ("long_trip_factor", self.long_trip_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(PackwiseError::Config(format!(
                    "{name} must be a positive number, got {factor}"
                )));
            }
        }
        if self.max_total_items == 0 {
            return Err(PackwiseError::Config(
                "max_total_items must be at least 1".into(),
            ));
        }
        if self.oversized_category_items == 0 {
            return Err(PackwiseError::Config(
                "oversized_category_items must be at least 1".into(),
            ));
        }
        if self.short_trip_max_nights >= self.long_trip_min_nights {
            return Err(PackwiseError::Config(format!(
                "short_trip_max_nights ({}) must be below long_trip_min_nights ({})",
                self.short_trip_max_nights, self.long_trip_min_nights
            )));
        }
        Ok(())
    }

    /// Quantity factor for a trip of `nights` nights.
    pub fn duration_factor(&self, nights: u32) -> f64 {
        if nights <= self.short_trip_max_nights {
            self.short_trip_factor
        } else if nights >= self.long_trip_min_nights {
            self.long_trip_factor
        } else {
            1.0
        }
    }
}
