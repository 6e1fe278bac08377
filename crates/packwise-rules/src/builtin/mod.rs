//! Built-in rule tables.

mod conditions;
mod resolution;
mod temperature;
mod travel;

use packwise_core::ItemQuantityRule;

pub(crate) use conditions::{activities, duration, keywords, trip_types, weather};
pub(crate) use resolution::{accommodation_policies, carry_on, conflicts, replacements};
pub(crate) use temperature::bands;
pub(crate) use travel::{accommodation, combinations, transportation};

/// Category receiving temperature-band clothing.
pub(crate) const CLOTHES: &str = "clothes";

/// Category receiving cabin-bag-only alternatives.
pub(crate) const CARRY_ON_ALTERNATIVES: &str = "carry_on_alternatives";

fn single() -> ItemQuantityRule {
    ItemQuantityRule::single()
}

fn per_night(multiplier: f64) -> ItemQuantityRule {
    ItemQuantityRule::per_night(multiplier)
}
