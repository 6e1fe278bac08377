//! Built-in catalog content.
//!
//! Each submodule returns one section. Item names are matched by substring
//! during conflict and replacement resolution; see the crate docs.

mod activities;
mod essentials;
mod seasonal;
mod special_needs;
mod stays;
mod transport;

use packwise_core::ItemQuantityRule;

use crate::catalog::{CatalogCategory, SectionItems};

pub(crate) use activities::activities;
pub(crate) use essentials::essentials;
pub(crate) use seasonal::seasonal;
pub(crate) use special_needs::special_needs;
pub(crate) use stays::accommodation;
pub(crate) use transport::transportation;

/// Exactly one unit.
fn single() -> ItemQuantityRule {
    ItemQuantityRule::single()
}

/// Units per night.
fn per_night(multiplier: f64) -> ItemQuantityRule {
    ItemQuantityRule::per_night(multiplier)
}

fn category(items: Vec<(&str, ItemQuantityRule)>) -> CatalogCategory {
    let len = items.len();
    let category: CatalogCategory = items
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect();
    debug_assert_eq!(category.len(), len, "duplicate item name in category");
    category
}

fn section(categories: Vec<(&str, CatalogCategory)>) -> SectionItems {
    categories
        .into_iter()
        .map(|(key, items)| (key.to_string(), items))
        .collect()
}
