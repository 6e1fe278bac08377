//! # Packing List
//!
//! [`PackingList`] maps category keys to item names to [`GeneratedItem`]s.
//! Both levels are `BTreeMap`s: iteration order is the sorted key order, so
//! every stage that walks the list ("first half by iteration order") is
//! deterministic.
//!
//! ## Invariant
//!
//! A list returned by the generator never contains an empty category.
//! Mutating helpers here may leave empty categories behind;
//! [`PackingList::drop_empty_categories`] restores the invariant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::group::RuleGroup;
use crate::item::{ItemQuantityRule, QuantityLimits};
use crate::matching::KeywordSet;

/// One entry in a packing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedItem {
    /// Units to pack, always at least 1.
    pub quantity: u32,
    /// Mandatory regardless of quantity.
    pub essential: bool,
    /// Checked off by the traveller. Never set by the generator.
    #[serde(default)]
    pub completed: bool,
    /// Human-readable justification.
    #[serde(default)]
    pub notes: String,
    /// Added by the traveller rather than a rule. Never set by the generator.
    #[serde(default)]
    pub custom: bool,
    /// The rule group that injected the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RuleGroup>,
    /// Bounds declared by the producing rule.
    #[serde(skip)]
    pub limits: QuantityLimits,
}

impl GeneratedItem {
    /// Materialize a catalog or rule entry for a trip of `nights` nights.
    pub fn from_rule(
        rule: &ItemQuantityRule,
        nights: u32,
        reason: &str,
        source: RuleGroup,
    ) -> Self {
        Self {
            quantity: rule.quantity_for(nights),
            essential: rule.essential,
            completed: false,
            notes: rule.note(reason),
            custom: false,
            source: Some(source),
            limits: rule.limits(),
        }
    }

    /// Fold another injection of the same item into this one.
    ///
    /// The larger quantity wins, essential flags are OR-ed, and the first
    /// note and source are kept.
    pub fn merge(&mut self, other: GeneratedItem) {
        self.quantity = self.quantity.max(other.quantity);
        self.essential |= other.essential;
        self.limits = self.limits.union(other.limits);
        if self.notes.is_empty() {
            self.notes = other.notes;
        }
        if self.source.is_none() {
            self.source = other.source;
        }
    }
}

/// Items of one category, keyed by item name.
pub type CategoryItems = BTreeMap<String, GeneratedItem>;

/// The category-partitioned output of generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackingList {
    categories: BTreeMap<String, CategoryItems>,
}

impl PackingList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, merging with an existing entry of the same name.
    pub fn insert(&mut self, category: &str, name: &str, item: GeneratedItem) {
        let items = self.categories.entry(category.to_string()).or_default();
        match items.get_mut(name) {
            Some(existing) => existing.merge(item),
            None => {
                items.insert(name.to_string(), item);
            }
        }
    }

    /// Look up one item.
    pub fn get(&self, category: &str, name: &str) -> Option<&GeneratedItem> {
        self.categories.get(category)?.get(name)
    }

    /// Look up one category.
    pub fn category(&self, category: &str) -> Option<&CategoryItems> {
        self.categories.get(category)
    }

    /// Mutable access to one category.
    pub fn category_mut(&mut self, category: &str) -> Option<&mut CategoryItems> {
        self.categories.get_mut(category)
    }

    /// Iterate categories in key order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryItems)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate categories mutably in key order.
    pub fn categories_mut(&mut self) -> impl Iterator<Item = (&str, &mut CategoryItems)> {
        self.categories.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate every item as `(category, name, item)`.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str, &GeneratedItem)> {
        self.categories.iter().flat_map(|(category, items)| {
            items
                .iter()
                .map(move |(name, item)| (category.as_str(), name.as_str(), item))
        })
    }

    /// Iterate every item mutably.
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut GeneratedItem> {
        self.categories.values_mut().flat_map(|items| items.values_mut())
    }

    /// Number of categories, including empty ones.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of items across all categories.
    pub fn total_items(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// Whether any item name anywhere contains one of `keywords`.
    pub fn contains_match(&self, keywords: &KeywordSet) -> bool {
        self.items().any(|(_, name, _)| keywords.matches(name))
    }

    /// Remove every item whose name contains one of `keywords`.
    ///
    /// Returns the removed `(category, name)` pairs in iteration order.
    pub fn remove_matching(&mut self, keywords: &KeywordSet) -> Vec<(String, String)> {
        let mut removed = Vec::new();
        if keywords.is_empty() {
            return removed;
        }
        for (category, items) in self.categories.iter_mut() {
            items.retain(|name, _| {
                if keywords.matches(name) {
                    removed.push((category.clone(), name.clone()));
                    false
                } else {
                    true
                }
            });
        }
        removed
    }

    /// Drop categories left without items. Returns how many were dropped.
    pub fn drop_empty_categories(&mut self) -> usize {
        let before = self.categories.len();
        self.categories.retain(|_, items| !items.is_empty());
        before - self.categories.len()
    }

    /// Whether no category is empty.
    pub fn has_no_empty_categories(&self) -> bool {
        self.categories.values().all(|items| !items.is_empty())
    }
}
