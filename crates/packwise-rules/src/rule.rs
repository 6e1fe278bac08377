//! # Conditional and Replacement Rules
//!
//! A [`ConditionalRule`] injects a set of items into one target category when
//! its [`Trigger`] fires. The items come either from a catalog category or
//! from an inline table.
//!
//! A [`ReplacementRule`] removes superseded items once a better item is on
//! the list.

use std::collections::BTreeMap;

use packwise_catalog::{CatalogSection, ItemCatalog};
use packwise_core::{CatalogError, ItemQuantityRule, KeywordSet, PackingList, RuleGroup};
use serde::{Deserialize, Serialize};

use crate::trigger::{Trigger, TripFacts};

// ---------------------------------------------------------------------------
// RuleItems
// ---------------------------------------------------------------------------

/// Where a rule's items come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleItems {
    /// Every item of one catalog category.
    Catalog {
        /// Catalog section.
        section: CatalogSection,
        /// Category key within the section.
        category: String,
    },
    /// Items declared by the rule itself.
    Inline(BTreeMap<String, ItemQuantityRule>),
}

// ---------------------------------------------------------------------------
// ConditionalRule
// ---------------------------------------------------------------------------

/// Inject items into a category when a trigger fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalRule {
    /// Unique id, `<group>.<name>`.
    pub id: String,
    /// Group the rule belongs to. Recorded as the item source.
    pub group: RuleGroup,
    /// When the rule fires.
    pub trigger: Trigger,
    /// Category receiving the items.
    pub target_category: String,
    /// Reason text used in item notes.
    pub reason: String,
    /// The items injected.
    pub items: RuleItems,
}

impl ConditionalRule {
    /// A rule with no items yet. The reason defaults to the last id segment.
    pub fn new(id: &str, group: RuleGroup, trigger: Trigger, target_category: &str) -> Self {
        let reason = id.rsplit('.').next().unwrap_or(id).replace('_', " ");
        Self {
            id: id.to_string(),
            group,
            trigger,
            target_category: target_category.to_string(),
            reason,
            items: RuleItems::Inline(BTreeMap::new()),
        }
    }

    /// Set the reason text.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Take items from a catalog category.
    pub fn from_catalog(mut self, section: CatalogSection, category: &str) -> Self {
        self.items = RuleItems::Catalog {
            section,
            category: category.to_string(),
        };
        self
    }

    /// Declare items inline.
    pub fn with_items(mut self, items: Vec<(&str, ItemQuantityRule)>) -> Self {
        self.items = RuleItems::Inline(
            items
                .into_iter()
                .map(|(name, rule)| (name.to_string(), rule))
                .collect(),
        );
        self
    }

    /// Whether the rule fires for this trip.
    pub fn fires(&self, facts: &TripFacts<'_>) -> bool {
        self.trigger.evaluate(facts)
    }

    /// The rule's items, resolved against `catalog`.
    ///
    /// Returns `None` when a catalog reference dangles.
    pub fn resolve<'c>(
        &'c self,
        catalog: &'c ItemCatalog,
    ) -> Option<&'c BTreeMap<String, ItemQuantityRule>> {
        match &self.items {
            RuleItems::Catalog { section, category } => catalog.category(*section, category),
            RuleItems::Inline(items) => Some(items),
        }
    }

    /// Check the rule against `catalog`.
    pub fn validate(&self, catalog: &ItemCatalog) -> Result<(), CatalogError> {
        if self.target_category.trim().is_empty() {
            return Err(CatalogError::InvalidRule {
                rule_id: self.id.clone(),
                reason: "target category is empty".into(),
            });
        }
        match &self.items {
            RuleItems::Catalog { section, category } => {
                if !catalog.has_category(*section, category) {
                    return Err(CatalogError::UnknownCategory {
                        rule_id: self.id.clone(),
                        section: section.as_str().to_string(),
                        category: category.clone(),
                    });
                }
            }
            RuleItems::Inline(items) => {
                if items.is_empty() {
                    return Err(CatalogError::EmptyRule(self.id.clone()));
                }
                for (name, rule) in items {
                    rule.check().map_err(|reason| CatalogError::InvalidItemRule {
                        section: self.id.clone(),
                        category: self.target_category.clone(),
                        item: name.clone(),
                        reason,
                    })?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ReplacementRule
// ---------------------------------------------------------------------------

/// Remove superseded items once a replacing item is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Unique id.
    pub id: String,
    /// Fragments whose presence triggers the replacement.
    pub replacing: KeywordSet,
    /// Fragments of the items to remove.
    pub replaced: KeywordSet,
}

impl ReplacementRule {
    /// Build a replacement rule.
    pub fn new(id: &str, replacing: &[&str], replaced: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            replacing: KeywordSet::new(replacing),
            replaced: KeywordSet::new(replaced),
        }
    }

    /// Whether a replacing item is on the list.
    pub fn applies(&self, list: &PackingList) -> bool {
        list.contains_match(&self.replacing)
    }

    /// Check the rule is non-empty and cannot remove its own replacing items.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.replacing.is_empty() || self.replaced.is_empty() {
            return Err(CatalogError::EmptyRule(self.id.clone()));
        }
        if let Some(fragment) = self.replacing.iter().find(|f| self.replaced.matches(f)) {
            return Err(CatalogError::InvalidRule {
                rule_id: self.id.clone(),
                reason: format!("replacing item '{fragment}' would remove itself"),
            });
        }
        Ok(())
    }
}
