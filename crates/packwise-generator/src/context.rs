//! Read-only inputs shared by every pipeline stage.

use packwise_catalog::ItemCatalog;
use packwise_core::{GeneratedItem, PackingList, TripProfile};
use packwise_rules::{ConditionalRule, RuleSet, TripFacts};

use crate::config::GeneratorConfig;

/// Everything a stage may read.
#[derive(Debug)]
pub struct StageContext<'a> {
    pub trip: &'a TripProfile,
    pub facts: TripFacts<'a>,
    pub catalog: &'a ItemCatalog,
    pub rules: &'a RuleSet,
    pub config: &'a GeneratorConfig,
}

impl<'a> StageContext<'a> {
    /// Assemble a context for one generation.
    pub fn new(
        trip: &'a TripProfile,
        catalog: &'a ItemCatalog,
        rules: &'a RuleSet,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            trip,
            facts: TripFacts::derive(trip),
            catalog,
            rules,
            config,
        }
    }

    /// Inject every rule in `rules` that fires, in order.
    ///
    /// Returns the number of rules that fired.
    pub fn apply_rules(&self, list: &mut PackingList, rules: &[ConditionalRule]) -> usize {
        let mut fired = 0;
        for rule in rules.iter().filter(|r| r.fires(&self.facts)) {
            self.inject(list, rule);
            fired += 1;
        }
        fired
    }

    /// Write a rule's items into its target category.
    ///
    /// A dangling catalog reference cannot happen with a validated rule set;
    /// it fails debug builds and is logged and skipped otherwise.
    pub fn inject(&self, list: &mut PackingList, rule: &ConditionalRule) {
        let resolved = rule.resolve(self.catalog);
        debug_assert!(
            resolved.is_some(),
            "rule {} references a missing catalog category",
            rule.id
        );
        let Some(items) = resolved else {
            tracing::error!(rule = %rule.id, "rule references a missing catalog category");
            return;
        };
        for (name, item_rule) in items {
            let item =
                GeneratedItem::from_rule(item_rule, self.trip.nights, &rule.reason, rule.group);
            list.insert(&rule.target_category, name, item);
        }
        tracing::trace!(rule = %rule.id, items = items.len(), "rule fired");
    }
}
