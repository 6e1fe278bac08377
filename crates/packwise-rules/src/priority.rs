//! # Rule Priority
//!
//! Declared precedence between rule groups. The default pipeline does not
//! consult it; the `rule_priority` pruning strategy removes items from
//! lower-weighted groups first.

use std::collections::BTreeMap;

use packwise_core::RuleGroup;
use serde::{Deserialize, Serialize};

/// Weight per rule group. Undeclared groups weigh 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulePriority {
    weights: BTreeMap<RuleGroup, u8>,
}

impl RulePriority {
    /// transportation > accommodation > weather > activities > tripTypes >
    /// duration > temperatureClothing.
    pub fn declared() -> Self {
        let weights = [
            (RuleGroup::Transportation, 7),
            (RuleGroup::Accommodation, 6),
            (RuleGroup::Weather, 5),
            (RuleGroup::Activities, 4),
            (RuleGroup::TripTypes, 3),
            (RuleGroup::Duration, 2),
            (RuleGroup::TemperatureClothing, 1),
        ]
        .into_iter()
        .collect();
        Self { weights }
    }

    /// Weight of `group`.
    pub fn weight(&self, group: RuleGroup) -> u8 {
        self.weights.get(&group).copied().unwrap_or(0)
    }

    /// Weight of an item's source group; items without a source weigh 0.
    pub fn weight_of(&self, source: Option<RuleGroup>) -> u8 {
        source.map_or(0, |g| self.weight(g))
    }

    /// Every group with its weight, heaviest first.
    pub fn ranked(&self) -> Vec<(RuleGroup, u8)> {
        let mut ranked: Vec<_> = RuleGroup::all()
            .iter()
            .map(|g| (*g, self.weight(*g)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order() {
        let priority = RulePriority::declared();
        let ranked: Vec<_> = priority.ranked().into_iter().map(|(g, _)| g).collect();
        assert_eq!(ranked[0], RuleGroup::Transportation);
        assert_eq!(ranked[1], RuleGroup::Accommodation);
        assert_eq!(ranked[6], RuleGroup::TemperatureClothing);
    }

    #[test]
    fn undeclared_groups_weigh_zero() {
        let priority = RulePriority::declared();
        assert_eq!(priority.weight(RuleGroup::Keywords), 0);
        assert_eq!(priority.weight(RuleGroup::Essentials), 0);
        assert_eq!(priority.weight_of(None), 0);
        assert_eq!(priority.weight_of(Some(RuleGroup::Weather)), 5);
    }

    #[test]
    fn serializes_as_group_map() {
        let json = serde_json::to_value(RulePriority::declared()).unwrap();
        assert_eq!(json["transportation"], 7);
        assert_eq!(json["temperature_clothing"], 1);
    }
}
