//! # Rule Set
//!
//! [`RuleSet`] bundles every rule table the generator consults. Like the
//! catalog it is built once, validated against a catalog with
//! [`RuleSet::validate_against`], and then only read.

use std::collections::{BTreeMap, BTreeSet};

use packwise_catalog::ItemCatalog;
use packwise_core::{Accommodation, CatalogError, RuleGroup, TripProfile};
use serde::{Deserialize, Serialize};

use crate::policy::{AccommodationPolicy, CarryOnRestriction, ConflictRule};
use crate::priority::RulePriority;
use crate::rule::{ConditionalRule, ReplacementRule};
use crate::temperature::{BandRule, TemperatureBand};

/// Every rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Category receiving temperature-band clothing.
    pub temperature_category: String,
    /// One rule per temperature band.
    pub temperature_clothing: Vec<BandRule>,
    pub weather: Vec<ConditionalRule>,
    pub activities: Vec<ConditionalRule>,
    pub trip_types: Vec<ConditionalRule>,
    pub duration: Vec<ConditionalRule>,
    /// Notes keyword table.
    pub keywords: Vec<ConditionalRule>,
    pub transportation: Vec<ConditionalRule>,
    pub accommodation: Vec<ConditionalRule>,
    pub combinations: Vec<ConditionalRule>,
    pub replacements: Vec<ReplacementRule>,
    pub conflicts: Vec<ConflictRule>,
    pub accommodation_policies: Vec<AccommodationPolicy>,
    pub carry_on: CarryOnRestriction,
    pub priority: RulePriority,
}

impl RuleSet {
    /// The built-in rule set. Validate it against a catalog before use.
    pub fn builtin() -> Self {
        use crate::builtin;
        Self {
            temperature_category: builtin::CLOTHES.to_string(),
            temperature_clothing: builtin::bands(),
            weather: builtin::weather(),
            activities: builtin::activities(),
            trip_types: builtin::trip_types(),
            duration: builtin::duration(),
            keywords: builtin::keywords(),
            transportation: builtin::transportation(),
            accommodation: builtin::accommodation(),
            combinations: builtin::combinations(),
            replacements: builtin::replacements(),
            conflicts: builtin::conflicts(),
            accommodation_policies: builtin::accommodation_policies(),
            carry_on: builtin::carry_on(),
            priority: RulePriority::declared(),
        }
    }

    /// Conditional rules of one group, in declaration order.
    ///
    /// Essentials and temperature clothing are not conditional rules and
    /// yield an empty slice.
    pub fn group(&self, group: RuleGroup) -> &[ConditionalRule] {
        match group {
            RuleGroup::Essentials | RuleGroup::TemperatureClothing => &[],
            RuleGroup::Weather => &self.weather,
            RuleGroup::Activities => &self.activities,
            RuleGroup::TripTypes => &self.trip_types,
            RuleGroup::Duration => &self.duration,
            RuleGroup::Keywords => &self.keywords,
            RuleGroup::Transportation => &self.transportation,
            RuleGroup::Accommodation => &self.accommodation,
            RuleGroup::Combinations => &self.combinations,
        }
    }

    /// Every conditional rule, group by group.
    pub fn conditional_rules(&self) -> impl Iterator<Item = &ConditionalRule> {
        RuleGroup::all().iter().flat_map(move |g| self.group(*g).iter())
    }

    /// The clothing rule for `band`.
    pub fn band_rule(&self, band: TemperatureBand) -> Option<&BandRule> {
        self.temperature_clothing.iter().find(|r| r.band == band)
    }

    /// The policy for the chosen accommodation, if any.
    pub fn policy_for(&self, accommodation: Option<Accommodation>) -> Option<&AccommodationPolicy> {
        let accommodation = accommodation?;
        self.accommodation_policies
            .iter()
            .find(|p| p.accommodation == accommodation)
    }

    /// Conflict rules that apply to this trip.
    pub fn conflicts_for<'a>(
        &'a self,
        trip: &'a TripProfile,
    ) -> impl Iterator<Item = &'a ConflictRule> + 'a {
        self.conflicts.iter().filter(move |c| c.applies(trip))
    }

    /// Rule ids per group, for listings.
    pub fn ids_by_group(&self) -> BTreeMap<RuleGroup, Vec<String>> {
        let mut ids: BTreeMap<RuleGroup, Vec<String>> = BTreeMap::new();
        ids.insert(
            RuleGroup::TemperatureClothing,
            self.temperature_clothing.iter().map(BandRule::id).collect(),
        );
        for rule in self.conditional_rules() {
            ids.entry(rule.group).or_default().push(rule.id.clone());
        }
        ids
    }

    /// Number of conditional and band rules.
    pub fn rule_count(&self) -> usize {
        self.temperature_clothing.len() + self.conditional_rules().count()
    }

    /// Check the rule set against `catalog`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownCategory`] for a dangling catalog reference.
    /// - [`CatalogError::DuplicateRuleId`] when two rules share an id.
    /// - [`CatalogError::InvalidItemRule`] for an invalid inline item.
    /// - [`CatalogError::EmptyRule`] / [`CatalogError::InvalidRule`] for
    ///   structurally unusable rules.
    pub fn validate_against(&self, catalog: &ItemCatalog) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();

        for band in TemperatureBand::all() {
            let rule = self.band_rule(*band).ok_or_else(|| CatalogError::InvalidRule {
                rule_id: format!("temperature.{band}"),
                reason: "no clothing declared for band".into(),
            })?;
            if !seen.insert(rule.id()) {
                return Err(CatalogError::DuplicateRuleId(rule.id()));
            }
            if rule.items.is_empty() {
                return Err(CatalogError::EmptyRule(rule.id()));
            }
            for (name, item) in &rule.items {
                item.check().map_err(|reason| CatalogError::InvalidItemRule {
                    section: rule.id(),
                    category: self.temperature_category.clone(),
                    item: name.clone(),
                    reason,
                })?;
            }
        }

        for group in RuleGroup::all() {
            for rule in self.group(*group) {
                if rule.group != *group {
                    return Err(CatalogError::InvalidRule {
                        rule_id: rule.id.clone(),
                        reason: format!("listed under {group} but tagged {}", rule.group),
                    });
                }
                if !seen.insert(rule.id.clone()) {
                    return Err(CatalogError::DuplicateRuleId(rule.id.clone()));
                }
                rule.validate(catalog)?;
            }
        }

        for replacement in &self.replacements {
            if !seen.insert(replacement.id.clone()) {
                return Err(CatalogError::DuplicateRuleId(replacement.id.clone()));
            }
            replacement.validate()?;
        }

        for policy in &self.accommodation_policies {
            policy.validate()?;
        }

        self.validate_carry_on(catalog)?;

        tracing::debug!(
            rules = self.rule_count(),
            replacements = self.replacements.len(),
            conflicts = self.conflicts.len(),
            "rule set validated"
        );
        Ok(())
    }

    fn validate_carry_on(&self, catalog: &ItemCatalog) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRule {
            rule_id: "carry_on".into(),
            reason,
        };
        let target = &self.carry_on.alternatives_category;
        let alternatives: Vec<_> = self
            .transportation
            .iter()
            .filter(|r| &r.target_category == target)
            .collect();
        if alternatives.is_empty() {
            return Err(invalid(format!("no transportation rule targets '{target}'")));
        }
        for rule in alternatives {
            if let Some(items) = rule.resolve(catalog) {
                if let Some(name) = items.keys().find(|n| self.carry_on.removals.matches(n)) {
                    return Err(invalid(format!(
                        "alternative '{name}' matches the carry-on removals"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleItems;
    use packwise_catalog::CatalogSection;
    use packwise_core::{
        Activity, ItemQuantityRule, KeywordSet, TransportOption, Transportation, TripContext,
        TripType, Vocabulary,
    };

    fn catalog() -> ItemCatalog {
        ItemCatalog::builtin().unwrap()
    }

    #[test]
    fn builtin_rule_set_validates() {
        RuleSet::builtin().validate_against(&catalog()).unwrap();
    }

    #[test]
    fn every_activity_and_trip_type_has_a_rule() {
        let rules = RuleSet::builtin();
        for activity in Activity::all() {
            let id = format!("activity.{}", activity.as_str());
            assert!(rules.activities.iter().any(|r| r.id == id), "missing {id}");
        }
        for trip_type in TripType::all() {
            let id = format!("trip_type.{}", trip_type.as_str());
            assert!(rules.trip_types.iter().any(|r| r.id == id), "missing {id}");
        }
    }

    #[test]
    fn every_band_has_clothing() {
        let rules = RuleSet::builtin();
        for band in TemperatureBand::all() {
            assert!(rules.band_rule(*band).is_some());
        }
    }

    #[test]
    fn notes_keyword_table_is_complete() {
        let rules = RuleSet::builtin();
        let words: BTreeSet<String> = rules
            .keywords
            .iter()
            .filter_map(|r| match &r.trigger {
                crate::Trigger::NotesMention(word) => Some(word.clone()),
                _ => None,
            })
            .collect();
        for word in [
            "wedding",
            "conference",
            "baby",
            "formal",
            "rental car",
            "long flight",
            "medication",
            "gym",
        ] {
            assert!(words.contains(word), "missing keyword {word}");
        }
    }

    #[test]
    fn dangling_reference_is_reported() {
        let mut rules = RuleSet::builtin();
        rules.activities[0].items = RuleItems::Catalog {
            section: CatalogSection::Activities,
            category: "base_jumping".into(),
        };
        let err = rules.validate_against(&catalog()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut rules = RuleSet::builtin();
        let copy = rules.weather[0].clone();
        rules.weather.push(copy);
        let err = rules.validate_against(&catalog()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateRuleId("weather.cold".into()));
    }

    #[test]
    fn misfiled_rule_is_reported() {
        let mut rules = RuleSet::builtin();
        let mut stray = rules.weather[0].clone();
        stray.id = "weather.stray".into();
        rules.duration.push(stray);
        assert!(matches!(
            rules.validate_against(&catalog()),
            Err(CatalogError::InvalidRule { .. })
        ));
    }

    #[test]
    fn carry_on_alternatives_must_survive_removals() {
        let mut rules = RuleSet::builtin();
        rules.carry_on.removals = KeywordSet::new(["bottles"]);
        assert!(matches!(
            rules.validate_against(&catalog()),
            Err(CatalogError::InvalidRule { .. })
        ));
    }

    #[test]
    fn invalid_band_item_is_reported() {
        let mut rules = RuleSet::builtin();
        rules.temperature_clothing[0]
            .items
            .insert("Broken".into(), ItemQuantityRule::per_night(1.0).with_min(9));
        assert!(matches!(
            rules.validate_against(&catalog()),
            Err(CatalogError::InvalidItemRule { .. })
        ));
    }

    #[test]
    fn policy_lookup_by_accommodation() {
        let rules = RuleSet::builtin();
        let hotel = rules.policy_for(Some(Accommodation::Hotel)).unwrap();
        assert!(hotel.skips("Bath towel"));
        assert!(rules.policy_for(Some(Accommodation::Airbnb)).is_none());
        assert!(rules.policy_for(None).is_none());
    }

    #[test]
    fn conflicts_for_follow_trip_choices() {
        let rules = RuleSet::builtin();
        let (trip, _) = TripProfile::resolve(
            &TripContext::new(4, "adventure")
                .with_transportation("car", &[])
                .with_accommodation("camping", &[]),
        )
        .unwrap();
        let keywords: Vec<&str> = rules
            .conflicts_for(&trip)
            .flat_map(|c| c.keywords.iter())
            .collect();
        assert_eq!(keywords, ["flight", "boarding pass", "hotel"]);
    }

    #[test]
    fn carry_on_targets_plane_option() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.carry_on.option, TransportOption::CarryOnOnly);
        assert!(rules
            .transportation
            .iter()
            .any(|r| r.target_category == rules.carry_on.alternatives_category
                && r.trigger
                    == crate::Trigger::Transportation(Transportation::Plane)
                        .and(crate::Trigger::TransportOption(TransportOption::CarryOnOnly))));
    }

    #[test]
    fn ids_by_group_lists_every_rule() {
        let rules = RuleSet::builtin();
        let ids = rules.ids_by_group();
        let total: usize = ids.values().map(Vec::len).sum();
        assert_eq!(total, rules.rule_count());
        assert!(ids[&RuleGroup::Combinations].contains(&"combination.car_camping".to_string()));
    }

    #[test]
    fn rule_set_serializes() {
        let json = serde_json::to_value(RuleSet::builtin()).unwrap();
        assert_eq!(json["temperature_category"], "clothes");
        assert!(json["weather"].as_array().unwrap().len() >= 4);
    }
}
