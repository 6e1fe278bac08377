//! # Item Catalog
//!
//! [`ItemCatalog`] is an immutable registry: it is either built in code by
//! [`ItemCatalog::builtin`] or deserialized from a host-supplied document and
//! passed through [`ItemCatalog::validated`]. Nothing mutates it afterwards.

use std::collections::BTreeMap;

use packwise_core::{CatalogError, ItemQuantityRule};
use serde::{Deserialize, Serialize};

use crate::section::CatalogSection;

/// Items of one catalog category, keyed by item name.
pub type CatalogCategory = BTreeMap<String, ItemQuantityRule>;

/// Categories of one catalog section, keyed by category key.
pub type SectionItems = BTreeMap<String, CatalogCategory>;

/// The full item catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemCatalog {
    #[serde(default)]
    essentials: SectionItems,
    #[serde(default)]
    seasonal: SectionItems,
    #[serde(default)]
    transportation: SectionItems,
    #[serde(default)]
    accommodation: SectionItems,
    #[serde(default)]
    activities: SectionItems,
    #[serde(default)]
    special_needs: SectionItems,
}

impl ItemCatalog {
    /// The built-in catalog, validated.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidItemRule`] if any built-in entry is
    /// inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self {
            essentials: crate::builtin::essentials(),
            seasonal: crate::builtin::seasonal(),
            transportation: crate::builtin::transportation(),
            accommodation: crate::builtin::accommodation(),
            activities: crate::builtin::activities(),
            special_needs: crate::builtin::special_needs(),
        };
        catalog.validated()
    }

    /// Validate a catalog and hand it back.
    pub fn validated(self) -> Result<Self, CatalogError> {
        self.validate()?;
        tracing::debug!(
            categories = self.category_count(),
            items = self.item_count(),
            "item catalog validated"
        );
        Ok(self)
    }

    /// Check every item rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError::InvalidItemRule`] in section, then
    /// category, then item order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (section, category, name, rule) in self.entries() {
            rule.check().map_err(|reason| CatalogError::InvalidItemRule {
                section: section.as_str().to_string(),
                category: category.to_string(),
                item: name.to_string(),
                reason,
            })?;
        }
        Ok(())
    }

    /// All categories of one section.
    pub fn section(&self, section: CatalogSection) -> &SectionItems {
        match section {
            CatalogSection::Essentials => &self.essentials,
            CatalogSection::Seasonal => &self.seasonal,
            CatalogSection::Transportation => &self.transportation,
            CatalogSection::Accommodation => &self.accommodation,
            CatalogSection::Activities => &self.activities,
            CatalogSection::SpecialNeeds => &self.special_needs,
        }
    }

    /// Look up one category, or `None` when absent.
    pub fn category(&self, section: CatalogSection, key: &str) -> Option<&CatalogCategory> {
        self.section(section).get(key)
    }

    /// Whether `section` holds a category named `key`.
    pub fn has_category(&self, section: CatalogSection, key: &str) -> bool {
        self.section(section).contains_key(key)
    }

    /// Look up one item rule.
    pub fn item(
        &self,
        section: CatalogSection,
        key: &str,
        name: &str,
    ) -> Option<&ItemQuantityRule> {
        self.category(section, key)?.get(name)
    }

    /// Iterate every entry as `(section, category, item, rule)`.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (CatalogSection, &str, &str, &ItemQuantityRule)> {
        CatalogSection::all().iter().flat_map(move |section| {
            self.section(*section).iter().flat_map(move |(category, items)| {
                items
                    .iter()
                    .map(move |(name, rule)| (*section, category.as_str(), name.as_str(), rule))
            })
        })
    }

    /// Number of categories across all sections.
    pub fn category_count(&self) -> usize {
        CatalogSection::all()
            .iter()
            .map(|s| self.section(*s).len())
            .sum()
    }

    /// Number of item entries across all sections.
    pub fn item_count(&self) -> usize {
        self.entries().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = ItemCatalog::builtin().unwrap();
        assert!(catalog.validate().is_ok());
        assert!(catalog.item_count() > 100);
    }

    #[test]
    fn builtin_essentials_cover_core_categories() {
        let catalog = ItemCatalog::builtin().unwrap();
        for key in ["documents", "clothes", "toiletries", "electronics", "health"] {
            assert!(
                catalog.has_category(CatalogSection::Essentials, key),
                "missing essentials/{key}"
            );
        }
        let passport = catalog
            .item(CatalogSection::Essentials, "documents", "Passport/ID")
            .unwrap();
        assert!(passport.essential);
        assert_eq!(passport.quantity_for(3), 1);
    }

    #[test]
    fn every_mode_and_activity_has_a_category() {
        use packwise_core::{Accommodation, Activity, Transportation, Vocabulary};
        let catalog = ItemCatalog::builtin().unwrap();
        for mode in Transportation::all() {
            assert!(catalog.has_category(CatalogSection::Transportation, mode.as_str()));
        }
        for mode in Accommodation::all() {
            assert!(catalog.has_category(CatalogSection::Accommodation, mode.as_str()));
        }
        for activity in Activity::all() {
            assert!(catalog.has_category(CatalogSection::Activities, activity.as_str()));
        }
    }

    #[test]
    fn no_multiplier_is_negative() {
        let catalog = ItemCatalog::builtin().unwrap();
        assert!(catalog.entries().all(|(_, _, _, rule)| rule.multiplier >= 0.0));
    }

    #[test]
    fn missing_lookups_return_none() {
        let catalog = ItemCatalog::builtin().unwrap();
        assert!(catalog.category(CatalogSection::Activities, "bungee").is_none());
        assert!(catalog
            .item(CatalogSection::Essentials, "documents", "Unicorn")
            .is_none());
    }

    #[test]
    fn validated_rejects_inverted_bounds() {
        let json = r#"{
            "essentials": {
                "clothes": {
                    "Socks": { "multiplier": 1.0, "min": 5, "max": 2 }
                }
            }
        }"#;
        let catalog: ItemCatalog = serde_json::from_str(json).unwrap();
        let err = catalog.validated().unwrap_err();
        match err {
            CatalogError::InvalidItemRule {
                section,
                category,
                item,
                ..
            } => {
                assert_eq!(section, "essentials");
                assert_eq!(category, "clothes");
                assert_eq!(item, "Socks");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn override_catalog_loads_from_yaml() {
        let yaml = r#"
essentials:
  documents:
    Passport/ID: { multiplier: 0.0, essential: true }
special_needs:
  pets:
    Dog leash: { multiplier: 0.0 }
"#;
        let catalog: ItemCatalog = serde_yaml::from_str(yaml).unwrap();
        let catalog = catalog.validated().unwrap();
        assert_eq!(catalog.item_count(), 2);
        assert!(catalog.has_category(CatalogSection::SpecialNeeds, "pets"));
        assert!(catalog.section(CatalogSection::Seasonal).is_empty());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let json = r#"{ "souvenirs": {} }"#;
        assert!(serde_json::from_str::<ItemCatalog>(json).is_err());
    }
}
