//! Catalog section identifiers.

use serde::{Deserialize, Serialize};

/// The six top-level sections of the item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSection {
    /// Always-packed items, keyed by category.
    Essentials,
    /// Weather-driven items: winter, summer, rainy.
    Seasonal,
    /// Items per transportation mode.
    Transportation,
    /// Items per accommodation mode.
    Accommodation,
    /// Items per activity.
    Activities,
    /// Items for special circumstances named in trip notes.
    SpecialNeeds,
}

impl CatalogSection {
    /// All sections in declaration order.
    pub fn all() -> &'static [CatalogSection] {
        &[
            Self::Essentials,
            Self::Seasonal,
            Self::Transportation,
            Self::Accommodation,
            Self::Activities,
            Self::SpecialNeeds,
        ]
    }

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::Seasonal => "seasonal",
            Self::Transportation => "transportation",
            Self::Accommodation => "accommodation",
            Self::Activities => "activities",
            Self::SpecialNeeds => "special_needs",
        }
    }

    /// Resolve a section identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::all().iter().copied().find(|s| s.as_str() == id)
    }
}

impl std::fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_and_dashed_ids() {
        assert_eq!(CatalogSection::parse("essentials"), Some(CatalogSection::Essentials));
        assert_eq!(
            CatalogSection::parse("Special-Needs"),
            Some(CatalogSection::SpecialNeeds)
        );
        assert_eq!(CatalogSection::parse("souvenirs"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for section in CatalogSection::all() {
            assert_eq!(CatalogSection::parse(section.as_str()), Some(*section));
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&CatalogSection::SpecialNeeds).unwrap();
        assert_eq!(json, r#""special_needs""#);
    }
}
