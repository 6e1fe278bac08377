//! # Contextual Policies
//!
//! Rules that shape the list rather than add to it:
//!
//! - [`ConflictRule`]: items contradicting the chosen transportation or
//!   accommodation are removed.
//! - [`AccommodationPolicy`]: essentials an accommodation already provides
//!   are skipped, and essential quantities are adjusted.
//! - [`CarryOnRestriction`]: the items that cabin-bag-only alternatives are
//!   meant to replace.

use packwise_core::{
    scale_quantity, Accommodation, CatalogError, KeywordSet, TransportOption, Transportation,
    TripProfile,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Conflicts
// ---------------------------------------------------------------------------

/// The trip choice a conflict rule reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Transportation(Transportation),
    Accommodation(Accommodation),
}

impl Choice {
    /// Whether the trip made this choice.
    pub fn made_by(&self, trip: &TripProfile) -> bool {
        match self {
            Self::Transportation(mode) => trip.transportation == Some(*mode),
            Self::Accommodation(mode) => trip.accommodation == Some(*mode),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use packwise_core::Vocabulary;
        match self {
            Self::Transportation(mode) => write!(f, "transportation={}", mode.as_str()),
            Self::Accommodation(mode) => write!(f, "accommodation={}", mode.as_str()),
        }
    }
}

/// Keywords contradicting a trip choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRule {
    /// The choice.
    pub when: Choice,
    /// Item-name fragments to remove.
    pub keywords: KeywordSet,
}

impl ConflictRule {
    /// Build a conflict rule.
    pub fn new(when: Choice, keywords: &[&str]) -> Self {
        Self {
            when,
            keywords: KeywordSet::new(keywords),
        }
    }

    /// Whether the rule applies to this trip.
    pub fn applies(&self, trip: &TripProfile) -> bool {
        self.when.made_by(trip)
    }
}

// ---------------------------------------------------------------------------
// Accommodation policies
// ---------------------------------------------------------------------------

/// Which essentials an adjustment touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentScope {
    /// Every item of one essentials category.
    Category(String),
    /// Items whose name contains one of the fragments.
    Items(KeywordSet),
}

/// What an adjustment does to a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentAction {
    /// Multiply, rounding up.
    Scale(f64),
    /// Never more than this many.
    Cap(u32),
}

/// A quantity adjustment applied to essentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityAdjustment {
    pub scope: AdjustmentScope,
    pub action: AdjustmentAction,
}

impl QuantityAdjustment {
    /// Scale every item of `category`.
    pub fn scale_category(category: &str, factor: f64) -> Self {
        Self {
            scope: AdjustmentScope::Category(category.to_string()),
            action: AdjustmentAction::Scale(factor),
        }
    }

    /// Scale items matching `fragments`.
    pub fn scale_items(fragments: &[&str], factor: f64) -> Self {
        Self {
            scope: AdjustmentScope::Items(KeywordSet::new(fragments)),
            action: AdjustmentAction::Scale(factor),
        }
    }

    /// Cap items matching `fragments`.
    pub fn cap_items(fragments: &[&str], cap: u32) -> Self {
        Self {
            scope: AdjustmentScope::Items(KeywordSet::new(fragments)),
            action: AdjustmentAction::Cap(cap),
        }
    }

    /// Whether the adjustment touches this item.
    pub fn applies_to(&self, category: &str, name: &str) -> bool {
        match &self.scope {
            AdjustmentScope::Category(key) => key == category,
            AdjustmentScope::Items(fragments) => fragments.matches(name),
        }
    }

    /// Adjust a quantity. The result may fall outside the item's bounds;
    /// callers re-clamp.
    pub fn apply(&self, quantity: u32) -> u32 {
        match self.action {
            AdjustmentAction::Scale(factor) => scale_quantity(quantity, factor),
            AdjustmentAction::Cap(cap) => quantity.min(cap),
        }
    }

    fn check(&self) -> Result<(), String> {
        match self.action {
            AdjustmentAction::Scale(factor) if !factor.is_finite() || factor <= 0.0 => {
                Err(format!("scale factor must be positive, got {factor}"))
            }
            AdjustmentAction::Cap(0) => Err("cap must be at least 1".into()),
            _ => Ok(()),
        }
    }
}

/// How an accommodation shapes the essentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationPolicy {
    /// The accommodation this policy serves.
    pub accommodation: Accommodation,
    /// Essentials the accommodation provides.
    pub skip: KeywordSet,
    /// Quantity adjustments, applied in order.
    #[serde(default)]
    pub adjustments: Vec<QuantityAdjustment>,
}

impl AccommodationPolicy {
    /// A policy with a skip list and no adjustments.
    pub fn new(accommodation: Accommodation, skip: &[&str]) -> Self {
        Self {
            accommodation,
            skip: KeywordSet::new(skip),
            adjustments: Vec::new(),
        }
    }

    /// Append an adjustment.
    pub fn with_adjustment(mut self, adjustment: QuantityAdjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    /// Whether the accommodation already provides this item.
    pub fn skips(&self, name: &str) -> bool {
        self.skip.matches(name)
    }

    /// Apply every matching adjustment in order.
    pub fn adjust(&self, category: &str, name: &str, quantity: u32) -> u32 {
        self.adjustments
            .iter()
            .filter(|a| a.applies_to(category, name))
            .fold(quantity, |qty, a| a.apply(qty))
    }

    /// Check every adjustment.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for adjustment in &self.adjustments {
            adjustment
                .check()
                .map_err(|reason| CatalogError::InvalidRule {
                    rule_id: format!(
                        "policy.{}",
                        packwise_core::Vocabulary::as_str(&self.accommodation)
                    ),
                    reason,
                })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Carry-on restriction
// ---------------------------------------------------------------------------

/// Items that cabin-bag-only alternatives are meant to replace.
///
/// The alternatives themselves are injected by an ordinary transportation
/// rule targeting [`CarryOnRestriction::alternatives_category`]. The removals
/// only take effect when the generator is configured to enforce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryOnRestriction {
    /// The option that triggers the restriction.
    pub option: TransportOption,
    /// Category receiving the alternatives.
    pub alternatives_category: String,
    /// Item-name fragments the alternatives replace.
    pub removals: KeywordSet,
}

impl CarryOnRestriction {
    /// Whether the restriction applies to this trip.
    pub fn applies(&self, trip: &TripProfile) -> bool {
        trip.has_transport_option(self.option)
    }
}
