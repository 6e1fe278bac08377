//! # Item Quantity Rules
//!
//! Defines [`ItemQuantityRule`], the per-item recipe stored in the catalog and
//! in inline rule payloads, together with the quantity arithmetic every stage
//! shares.
//!
//! ## Quantity Formula
//!
//! ```text
//! qty = ceil(nights × multiplier)      (multiplier == 0 → qty = 1)
//! qty = max(qty, min)                  if min is declared
//! qty = min(qty, max)                  if max is declared
//! qty = min(qty, nights + 2)           otherwise
//! qty = max(qty, 1)
//! ```
//!
//! Ceilings tolerate floating-point noise: `10 × 0.3` yields 3, not 4.

use serde::{Deserialize, Serialize};

/// Tolerance applied before taking a ceiling.
const CEIL_EPSILON: f64 = 1e-9;

/// Round a non-negative quantity up to the next whole unit.
///
/// Values within `1e-9` of an integer are treated as that integer. Negative
/// and NaN inputs yield 0; overly large inputs saturate.
pub fn ceil_quantity(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let rounded = (value - CEIL_EPSILON).ceil();
    if rounded <= 0.0 {
        0
    } else if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Multiply a quantity by `factor`, rounding up.
pub fn scale_quantity(quantity: u32, factor: f64) -> u32 {
    ceil_quantity(f64::from(quantity) * factor)
}

// ---------------------------------------------------------------------------
// QuantityLimits
// ---------------------------------------------------------------------------

/// Explicit bounds declared by the rule that produced an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantityLimits {
    /// Lower bound, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Upper bound, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl QuantityLimits {
    /// Bring `quantity` inside the declared bounds, never below 1.
    pub fn clamp(&self, quantity: u32) -> u32 {
        let mut qty = quantity;
        if let Some(min) = self.min {
            qty = qty.max(min);
        }
        if let Some(max) = self.max {
            qty = qty.min(max);
        }
        qty.max(1)
    }

    /// Bounds that admit the larger quantity of two merged items.
    ///
    /// The lower bound is the stricter of the two; the upper bound is the
    /// looser one, and disappears when either side has none.
    pub fn union(self, other: Self) -> Self {
        let min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        Self { min, max }
    }
}

// ---------------------------------------------------------------------------
// ItemQuantityRule
// ---------------------------------------------------------------------------

/// How many of an item to pack, and whether it is essential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemQuantityRule {
    /// Units per night. Zero means "exactly one, regardless of nights".
    pub multiplier: f64,
    /// Mandatory regardless of quantity.
    #[serde(default)]
    pub essential: bool,
    /// Lower bound on the quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Upper bound on the quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Human-readable justification used in item notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemQuantityRule {
    /// A rule scaling with the number of nights.
    pub fn per_night(multiplier: f64) -> Self {
        Self {
            multiplier,
            essential: false,
            min: None,
            max: None,
            description: None,
        }
    }

    /// A rule yielding exactly one unit.
    pub fn single() -> Self {
        Self::per_night(0.0)
    }

    /// Mark the item essential.
    pub fn essential(mut self) -> Self {
        self.essential = true;
        self
    }

    /// Declare a lower bound.
    pub fn with_min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    /// Declare an upper bound.
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The explicit bounds of this rule.
    pub fn limits(&self) -> QuantityLimits {
        QuantityLimits {
            min: self.min,
            max: self.max,
        }
    }

    /// Apply the quantity formula for a trip of `nights` nights.
    pub fn quantity_for(&self, nights: u32) -> u32 {
        let mut qty = if self.multiplier == 0.0 {
            1
        } else {
            ceil_quantity(f64::from(nights) * self.multiplier)
        };
        if let Some(min) = self.min {
            qty = qty.max(min);
        }
        match self.max {
            Some(max) => qty = qty.min(max),
            None => qty = qty.min(nights.saturating_add(2)),
        }
        qty.max(1)
    }

    /// Render the note attached to an item injected by this rule.
    ///
    /// `"<description> (<reason>)"` when a description exists, otherwise
    /// `"Added for <reason>"`.
    pub fn note(&self, reason: &str) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => format!("{desc} ({reason})"),
            _ => format!("Added for {reason}"),
        }
    }

    /// Check the rule's internal consistency.
    ///
    /// Returns the reason on failure. A declared `min` without a `max` must
    /// not exceed 3, the implicit `nights + 2` cap at one night.
    pub fn check(&self) -> Result<(), String> {
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(format!(
                "multiplier must be a finite value >= 0, got {}",
                self.multiplier
            ));
        }
        if self.min == Some(0) {
            return Err("min must be at least 1".into());
        }
        if self.max == Some(0) {
            return Err("max must be at least 1".into());
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) if max < min => {
                Err(format!("max ({max}) is smaller than min ({min})"))
            }
            (Some(min), None) if min > 3 => Err(format!(
                "min ({min}) without max can be undercut by the nights + 2 cap"
            )),
            _ => Ok(()),
        }
    }
}
