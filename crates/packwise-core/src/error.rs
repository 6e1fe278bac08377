//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Malformed trip input is a [`ContextError`] and is raised before any
//!   pipeline stage runs. No partial list is ever produced.
//! - Broken catalog or rule data is a [`CatalogError`]. These are programmer
//!   errors and surface when a generator is constructed.
//! - Unrecognized identifiers are not errors at all; see
//!   [`crate::Diagnostic`].

use thiserror::Error;

/// Convenience alias used across the packwise crates.
pub type PackwiseResult<T> = Result<T, PackwiseError>;

/// Top-level error type for packwise.
#[derive(Error, Debug)]
pub enum PackwiseError {
    /// The trip description was rejected before generation.
    #[error("invalid trip context: {0}")]
    InvalidContext(#[from] ContextError),

    /// Catalog or rule data violates an internal invariant.
    #[error("catalog invariant violated: {0}")]
    Catalog(#[from] CatalogError),

    /// Generator configuration is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a [`crate::TripContext`] is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    /// `nights` must be strictly positive.
    #[error("nights must be greater than zero, got {0}")]
    NonPositiveNights(i64),

    /// `nights` does not fit the quantity arithmetic.
    #[error("nights out of range: {0}")]
    NightsOutOfRange(i64),

    /// `tripType` was absent or blank.
    #[error("trip type is required")]
    MissingTripType,

    /// A forecast entry carried an unusable value.
    #[error("weather entry {index} is malformed: {reason}")]
    MalformedWeather {
        /// Position of the entry in the forecast sequence.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Violations of catalog and rule-set invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// An item quantity rule is internally inconsistent.
    #[error("invalid quantity rule for {section}/{category}/{item}: {reason}")]
    InvalidItemRule {
        /// Catalog section (or rule id for inline items).
        section: String,
        /// Category key.
        category: String,
        /// Item name.
        item: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// A rule references a catalog category that does not exist.
    #[error("rule {rule_id} references missing catalog category {section}/{category}")]
    UnknownCategory {
        /// The offending rule.
        rule_id: String,
        /// Catalog section named by the rule.
        section: String,
        /// Category key named by the rule.
        category: String,
    },

    /// Two rules were registered under the same id.
    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),

    /// A rule injects no items at all.
    #[error("rule {0} injects no items")]
    EmptyRule(String),

    /// A rule is structurally unusable.
    #[error("invalid rule {rule_id}: {reason}")]
    InvalidRule {
        /// The offending rule.
        rule_id: String,
        /// Why the rule was rejected.
        reason: String,
    },
}
