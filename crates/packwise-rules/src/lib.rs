//! # packwise-rules: Declarative Rule Set
//!
//! Every decision the generator makes beyond the essentials is data in a
//! [`RuleSet`]:
//!
//! - **Conditional rules** ([`ConditionalRule`]) pair a [`Trigger`] with the
//!   items to inject and a target category. They are grouped by
//!   [`RuleGroup`](packwise_core::RuleGroup): weather, activities, trip
//!   types, duration, notes keywords, transportation, accommodation and
//!   combinations.
//! - **Temperature bands** ([`BandRule`]) pick clothing from the rounded
//!   average forecast temperature.
//! - **Replacements** ([`ReplacementRule`]) drop superseded items.
//! - **Conflicts** ([`ConflictRule`]) drop items contradicting the trip's
//!   transportation or accommodation.
//! - **Accommodation policies** ([`AccommodationPolicy`]) skip and adjust
//!   essentials.
//! - **Carry-on restriction** ([`CarryOnRestriction`]) names what cabin-bag
//!   alternatives replace.
//! - **Rule priority** ([`RulePriority`]) weights groups for pruning.
//!
//! Keyword vocabularies and the international-trip heuristic live in
//! [`vocabulary`].

mod builtin;
pub mod policy;
pub mod priority;
pub mod rule;
pub mod set;
pub mod temperature;
pub mod trigger;
pub mod vocabulary;

pub use policy::{
    AccommodationPolicy, AdjustmentAction, AdjustmentScope, CarryOnRestriction, Choice,
    ConflictRule, QuantityAdjustment,
};
pub use priority::RulePriority;
pub use rule::{ConditionalRule, ReplacementRule, RuleItems};
pub use set::RuleSet;
pub use temperature::{BandRule, TemperatureBand};
pub use trigger::{Trigger, TripFacts};
pub use vocabulary::is_international_trip;
