//! # packwise-core: Foundational Types
//!
//! This crate defines the types every other packwise crate shares. It depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed vocabularies.** Trip types, transportation and accommodation
//!    modes, their options, and activities are enums with exhaustive `match`.
//!    Raw identifiers from the host are resolved once, in
//!    [`TripProfile::resolve`], and unknown values become [`Diagnostic`]s
//!    instead of silently disappearing.
//!
//! 2. **One quantity formula.** [`ItemQuantityRule::quantity_for`] is the only
//!    place nights are turned into a quantity. Every later adjustment goes
//!    through [`QuantityLimits::clamp`].
//!
//! 3. **One matching utility.** All substring-based skip, conflict and
//!    replacement decisions go through [`KeywordSet`] over normalized names.
//!
//! 4. **Deterministic lists.** [`PackingList`] is backed by `BTreeMap`s, so
//!    iteration order, serialization and [`ListFingerprint`]s are stable.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `packwise-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod diagnostic;
pub mod error;
pub mod fingerprint;
pub mod group;
pub mod item;
pub mod list;
pub mod matching;
pub mod trip;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use diagnostic::Diagnostic;
pub use error::{CatalogError, ContextError, PackwiseError, PackwiseResult};
pub use fingerprint::ListFingerprint;
pub use group::RuleGroup;
pub use item::{ceil_quantity, scale_quantity, ItemQuantityRule, QuantityLimits};
pub use list::{CategoryItems, GeneratedItem, PackingList};
pub use matching::{normalize, KeywordSet};
pub use trip::{TripContext, TripProfile, WeatherDay};
pub use vocabulary::{
    Accommodation, AccommodationOption, Activity, Axis, TransportOption, Transportation,
    TripType, Vocabulary,
};
