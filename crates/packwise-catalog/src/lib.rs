//! # packwise-catalog: Static Item Catalog
//!
//! The catalog is the registry of every item the rule set can inject by
//! reference. It is organized in six sections, each mapping a category key
//! to named items with an [`ItemQuantityRule`](packwise_core::ItemQuantityRule):
//!
//! | Section          | Keys                                              |
//! |------------------|---------------------------------------------------|
//! | `essentials`     | documents, clothes, toiletries, electronics, health |
//! | `seasonal`       | winter, summer, rainy                             |
//! | `transportation` | one key per transportation mode                   |
//! | `accommodation`  | one key per accommodation mode                    |
//! | `activities`     | one key per activity                              |
//! | `special_needs`  | baby, formal_event, conference, medical, ...      |
//!
//! Essentials are injected wholesale at the start of every generation; the
//! other sections are only reached through rules.
//!
//! ## Naming
//!
//! Contextual conflicts and replacements match item names by substring. Item
//! names here avoid fragments such as `car`, `tent` or `hotel` unless the
//! item is meant to be removed by the corresponding conflict.

mod builtin;
pub mod catalog;
pub mod section;

pub use catalog::{CatalogCategory, ItemCatalog, SectionItems};
pub use section::CatalogSection;
