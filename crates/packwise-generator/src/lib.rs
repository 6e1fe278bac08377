//! # packwise-generator: Packing-List Generation
//!
//! Turns a trip description into a categorized [`PackingList`] by running a
//! fixed [`Pipeline`] of twelve named stages over the built-in (or a
//! host-supplied) catalog and rule set.
//!
//! ```text
//! TripContext ──resolve──▶ TripProfile ──Pipeline::run──▶ PackingList
//!                  │                                          │
//!                  └──▶ Vec<Diagnostic>                       └──▶ export::to_checklist
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O. Hosts load catalogs and configuration themselves.
//! - No `.unwrap()` outside tests. Broken catalog data is reported when a
//!   [`Generator`] is built, never during generation.

pub mod config;
pub mod context;
pub mod engine;
pub mod export;
pub mod pipeline;
pub mod stages;

pub use config::{GeneratorConfig, PruneStrategy};
pub use context::StageContext;
pub use engine::{Generation, Generator};
pub use export::to_checklist;
pub use packwise_core::PackingList;
pub use pipeline::{Pipeline, Stage, StageFn};
