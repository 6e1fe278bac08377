//! # packwise-cli: Command-Line Host
//!
//! Provides the `packwise` command-line interface around the generator
//! library. The library itself performs no I/O; this crate owns file loading,
//! configuration and output formatting.
//!
//! ## Subcommands
//!
//! - `packwise generate`: Generate a packing list from a trip file.
//! - `packwise validate`: Validate a trip file and report diagnostics.
//! - `packwise catalog`: List catalog categories and items.
//! - `packwise rules`: List rule ids per group and the priority table.
//!
//! ```bash
//! packwise generate trips/lisbon.yaml --format json --diagnostics
//! packwise -v --config packwise.yaml validate trips/lisbon.yaml --strict
//! packwise catalog --section activities
//! ```

pub mod catalog;
pub mod config;
pub mod generate;
pub mod rules;
pub mod trip;
pub mod validate;

pub use config::{load_config, load_generator, CliConfig};
pub use trip::load_trip;
