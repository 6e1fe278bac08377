//! # Generate Subcommand
//!
//! Reads a trip file, runs the generator and prints the list as a plain-text
//! checklist or as JSON.
//!
//! With `--diagnostics`, unrecognized identifiers are included in the output:
//! as a `DIAGNOSTICS` block for text, or as a `{ "list", "diagnostics" }`
//! envelope for JSON. With `--fingerprint`, the list digest is printed after
//! the list so hosts can detect whether a regeneration changed anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use packwise_generator::{to_checklist, Generation};

/// Output format for generated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text checklist.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `packwise generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Trip file (YAML or JSON).
    #[arg(value_name = "TRIP_FILE")]
    pub trip: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include diagnostics for unrecognized identifiers.
    #[arg(long)]
    pub diagnostics: bool,

    /// Print the list fingerprint.
    #[arg(long)]
    pub fingerprint: bool,

    /// Write the output to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the generate subcommand.
///
/// Returns exit code 0; invalid trips surface as errors.
pub fn run_generate(args: &GenerateArgs, config_path: Option<&Path>) -> Result<u8> {
    let generator = crate::load_generator(config_path)?;
    let context = crate::load_trip(&args.trip)?;
    let generation = generator
        .generate_with_report(&context)
        .with_context(|| format!("cannot generate a list for {}", args.trip.display()))?;

    for diagnostic in &generation.diagnostics {
        tracing::warn!(%diagnostic, "trip contains an unusable identifier");
    }

    let rendered = render(&generation, args.format, args.diagnostics, args.fingerprint)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                items = generation.list.total_items(),
                "packing list written"
            );
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

/// Render a generation in the requested format.
pub fn render(
    generation: &Generation,
    format: OutputFormat,
    with_diagnostics: bool,
    with_fingerprint: bool,
) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json if with_diagnostics => serde_json::to_string_pretty(generation)?,
        OutputFormat::Json => serde_json::to_string_pretty(&generation.list)?,
        OutputFormat::Text => {
            let mut text = to_checklist(&generation.list);
            if with_diagnostics && !generation.diagnostics.is_empty() {
                text.push_str("\n\nDIAGNOSTICS");
                for diagnostic in &generation.diagnostics {
                    text.push_str(&format!("\n- {diagnostic}"));
                }
            }
            text
        }
    };
    if with_fingerprint {
        let fingerprint = generation
            .list
            .fingerprint()
            .context("failed to fingerprint packing list")?;
        out.push_str(&format!("\n{fingerprint}"));
    }
    Ok(out)
}
