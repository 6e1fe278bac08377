//! # packwise CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use packwise_cli::catalog::{run_catalog, CatalogArgs};
use packwise_cli::generate::{run_generate, GenerateArgs};
use packwise_cli::rules::{run_rules, RulesArgs};
use packwise_cli::validate::{run_validate, ValidateArgs};

/// Rule-based packing-list generator.
///
/// Turns a trip description (nights, trip type, transportation,
/// accommodation, activities, notes and forecast) into a categorized
/// packing checklist.
#[derive(Parser, Debug)]
#[command(name = "packwise", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a packing list from a trip file.
    Generate(GenerateArgs),

    /// Validate a trip file and report diagnostics.
    Validate(ValidateArgs),

    /// List catalog categories and items.
    Catalog(CatalogArgs),

    /// List rule ids per group and the priority table.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "packwise CLI starting");

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, config),
        Commands::Validate(args) => run_validate(&args, config),
        Commands::Catalog(args) => run_catalog(&args, config),
        Commands::Rules(args) => run_rules(&args, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwise_cli::generate::OutputFormat;

    #[test]
    fn cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["packwise", "generate", "trip.yaml"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.trip, PathBuf::from("trip.yaml"));
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.diagnostics);
            assert!(!args.fingerprint);
            assert!(args.output.is_none());
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_generate_json_with_diagnostics() {
        let cli = Cli::try_parse_from([
            "packwise",
            "generate",
            "trip.json",
            "--format",
            "json",
            "--diagnostics",
            "-o",
            "list.json",
        ])
        .unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
            assert!(args.diagnostics);
            assert_eq!(args.output, Some(PathBuf::from("list.json")));
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_rejects_unknown_format() {
        assert!(
            Cli::try_parse_from(["packwise", "generate", "t.yaml", "--format", "pdf"]).is_err()
        );
    }

    #[test]
    fn cli_parse_generate_requires_trip() {
        assert!(Cli::try_parse_from(["packwise", "generate"]).is_err());
    }

    #[test]
    fn cli_parse_validate_strict() {
        let cli = Cli::try_parse_from(["packwise", "validate", "trip.yaml", "--strict"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.strict);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_catalog_section() {
        let cli = Cli::try_parse_from(["packwise", "catalog", "--section", "activities"]).unwrap();
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.section.as_deref(), Some("activities"));
        } else {
            panic!("expected catalog");
        }
    }

    #[test]
    fn cli_parse_rules() {
        let cli = Cli::try_parse_from(["packwise", "rules"]).unwrap();
        assert!(matches!(cli.command, Commands::Rules(_)));
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "packwise",
            "rules",
            "-vv",
            "--config",
            "packwise.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("packwise.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["packwise"]).is_err());
    }
}
