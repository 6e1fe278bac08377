//! # Validate Subcommand
//!
//! Checks a trip file without generating a list: the context is resolved the
//! same way the generator resolves it, and every diagnostic is printed. The
//! configuration is loaded first, so a broken configuration file or override
//! catalog fails validation too.
//!
//! Exit codes: 0 when the trip is usable, 1 when it is rejected (or, with
//! `--strict`, when it produced any diagnostic).

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use packwise_core::{Diagnostic, TripContext, TripProfile};

/// Arguments for the `packwise validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Trip file (YAML or JSON).
    #[arg(value_name = "TRIP_FILE")]
    pub trip: PathBuf,

    /// Treat diagnostics as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Outcome of validating one trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// The trip resolved, possibly with diagnostics.
    Usable {
        summary: String,
        diagnostics: Vec<Diagnostic>,
    },
    /// The trip was rejected.
    Rejected(String),
}

impl Validation {
    /// Exit code for this outcome.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self {
            Self::Usable { diagnostics, .. } if strict && !diagnostics.is_empty() => 1,
            Self::Usable { .. } => 0,
            Self::Rejected(_) => 1,
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config_path: Option<&Path>) -> Result<u8> {
    crate::load_generator(config_path)?;
    let context = crate::load_trip(&args.trip)?;
    let validation = validate_trip(&context);

    match &validation {
        Validation::Usable {
            summary,
            diagnostics,
        } => {
            println!("OK: {} ({summary})", args.trip.display());
            for diagnostic in diagnostics {
                println!("  WARN: {diagnostic}");
            }
        }
        Validation::Rejected(reason) => {
            println!("FAIL: {}: {reason}", args.trip.display());
        }
    }
    Ok(validation.exit_code(args.strict))
}

/// Resolve a trip context and describe the result.
pub fn validate_trip(context: &TripContext) -> Validation {
    match TripProfile::resolve(context) {
        Ok((profile, diagnostics)) => Validation::Usable {
            summary: summarize(&profile),
            diagnostics,
        },
        Err(err) => Validation::Rejected(err.to_string()),
    }
}

fn summarize(profile: &TripProfile) -> String {
    let mut parts = vec![format!(
        "{} night{}",
        profile.nights,
        if profile.nights == 1 { "" } else { "s" }
    )];
    if let Some(trip_type) = profile.trip_type {
        parts.push(trip_type.to_string());
    }
    if let Some(mode) = profile.transportation {
        parts.push(format!("by {mode}"));
    }
    if let Some(stay) = profile.accommodation {
        parts.push(format!("staying {stay}"));
    }
    if !profile.activities.is_empty() {
        let activities: Vec<_> = profile.activities.iter().map(ToString::to_string).collect();
        parts.push(format!("activities: {}", activities.join(", ")));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_trip_is_summarized() {
        let context = TripContext::new(1, "city")
            .with_transportation("train", &[])
            .with_accommodation("hostel", &[])
            .with_activities(&["sightseeing"]);
        match validate_trip(&context) {
            Validation::Usable {
                summary,
                diagnostics,
            } => {
                assert_eq!(
                    summary,
                    "1 night, city, by train, staying hostel, activities: sightseeing"
                );
                assert!(diagnostics.is_empty());
            }
            other => panic!("expected usable trip, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_nights_are_rejected() {
        let validation = validate_trip(&TripContext::new(-2, "city"));
        assert!(matches!(validation, Validation::Rejected(_)));
        assert_eq!(validation.exit_code(false), 1);
    }

    #[test]
    fn strict_mode_fails_on_diagnostics() {
        let context = TripContext::new(4, "leisure").with_accommodation("yurt", &[]);
        let validation = validate_trip(&context);
        assert_eq!(validation.exit_code(false), 0);
        assert_eq!(validation.exit_code(true), 1);
    }

    #[test]
    fn run_validate_reads_trip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.yaml");
        std::fs::write(&path, "nights: 2\ntripType: romantic\n").unwrap();
        let args = ValidateArgs {
            trip: path,
            strict: true,
        };
        assert_eq!(run_validate(&args, None).unwrap(), 0);
    }

    #[test]
    fn run_validate_missing_file_is_an_error() {
        let args = ValidateArgs {
            trip: PathBuf::from("/nonexistent/trip.yaml"),
            strict: false,
        };
        assert!(run_validate(&args, None).is_err());
    }

    #[test]
    fn run_validate_rejects_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let trip = dir.path().join("trip.yaml");
        std::fs::write(&trip, "nights: 2\ntripType: romantic\n").unwrap();
        let config = dir.path().join("packwise.yaml");
        std::fs::write(&config, "generator:\n  max_total_itms: 50\n").unwrap();
        let args = ValidateArgs {
            trip,
            strict: false,
        };
        assert!(run_validate(&args, Some(&config)).is_err());
        assert_eq!(run_validate(&args, None).unwrap(), 0);
    }
}
