//! # Catalog Subcommand
//!
//! Lists the item catalog the generator would use: the built-in one, or the
//! override named in the configuration file.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Args;

use packwise_catalog::{CatalogSection, ItemCatalog};
use packwise_core::ItemQuantityRule;

/// Arguments for the `packwise catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list one section (essentials, seasonal, transportation,
    /// accommodation, activities, special_needs).
    #[arg(long)]
    pub section: Option<String>,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs, config_path: Option<&Path>) -> Result<u8> {
    let sections = match args.section.as_deref() {
        Some(raw) => {
            let section = CatalogSection::parse(raw).ok_or_else(|| {
                let known: Vec<_> = CatalogSection::all().iter().map(|s| s.as_str()).collect();
                anyhow!("unknown catalog section '{raw}' (expected one of: {})", known.join(", "))
            })?;
            vec![section]
        }
        None => CatalogSection::all().to_vec(),
    };

    let generator = crate::load_generator(config_path)?;
    print!("{}", render_sections(generator.catalog(), &sections));
    Ok(0)
}

/// Render the given sections as an indented listing.
pub fn render_sections(catalog: &ItemCatalog, sections: &[CatalogSection]) -> String {
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{section}");
        for (key, items) in catalog.section(*section) {
            let _ = writeln!(out, "  {key}");
            for (name, rule) in items {
                let _ = writeln!(out, "    {name}{}", describe(rule));
            }
        }
    }
    out
}

fn describe(rule: &ItemQuantityRule) -> String {
    let mut parts = Vec::new();
    if rule.multiplier > 0.0 {
        parts.push(format!("{}/night", rule.multiplier));
    }
    if let Some(min) = rule.min {
        parts.push(format!("min {min}"));
    }
    if let Some(max) = rule.max {
        parts.push(format!("max {max}"));
    }
    if rule.essential {
        parts.push("essential".to_string());
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_section_listing() {
        let catalog = ItemCatalog::builtin().unwrap();
        let out = render_sections(&catalog, &[CatalogSection::Essentials]);
        assert!(out.starts_with("essentials\n"));
        assert!(out.contains("\n  documents\n"));
        assert!(out.contains("    Passport/ID [essential]\n"));
        assert!(!out.contains("seasonal"));
    }

    #[test]
    fn describe_lists_quantity_terms() {
        let rule = ItemQuantityRule::per_night(0.5).with_min(2).with_max(6);
        assert_eq!(describe(&rule), " [0.5/night, min 2, max 6]");
        assert_eq!(describe(&ItemQuantityRule::single()), "");
    }

    #[test]
    fn unknown_section_is_an_error() {
        let args = CatalogArgs {
            section: Some("snacks".into()),
        };
        let err = run_catalog(&args, None).unwrap_err();
        assert!(err.to_string().contains("unknown catalog section 'snacks'"));
    }

    #[test]
    fn known_section_succeeds() {
        let args = CatalogArgs {
            section: Some("special-needs".into()),
        };
        assert_eq!(run_catalog(&args, None).unwrap(), 0);
    }
}
