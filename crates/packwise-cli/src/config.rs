//! # CLI Configuration
//!
//! The optional `--config` file is YAML:
//!
//! ```yaml
//! generator:
//!   max_total_items: 80
//!   prune_strategy: rule_priority
//! catalog: catalogs/minimal.yaml
//! ```
//!
//! `generator` maps onto [`GeneratorConfig`]; omitted fields keep their
//! defaults. `catalog` names an override catalog that replaces the built-in
//! one entirely. A relative catalog path is resolved against the directory of
//! the configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use packwise_catalog::ItemCatalog;
use packwise_generator::{Generator, GeneratorConfig};
use packwise_rules::RuleSet;

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Override catalog (YAML or JSON).
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Load a configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let mut config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid YAML in {}", path.display()))?;

    if let Some(catalog) = config.catalog.take() {
        config.catalog = Some(resolve_relative(&catalog, path));
    }

    tracing::debug!(
        path = %path.display(),
        override_catalog = config.catalog.is_some(),
        "loaded configuration"
    );
    Ok(config)
}

/// Load an override catalog. YAML is a superset of JSON, so one parser
/// covers both.
pub fn load_catalog(path: &Path) -> Result<ItemCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    let catalog: ItemCatalog = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid catalog document {}", path.display()))?;
    catalog
        .validated()
        .with_context(|| format!("invalid catalog {}", path.display()))
}

/// Build a generator from the `--config` file, if any.
pub fn load_generator(config_path: Option<&Path>) -> Result<Generator> {
    let config = load_config(config_path)?;
    let catalog = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => ItemCatalog::builtin().context("built-in catalog is invalid")?,
    };
    Generator::new(catalog, RuleSet::builtin(), config.generator)
        .context("failed to build generator")
}

fn resolve_relative(path: &Path, config_path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
