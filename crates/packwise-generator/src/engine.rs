//! # Generator
//!
//! [`Generator`] owns a validated catalog, rule set and configuration and
//! turns a [`TripContext`] into a [`PackingList`].
//!
//! ## Determinism
//!
//! Generation is a pure function of the trip and the generator's data:
//! identical inputs yield identical lists, and therefore identical
//! [`ListFingerprint`](packwise_core::ListFingerprint)s. Completion state is
//! never carried over from a previous list.

use packwise_catalog::ItemCatalog;
use packwise_core::{Diagnostic, PackingList, PackwiseResult, TripContext, TripProfile};
use packwise_rules::RuleSet;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::context::StageContext;
use crate::pipeline::Pipeline;

/// A generated list with the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub list: PackingList,
    /// Unrecognized or inapplicable identifiers, sorted.
    pub diagnostics: Vec<Diagnostic>,
}

/// The packing-list generator.
#[derive(Debug, Clone)]
pub struct Generator {
    catalog: ItemCatalog,
    rules: RuleSet,
    config: GeneratorConfig,
    pipeline: Pipeline,
}

impl Generator {
    /// Validate and assemble a generator.
    ///
    /// # Errors
    ///
    /// - [`PackwiseError::Config`](packwise_core::PackwiseError::Config) for
    ///   out-of-range configuration.
    /// - [`PackwiseError::Catalog`](packwise_core::PackwiseError::Catalog)
    ///   for invalid catalog entries or rules that do not fit the catalog.
    pub fn new(
        catalog: ItemCatalog,
        rules: RuleSet,
        config: GeneratorConfig,
    ) -> PackwiseResult<Self> {
        config.validate()?;
        catalog.validate()?;
        rules.validate_against(&catalog)?;
        tracing::info!(
            catalog_items = catalog.item_count(),
            rules = rules.rule_count(),
            prune_strategy = %config.prune_strategy,
            "generator ready"
        );
        Ok(Self {
            catalog,
            rules,
            config,
            pipeline: Pipeline::standard(),
        })
    }

    /// The built-in catalog and rule set with default configuration.
    pub fn builtin() -> PackwiseResult<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    /// The built-in catalog and rule set with `config`.
    pub fn with_config(config: GeneratorConfig) -> PackwiseResult<Self> {
        Self::new(ItemCatalog::builtin()?, RuleSet::builtin(), config)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Generate a packing list.
    ///
    /// # Errors
    ///
    /// Returns [`PackwiseError::InvalidContext`](packwise_core::PackwiseError::InvalidContext)
    /// for non-positive nights, a missing trip type or malformed forecast
    /// entries. No partial list is produced.
    pub fn generate(&self, context: &TripContext) -> PackwiseResult<PackingList> {
        Ok(self.generate_with_report(context)?.list)
    }

    /// Generate a packing list and report diagnostics.
    pub fn generate_with_report(&self, context: &TripContext) -> PackwiseResult<Generation> {
        let (trip, diagnostics) = TripProfile::resolve(context)?;
        let list = self.generate_for(&trip);
        tracing::debug!(
            nights = trip.nights,
            categories = list.category_count(),
            items = list.total_items(),
            diagnostics = diagnostics.len(),
            "packing list generated"
        );
        Ok(Generation { list, diagnostics })
    }

    /// Run the pipeline for an already-resolved trip.
    pub fn generate_for(&self, trip: &TripProfile) -> PackingList {
        let ctx = StageContext::new(trip, &self.catalog, &self.rules, &self.config);
        self.pipeline.run(&ctx)
    }
}
