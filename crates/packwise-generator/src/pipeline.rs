//! # Generation Pipeline
//!
//! An explicit, ordered list of named stages. Each stage is a pure function
//! from the list so far to the next list. Stage order is part of the
//! behaviour: replacements and conflicts only see items injected before
//! them, and pruning only sees rescaled quantities.
//!
//! | # | Stage                 |
//! |---|-----------------------|
//! | 1 | essentials            |
//! | 2 | temperature_clothing  |
//! | 3 | conditions            |
//! | 4 | keywords              |
//! | 5 | transportation        |
//! | 6 | accommodation         |
//! | 7 | combinations          |
//! | 8 | replacements          |
//! | 9 | conflicts             |
//! | 10| rescale               |
//! | 11| prune                 |
//! | 12| finalize              |

use packwise_core::PackingList;

use crate::context::StageContext;
use crate::stages;

/// Signature of a stage.
pub type StageFn = fn(PackingList, &StageContext<'_>) -> PackingList;

/// A named pipeline stage.
#[derive(Clone, Copy)]
pub struct Stage {
    name: &'static str,
    run: StageFn,
}

impl Stage {
    /// Name a stage function.
    pub fn new(name: &'static str, run: StageFn) -> Self {
        Self { name, run }
    }

    /// The stage name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the stage.
    pub fn run(&self, list: PackingList, ctx: &StageContext<'_>) -> PackingList {
        (self.run)(list, ctx)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Stage").field(&self.name).finish()
    }
}

/// Ordered stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// The twelve standard stages.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Stage::new("essentials", stages::essentials::run),
                Stage::new("temperature_clothing", stages::clothing::run),
                Stage::new("conditions", stages::injection::conditions),
                Stage::new("keywords", stages::injection::keywords),
                Stage::new("transportation", stages::injection::transportation),
                Stage::new("accommodation", stages::injection::accommodation),
                Stage::new("combinations", stages::injection::combinations),
                Stage::new("replacements", stages::resolution::replacements),
                Stage::new("conflicts", stages::resolution::conflicts),
                Stage::new("rescale", stages::sizing::rescale),
                Stage::new("prune", stages::sizing::prune),
                Stage::new("finalize", stages::sizing::finalize),
            ],
        }
    }

    /// The stages, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Stage names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Run every stage from an empty list.
    pub fn run(&self, ctx: &StageContext<'_>) -> PackingList {
        self.stages.iter().fold(PackingList::new(), |list, stage| {
            let list = stage.run(list, ctx);
            tracing::debug!(
                stage = stage.name(),
                categories = list.category_count(),
                items = list.total_items(),
                "stage complete"
            );
            list
        })
    }
}
