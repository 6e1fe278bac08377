//! Stage 1: essentials.

use packwise_catalog::CatalogSection;
use packwise_core::{GeneratedItem, PackingList, RuleGroup};

use crate::context::StageContext;

const REASON: &str = "essential item";

/// Add every essentials-catalog item, minus what the accommodation provides,
/// with the accommodation's quantity adjustments applied.
pub fn run(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    let policy = ctx.rules.policy_for(ctx.trip.accommodation);
    let mut skipped = 0usize;
    for (category, items) in ctx.catalog.section(CatalogSection::Essentials) {
        for (name, rule) in items {
            let mut item =
                GeneratedItem::from_rule(rule, ctx.trip.nights, REASON, RuleGroup::Essentials);
            if let Some(policy) = policy {
                if policy.skips(name) {
                    skipped += 1;
                    continue;
                }
                let adjusted = policy.adjust(category, name, item.quantity);
                item.quantity = item.limits.clamp(adjusted);
            }
            list.insert(category, name, item);
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "essentials provided by accommodation");
    }
    list
}
