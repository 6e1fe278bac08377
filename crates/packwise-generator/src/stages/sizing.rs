//! Stages 10 to 12: rescale, prune, finalize.

use packwise_core::{scale_quantity, PackingList};

use crate::config::PruneStrategy;
use crate::context::StageContext;

/// Stage 10: scale every quantity above 1 by the trip-duration factor, then
/// re-clamp to the item's declared bounds.
pub fn rescale(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    let factor = ctx.config.duration_factor(ctx.trip.nights);
    if factor == 1.0 {
        return list;
    }
    let mut changed = 0usize;
    for item in list.items_mut().filter(|i| i.quantity > 1) {
        let scaled = item.limits.clamp(scale_quantity(item.quantity, factor));
        if scaled != item.quantity {
            item.quantity = scaled;
            changed += 1;
        }
    }
    tracing::debug!(factor, changed, "quantities rescaled");
    list
}

/// Stage 11: when the list is too long, halve the non-essential items of
/// every oversized category. Lists within the limit pass through untouched.
///
/// Candidates are taken in alphabetical item-name order (the list is a
/// `BTreeMap`), stable-sorted by rule weight under `RulePriority`.
pub fn prune(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    let config = ctx.config;
    let total = list.total_items();
    if total <= config.max_total_items {
        return list;
    }
    let priority = &ctx.rules.priority;
    let mut pruned = 0usize;
    for (category, items) in list.categories_mut() {
        if items.len() <= config.oversized_category_items {
            continue;
        }
        let mut candidates: Vec<(String, u8)> = items
            .iter()
            .filter(|(_, item)| !item.essential)
            .map(|(name, item)| (name.clone(), priority.weight_of(item.source)))
            .collect();
        if config.prune_strategy == PruneStrategy::RulePriority {
            // stable: equal weights keep key order
            candidates.sort_by_key(|(_, weight)| *weight);
        }
        let cut = candidates.len() / 2;
        for (name, _) in candidates.into_iter().take(cut) {
            items.remove(&name);
        }
        tracing::debug!(category, removed = cut, "oversized category pruned");
        pruned += cut;
    }
    tracing::debug!(total, pruned, strategy = %config.prune_strategy, "list pruned");
    list
}

/// Stage 12: drop empty categories.
pub fn finalize(mut list: PackingList, _ctx: &StageContext<'_>) -> PackingList {
    let dropped = list.drop_empty_categories();
    if dropped > 0 {
        tracing::debug!(dropped, "empty categories dropped");
    }
    list
}
