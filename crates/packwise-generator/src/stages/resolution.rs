//! Stages 8 and 9: replacement and contextual conflict resolution.

use packwise_core::PackingList;

use crate::context::StageContext;

/// Stage 8: for each replacement rule whose replacing item is present,
/// remove every item matching its replaced fragments.
pub fn replacements(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    for rule in &ctx.rules.replacements {
        if !rule.applies(&list) {
            continue;
        }
        let removed = list.remove_matching(&rule.replaced);
        if !removed.is_empty() {
            tracing::debug!(rule = %rule.id, removed = removed.len(), "items replaced");
        }
    }
    list
}

/// Stage 9: remove items contradicting the trip's transportation or
/// accommodation.
pub fn conflicts(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    for conflict in ctx.rules.conflicts_for(ctx.trip) {
        let removed = list.remove_matching(&conflict.keywords);
        if !removed.is_empty() {
            tracing::debug!(
                choice = %conflict.when,
                removed = removed.len(),
                "conflicting items removed"
            );
        }
    }
    list
}
