//! Stages 3 to 7: conditional rule injection.
//!
//! Each stage applies one or more rule groups in declaration order. Items
//! injected twice into the same category merge.

use packwise_core::{PackingList, RuleGroup};

use crate::context::StageContext;

fn apply_groups(
    mut list: PackingList,
    ctx: &StageContext<'_>,
    groups: &[RuleGroup],
) -> PackingList {
    for group in groups {
        let fired = ctx.apply_rules(&mut list, ctx.rules.group(*group));
        tracing::debug!(%group, fired, "rule group applied");
    }
    list
}

/// Stage 3: weather, activity, trip-type and duration rules.
pub fn conditions(list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    apply_groups(
        list,
        ctx,
        &[
            RuleGroup::Weather,
            RuleGroup::Activities,
            RuleGroup::TripTypes,
            RuleGroup::Duration,
        ],
    )
}

/// Stage 4: notes keyword scan.
pub fn keywords(list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    apply_groups(list, ctx, &[RuleGroup::Keywords])
}

/// Stage 5: transportation base items and sub-rules.
///
/// With `enforce_carry_on_restrictions` set, items the cabin-bag
/// alternatives replace are removed once the alternatives are in.
pub fn transportation(list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    let mut list = apply_groups(list, ctx, &[RuleGroup::Transportation]);
    let carry_on = &ctx.rules.carry_on;
    if ctx.config.enforce_carry_on_restrictions && carry_on.applies(ctx.trip) {
        let removed = list.remove_matching(&carry_on.removals);
        tracing::debug!(removed = removed.len(), "carry-on restriction enforced");
    }
    list
}

/// Stage 6: accommodation base items and sub-rules.
pub fn accommodation(list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    apply_groups(list, ctx, &[RuleGroup::Accommodation])
}

/// Stage 7: explicit pair rules and derived combinations.
pub fn combinations(list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    apply_groups(list, ctx, &[RuleGroup::Combinations])
}
