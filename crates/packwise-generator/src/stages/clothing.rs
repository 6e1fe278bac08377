//! Stage 2: average-temperature clothing.

use packwise_core::{GeneratedItem, PackingList, RuleGroup};
use packwise_rules::TemperatureBand;

use crate::context::StageContext;

/// Inject the clothing of the band containing the rounded average forecast
/// temperature, or the configured default without a forecast.
pub fn run(mut list: PackingList, ctx: &StageContext<'_>) -> PackingList {
    let avg_temp = ctx
        .trip
        .average_temperature()
        .unwrap_or(ctx.config.default_avg_temp);
    let band = TemperatureBand::classify(avg_temp);
    let rule = ctx.rules.band_rule(band);
    debug_assert!(rule.is_some(), "no clothing declared for band {band}");
    let Some(rule) = rule else {
        tracing::error!(%band, "no clothing declared for temperature band");
        return list;
    };

    let reason = band.reason(avg_temp);
    let category = &ctx.rules.temperature_category;
    for (name, item_rule) in &rule.items {
        let item = GeneratedItem::from_rule(
            item_rule,
            ctx.trip.nights,
            &reason,
            RuleGroup::TemperatureClothing,
        );
        list.insert(category, name, item);
    }
    tracing::debug!(%band, avg_temp, "temperature band selected");
    list
}
