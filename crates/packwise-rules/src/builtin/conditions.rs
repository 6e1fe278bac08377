use packwise_catalog::CatalogSection;
use packwise_core::{Activity, RuleGroup, TripType, Vocabulary};

use super::{per_night, single};
use crate::rule::ConditionalRule;
use crate::trigger::Trigger;
use crate::vocabulary::{COLD_DAY_BELOW, HOT_DAY_ABOVE, VARIABLE_SPREAD};

const WEATHER_GEAR: &str = "weather_gear";

pub(crate) fn weather() -> Vec<ConditionalRule> {
    let group = RuleGroup::Weather;
    vec![
        ConditionalRule::new(
            "weather.cold",
            group,
            Trigger::AnyTempBelow(COLD_DAY_BELOW),
            WEATHER_GEAR,
        )
        .with_reason("cold days in the forecast")
        .from_catalog(CatalogSection::Seasonal, "winter"),
        ConditionalRule::new(
            "weather.hot",
            group,
            Trigger::AnyTempAbove(HOT_DAY_ABOVE),
            WEATHER_GEAR,
        )
        .with_reason("hot days in the forecast")
        .from_catalog(CatalogSection::Seasonal, "summer"),
        ConditionalRule::new("weather.rainy", group, Trigger::RainLikely, WEATHER_GEAR)
            .with_reason("rain in the forecast")
            .from_catalog(CatalogSection::Seasonal, "rainy"),
        ConditionalRule::new(
            "weather.variable",
            group,
            Trigger::TemperatureSwing(VARIABLE_SPREAD),
            WEATHER_GEAR,
        )
        .with_reason("variable temperatures")
        .with_items(vec![
            ("Packable light jacket", single()),
            (
                "Layering pieces",
                per_night(0.3)
                    .with_min(1)
                    .with_max(4)
                    .with_description("Thin layers to add or shed"),
            ),
        ]),
    ]
}

fn activity_category(activity: Activity) -> &'static str {
    match activity {
        Activity::Hiking => "hiking_gear",
        Activity::Swimming => "swimming",
        Activity::Beach => "beach_gear",
        Activity::Skiing => "ski_gear",
        Activity::Business => "business_items",
        Activity::Photography => "photography",
        Activity::Fitness => "fitness",
        Activity::Nightlife => "nightlife",
        Activity::Sightseeing => "sightseeing",
        Activity::Snorkeling => "snorkeling",
        Activity::Cycling => "cycling",
    }
}

pub(crate) fn activities() -> Vec<ConditionalRule> {
    Activity::all()
        .iter()
        .map(|activity| {
            ConditionalRule::new(
                &format!("activity.{}", activity.as_str()),
                RuleGroup::Activities,
                Trigger::Activity(*activity),
                activity_category(*activity),
            )
            .with_reason(activity.as_str())
            .from_catalog(CatalogSection::Activities, activity.as_str())
        })
        .collect()
}

pub(crate) fn trip_types() -> Vec<ConditionalRule> {
    TripType::all()
        .iter()
        .map(|trip_type| {
            let rule = ConditionalRule::new(
                &format!("trip_type.{}", trip_type.as_str()),
                RuleGroup::TripTypes,
                Trigger::TripType(*trip_type),
                trip_type_category(*trip_type),
            )
            .with_reason(format!("{} trip", trip_type.as_str()));
            match trip_type {
                TripType::Business => rule.with_items(vec![
                    ("Laptop", single().essential()),
                    ("Laptop charger", single().essential()),
                    ("Portfolio folder", single()),
                    ("Notebook and pens", single()),
                ]),
                TripType::Leisure => rule.with_items(vec![
                    ("Book or e-reader", single()),
                    ("Travel journal", single()),
                    ("Travel games", single()),
                ]),
                TripType::Adventure => rule.with_items(vec![
                    ("Multi-tool", single()),
                    ("Headlamp", single()),
                    ("Emergency blanket", single()),
                    ("Trail first aid kit", single().essential()),
                ]),
                TripType::Family => rule.with_items(vec![
                    ("Kids' entertainment", single()),
                    ("Wet wipes", per_night(0.3).with_min(1).with_max(5)),
                    ("Family snacks", per_night(1.0).with_max(10)),
                    ("Children's medications", single()),
                ]),
                TripType::Beach => rule.with_items(vec![
                    ("Beach towel", single()),
                    ("Sunscreen SPF 50", single().essential()),
                    ("Beach umbrella", single()),
                ]),
                TripType::City => rule.with_items(vec![
                    ("Day bag", single()),
                    ("Portable phone battery", single()),
                    ("Transit pass", single()),
                ]),
                TripType::Romantic => rule.with_items(vec![
                    ("Dressy outfit", per_night(0.3).with_min(1).with_max(3)),
                    ("Perfume/cologne", single()),
                ]),
                TripType::Backpacking => rule.with_items(vec![
                    ("Backpack rain cover", single()),
                    ("Quick-dry towel", single()),
                    ("Padlock", single()),
                    ("Travel clothesline", single()),
                ]),
            }
        })
        .collect()
}

fn trip_type_category(trip_type: TripType) -> &'static str {
    match trip_type {
        TripType::Business => "business_items",
        TripType::Leisure => "leisure",
        TripType::Adventure => "adventure_gear",
        TripType::Family => "family",
        TripType::Beach => "beach_gear",
        TripType::City => "city",
        TripType::Romantic => "special_occasion",
        TripType::Backpacking => "backpacking",
    }
}

const MISCELLANEOUS: &str = "miscellaneous";

pub(crate) fn duration() -> Vec<ConditionalRule> {
    let group = RuleGroup::Duration;
    vec![
        ConditionalRule::new("duration.weekend", group, Trigger::NightsAtMost(3), MISCELLANEOUS)
            .with_reason("weekend trip")
            .with_items(vec![("Weekender bag", single())]),
        ConditionalRule::new(
            "duration.week",
            group,
            Trigger::NightsAbove(3).and(Trigger::NightsAtMost(7)),
            MISCELLANEOUS,
        )
        .with_reason("week-long trip")
        .with_items(vec![("Laundry bag", single()), ("Travel detergent", single())]),
        ConditionalRule::new("duration.extended", group, Trigger::NightsAbove(7), MISCELLANEOUS)
            .with_reason("extended trip")
            .with_items(vec![
                (
                    "Laundry detergent sheets",
                    per_night(0.25)
                        .with_min(1)
                        .with_max(10)
                        .with_description("One sheet per load"),
                ),
                ("Sewing kit", single()),
                ("Extra packing cubes", single()),
            ]),
    ]
}

/// One rule per notes keyword, or two when a keyword pulls in both a
/// catalog category and extra inline items.
pub(crate) fn keywords() -> Vec<ConditionalRule> {
    let group = RuleGroup::Keywords;
    let keyword = |id: &str, word: &str, target: &str| {
        ConditionalRule::new(id, group, Trigger::notes_mention(word), target)
            .with_reason(format!("notes mention '{word}'"))
    };
    vec![
        keyword("keyword.wedding", "wedding", "formal_wear")
            .from_catalog(CatalogSection::SpecialNeeds, "formal_event"),
        keyword("keyword.wedding_gift", "wedding", "formal_wear")
            .with_items(vec![("Wedding gift", single().essential())]),
        keyword("keyword.conference", "conference", "conference")
            .from_catalog(CatalogSection::SpecialNeeds, "conference"),
        keyword("keyword.baby", "baby", "baby_items")
            .from_catalog(CatalogSection::SpecialNeeds, "baby"),
        keyword("keyword.formal", "formal", "formal_wear")
            .from_catalog(CatalogSection::SpecialNeeds, "formal_event"),
        keyword("keyword.rental_car", "rental car", "car_rental")
            .from_catalog(CatalogSection::SpecialNeeds, "rental_vehicle"),
        keyword("keyword.long_flight", "long flight", "comfort")
            .from_catalog(CatalogSection::SpecialNeeds, "long_flight"),
        keyword("keyword.medication", "medication", "health")
            .from_catalog(CatalogSection::SpecialNeeds, "medical"),
        keyword("keyword.gym", "gym", "fitness")
            .from_catalog(CatalogSection::Activities, "fitness"),
    ]
}
