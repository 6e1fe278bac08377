use packwise_catalog::CatalogSection;
use packwise_core::{
    Accommodation, AccommodationOption, RuleGroup, TransportOption, Transportation, Vocabulary,
};

use super::{per_night, single, CARRY_ON_ALTERNATIVES};
use crate::rule::ConditionalRule;
use crate::trigger::Trigger;

fn transportation_category(mode: Transportation) -> &'static str {
    match mode {
        Transportation::Plane => "flight_essentials",
        Transportation::Car => "car_essentials",
        Transportation::Train => "train_travel",
        Transportation::Bus => "bus_travel",
        Transportation::Cruise => "cruise_essentials",
    }
}

/// Base items per mode first, then option sub-rules.
pub(crate) fn transportation() -> Vec<ConditionalRule> {
    let group = RuleGroup::Transportation;
    let mut rules: Vec<ConditionalRule> = Transportation::all()
        .iter()
        .map(|mode| {
            ConditionalRule::new(
                &format!("transportation.{}", mode.as_str()),
                group,
                Trigger::Transportation(*mode),
                transportation_category(*mode),
            )
            .with_reason(format!("{} travel", mode.as_str()))
            .from_catalog(CatalogSection::Transportation, mode.as_str())
        })
        .collect();

    rules.extend([
        ConditionalRule::new(
            "transportation.international_flight",
            group,
            Trigger::InternationalFlight,
            "international_travel",
        )
        .with_reason("international flight")
        .with_items(vec![
            (
                "Passport with 6+ months validity",
                single()
                    .essential()
                    .with_description("Many countries refuse entry otherwise"),
            ),
            ("Visa documents", single()),
            ("Travel adapter", single()),
            ("Travel insurance policy", single()),
            ("Copies of important documents", single()),
        ]),
        ConditionalRule::new(
            "transportation.long_haul_flight",
            group,
            Trigger::LongHaulFlight,
            "comfort",
        )
        .with_reason("long-haul flight")
        .from_catalog(CatalogSection::SpecialNeeds, "long_flight"),
        ConditionalRule::new(
            "transportation.carry_on_only",
            group,
            Trigger::Transportation(Transportation::Plane)
                .and(Trigger::TransportOption(TransportOption::CarryOnOnly)),
            CARRY_ON_ALTERNATIVES,
        )
        .with_reason("cabin bag only")
        .with_items(vec![
            (
                "Travel-size toiletry bottles",
                single().with_description("100 ml or less each"),
            ),
            ("Solid hair-wash bar", single()),
            ("Packing cubes", single()),
            ("Compression bags", single()),
        ]),
        ConditionalRule::new(
            "transportation.road_trip",
            group,
            Trigger::Transportation(Transportation::Car)
                .and(Trigger::TransportOption(TransportOption::RoadTrip)),
            "road_trip",
        )
        .with_reason("road trip")
        .with_items(vec![
            ("Paper road map", single()),
            ("Cooler bag", single()),
            ("Offline playlists", single()),
        ]),
        ConditionalRule::new(
            "transportation.rental",
            group,
            Trigger::Transportation(Transportation::Car)
                .and(Trigger::TransportOption(TransportOption::Rental)),
            "car_rental",
        )
        .with_reason("rental vehicle")
        .from_catalog(CatalogSection::SpecialNeeds, "rental_vehicle"),
        ConditionalRule::new(
            "transportation.overnight",
            group,
            Trigger::Any(vec![
                Trigger::Transportation(Transportation::Train),
                Trigger::Transportation(Transportation::Bus),
            ])
            .and(Trigger::TransportOption(TransportOption::Overnight)),
            "overnight_travel",
        )
        .with_reason("overnight journey")
        .with_items(vec![
            ("Travel blanket", single()),
            ("Earplugs", single()),
            ("Eye mask", single()),
        ]),
    ]);
    rules
}

fn accommodation_category(mode: Accommodation) -> &'static str {
    match mode {
        Accommodation::Hotel => "hotel_stay",
        Accommodation::Hostel => "hostel_essentials",
        Accommodation::Camping => "camping_gear",
        Accommodation::Airbnb => "rental_stay",
        Accommodation::FriendsFamily => "guest_stay",
    }
}

/// Base items per mode first, then option sub-rules.
pub(crate) fn accommodation() -> Vec<ConditionalRule> {
    let group = RuleGroup::Accommodation;
    let mut rules: Vec<ConditionalRule> = Accommodation::all()
        .iter()
        .map(|mode| {
            ConditionalRule::new(
                &format!("accommodation.{}", mode.as_str()),
                group,
                Trigger::Accommodation(*mode),
                accommodation_category(*mode),
            )
            .with_reason(format!("{} stay", mode.as_str().replace('_', " ")))
            .from_catalog(CatalogSection::Accommodation, mode.as_str())
        })
        .collect();

    let option = |id: &str, opt: AccommodationOption, target: &str, reason: &str| {
        ConditionalRule::new(id, group, Trigger::AccommodationOption(opt), target)
            .with_reason(reason)
    };
    rules.extend([
        option(
            "accommodation.luxury",
            AccommodationOption::Luxury,
            "luxury_stay",
            "luxury hotel",
        )
        .with_items(vec![
            ("Formal evening wear", single()),
            ("Dress shoes", single()),
            ("Jewelry pouch", single()),
        ]),
        option(
            "accommodation.business",
            AccommodationOption::Business,
            "business_items",
            "business hotel",
        )
        .with_items(vec![("Garment bag", single()), ("Travel steamer", single())]),
        option(
            "accommodation.resort",
            AccommodationOption::Resort,
            "resort_wear",
            "resort stay",
        )
        .with_items(vec![
            ("Swimsuit", per_night(0.2).with_min(1).with_max(3)),
            ("Resort casual outfits", per_night(0.5).with_max(5)),
            ("Flip-flops", single()),
            ("Beach cover-up", single()),
        ]),
        option(
            "accommodation.dorm",
            AccommodationOption::Dorm,
            "hostel_essentials",
            "dorm room",
        )
        .with_items(vec![("Sleeping bag liner", single()), ("Small flashlight", single())]),
        option(
            "accommodation.backcountry",
            AccommodationOption::Backcountry,
            "backcountry",
            "backcountry camping",
        )
        .with_items(vec![
            ("Bear canister", single()),
            ("Water purification tablets", single().essential()),
            ("Emergency whistle", single()),
            ("Map and compass", single()),
        ]),
        option(
            "accommodation.self_catering",
            AccommodationOption::SelfCatering,
            "self_catering",
            "self-catering stay",
        )
        .with_items(vec![
            ("Basic spice kit", single()),
            ("Reusable food containers", single()),
            ("Dish cloth", single()),
        ]),
    ]);
    rules
}

/// Explicit mode pairs first, then the derived combinations.
pub(crate) fn combinations() -> Vec<ConditionalRule> {
    let group = RuleGroup::Combinations;
    let pair = |mode: Transportation, stay: Accommodation| {
        ConditionalRule::new(
            &format!("combination.{}_{}", mode.as_str(), stay.as_str()),
            group,
            Trigger::Transportation(mode).and(Trigger::Accommodation(stay)),
            "travel_logistics",
        )
        .with_reason(format!(
            "{} travel with {} stay",
            mode.as_str(),
            stay.as_str().replace('_', " ")
        ))
    };
    vec![
        pair(Transportation::Car, Accommodation::Hotel)
            .with_items(vec![("Hotel parking details", single())]),
        pair(Transportation::Plane, Accommodation::Camping).with_items(vec![
            ("Checked gear duffel", single()),
            (
                "Stove fuel plan",
                single().with_description("Fuel cannot fly; buy it on arrival"),
            ),
        ]),
        pair(Transportation::Train, Accommodation::Hostel)
            .with_items(vec![("Directions from the station", single())]),
        pair(Transportation::Car, Accommodation::Airbnb)
            .with_items(vec![("Parking instructions from host", single())]),
        pair(Transportation::Cruise, Accommodation::Hotel)
            .with_items(vec![("Pre-cruise hotel booking", single())]),
        ConditionalRule::new(
            "combination.international_flight_hotel",
            group,
            Trigger::InternationalFlight.and(Trigger::Accommodation(Accommodation::Hotel)),
            "airport_transfer",
        )
        .with_reason("international flight with hotel stay")
        .with_items(vec![
            ("Airport transfer booking", single()),
            ("Hotel address in local language", single()),
            ("Local taxi app", single()),
        ]),
        ConditionalRule::new(
            "combination.car_camping",
            group,
            Trigger::Transportation(Transportation::Car)
                .and(Trigger::Accommodation(Accommodation::Camping)),
            "car_camping",
        )
        .with_reason("car camping")
        .with_items(vec![
            ("Car camping tent", single().essential()),
            ("Camping chairs", single()),
            ("Cooler", single()),
            ("Inflatable mattress", single()),
            ("Camp table", single()),
        ]),
        ConditionalRule::new(
            "combination.plane_hostel",
            group,
            Trigger::Transportation(Transportation::Plane)
                .and(Trigger::Accommodation(Accommodation::Hostel)),
            "security",
        )
        .with_reason("flying to a hostel")
        .with_items(vec![
            ("Luggage lock", single()),
            ("Money belt", single()),
            ("Anti-theft daypack", single()),
        ]),
        ConditionalRule::new(
            "combination.international_flight",
            group,
            Trigger::InternationalFlight,
            "international_essentials",
        )
        .with_reason("international flight")
        .with_items(vec![
            ("Local currency", single()),
            ("Translation app", single()),
            ("Embassy contact info", single()),
            ("International roaming plan", single()),
        ]),
    ]
}
