use packwise_core::{Accommodation, KeywordSet, TransportOption, Transportation};

use super::CARRY_ON_ALTERNATIVES;
use crate::policy::{
    AccommodationPolicy, CarryOnRestriction, Choice, ConflictRule, QuantityAdjustment,
};
use crate::rule::ReplacementRule;

pub(crate) fn replacements() -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new(
            "replacement.warm_outerwear",
            &["Heavy winter coat", "Winter jacket", "Ski jacket"],
            &["Light jacket"],
        ),
        ReplacementRule::new(
            "replacement.passport",
            &["Passport with 6+ months validity"],
            &["Passport/ID"],
        ),
        ReplacementRule::new(
            "replacement.car_camping",
            &["Car camping tent"],
            &["Backpacking tent", "Sleeping pad"],
        ),
        ReplacementRule::new(
            "replacement.sunscreen",
            &["Sunscreen SPF 50"],
            &["Sunscreen SPF 30"],
        ),
        ReplacementRule::new(
            "replacement.laundry",
            &["Laundry detergent pods"],
            &["Laundry detergent sheets"],
        ),
    ]
}

pub(crate) fn conflicts() -> Vec<ConflictRule> {
    use Choice::{Accommodation as Stay, Transportation as Mode};
    vec![
        ConflictRule::new(Mode(Transportation::Plane), &["car"]),
        ConflictRule::new(Mode(Transportation::Car), &["flight", "boarding pass"]),
        ConflictRule::new(Mode(Transportation::Train), &["flight"]),
        ConflictRule::new(Mode(Transportation::Bus), &["flight"]),
        ConflictRule::new(Mode(Transportation::Cruise), &["flight"]),
        ConflictRule::new(Stay(Accommodation::Camping), &["hotel"]),
        ConflictRule::new(Stay(Accommodation::Hotel), &["camping", "tent"]),
    ]
}

pub(crate) fn accommodation_policies() -> Vec<AccommodationPolicy> {
    vec![
        AccommodationPolicy::new(
            Accommodation::Hotel,
            &["towel", "shampoo", "soap", "hair dryer"],
        )
        .with_adjustment(QuantityAdjustment::scale_category("clothes", 0.8)),
        AccommodationPolicy::new(Accommodation::Camping, &["hair dryer", "iron"])
            .with_adjustment(QuantityAdjustment::scale_items(&["socks", "underwear"], 1.2)),
        AccommodationPolicy::new(Accommodation::Hostel, &[]).with_adjustment(
            QuantityAdjustment::cap_items(&["cash", "jewelry", "laptop", "camera"], 1),
        ),
        AccommodationPolicy::new(Accommodation::FriendsFamily, &["towel"]),
    ]
}

pub(crate) fn carry_on() -> CarryOnRestriction {
    CarryOnRestriction {
        option: TransportOption::CarryOnOnly,
        alternatives_category: CARRY_ON_ALTERNATIVES.to_string(),
        removals: KeywordSet::new(["shampoo", "body wash", "full-size"]),
    }
}
