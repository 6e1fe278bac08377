use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn activities() -> SectionItems {
    section(vec![
        (
            "hiking",
            category(vec![
                ("Hiking boots", single().essential()),
                ("Daypack", single()),
                ("Trekking poles", single()),
                ("Moisture-wicking socks", per_night(1.0).with_max(7)),
                ("Trail snacks", per_night(0.5).with_max(6)),
                ("Blister plasters", single()),
            ]),
        ),
        (
            "swimming",
            category(vec![
                ("Swimsuit", per_night(0.2).essential().with_min(1).with_max(3)),
                ("Goggles", single()),
                ("Swim towel", single()),
            ]),
        ),
        (
            "beach",
            category(vec![
                ("Beach towel", single()),
                ("Sunscreen SPF 50", single().essential()),
                ("Beach bag", single()),
                ("Flip-flops", single()),
            ]),
        ),
        (
            "skiing",
            category(vec![
                ("Ski jacket", single().essential()),
                ("Ski pants", single().essential()),
                ("Ski goggles", single()),
                ("Ski socks", per_night(1.0).with_max(7)),
                ("Helmet", single()),
                ("Neck gaiter", single()),
            ]),
        ),
        (
            "business",
            category(vec![
                (
                    "Dress shirts",
                    per_night(1.0)
                        .with_max(7)
                        .with_description("One per meeting day"),
                ),
                ("Suit", single().essential()),
                ("Dress shoes", single()),
                ("Ties", per_night(0.5).with_max(3)),
                ("Laptop", single().essential()),
                ("Laptop charger", single().essential()),
                ("Notebook and pens", single()),
            ]),
        ),
        (
            "photography",
            category(vec![
                ("Camera", single().essential()),
                ("Spare batteries", per_night(0.3).with_min(1).with_max(3)),
                ("Extra storage media", single()),
                ("Lens cloth", single()),
                ("Tripod", single()),
            ]),
        ),
        (
            "fitness",
            category(vec![
                ("Workout clothes", per_night(0.5).with_min(1).with_max(4)),
                ("Running shoes", single()),
                ("Resistance band", single()),
            ]),
        ),
        (
            "nightlife",
            category(vec![
                ("Going-out outfit", per_night(0.3).with_min(1).with_max(3)),
                ("Evening shoes", single()),
                ("Small crossbody bag", single()),
            ]),
        ),
        (
            "sightseeing",
            category(vec![
                ("Daypack", single()),
                ("Comfortable walking shoes", single()),
                ("Portable phone battery", single()),
                ("City map", single()),
            ]),
        ),
        (
            "snorkeling",
            category(vec![
                ("Snorkel mask", single().essential()),
                ("Fins", single()),
                ("Rash guard", single()),
                ("Reef-safe sunscreen", single()),
            ]),
        ),
        (
            "cycling",
            category(vec![
                ("Cycling helmet", single().essential()),
                ("Padded shorts", per_night(0.3).with_min(1).with_max(3)),
                ("Bike lights", single()),
                ("Repair kit", single()),
            ]),
        ),
    ])
}
