use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn accommodation() -> SectionItems {
    section(vec![
        (
            "hotel",
            category(vec![
                ("Hotel reservation confirmation", single().essential()),
                ("Slippers", single()),
                ("Small bills for tipping", single()),
            ]),
        ),
        (
            "hostel",
            category(vec![
                ("Padlock", single().essential()),
                ("Quick-dry towel", single()),
                ("Shower flip-flops", single()),
                ("Earplugs", single()),
                ("Eye mask", single()),
            ]),
        ),
        (
            "camping",
            category(vec![
                ("Backpacking tent", single().essential()),
                ("Sleeping bag", single().essential()),
                ("Sleeping pad", single()),
                ("Headlamp", single()),
                ("Camp stove", single()),
                ("Water filter", single()),
                ("Biodegradable soap", single()),
            ]),
        ),
        (
            "airbnb",
            category(vec![
                ("Check-in instructions", single().essential()),
                (
                    "Laundry detergent pods",
                    per_night(0.15).with_min(1).with_max(3),
                ),
                ("Reusable shopping bag", single()),
            ]),
        ),
        (
            "friends_family",
            category(vec![
                ("Host gift", single().with_description("Something from home")),
                ("Own towel", single()),
                ("House slippers", single()),
            ]),
        ),
    ])
}
