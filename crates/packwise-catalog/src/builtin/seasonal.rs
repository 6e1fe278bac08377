use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn seasonal() -> SectionItems {
    section(vec![
        (
            "winter",
            category(vec![
                ("Insulated gloves", single().essential()),
                ("Warm hat", single().essential()),
                ("Neck warmer", single()),
                ("Thermal socks", per_night(0.5).with_min(2).with_max(6)),
                (
                    "Hand warmers",
                    per_night(0.5)
                        .with_max(10)
                        .with_description("Single-use heat packs"),
                ),
            ]),
        ),
        (
            "summer",
            category(vec![
                ("Sunscreen SPF 30", single().essential()),
                ("Sunglasses", single()),
                ("Sun hat", single()),
                ("Reusable water bottle", single()),
                ("Cooling towel", single()),
            ]),
        ),
        (
            "rainy",
            category(vec![
                ("Rain jacket", single().essential()),
                ("Compact umbrella", single()),
                ("Waterproof shoes", single()),
                ("Dry bag", single().with_description("Keeps electronics dry")),
            ]),
        ),
    ])
}
