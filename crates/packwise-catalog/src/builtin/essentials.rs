use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn essentials() -> SectionItems {
    section(vec![
        (
            "documents",
            category(vec![
                ("Passport/ID", single().essential()),
                ("Wallet & payment methods", single().essential()),
                ("Travel insurance details", single()),
                ("Emergency contacts", single()),
                (
                    "Cash envelopes",
                    per_night(0.3)
                        .with_min(1)
                        .with_max(3)
                        .with_description("Small bills split across bags"),
                ),
            ]),
        ),
        (
            "clothes",
            category(vec![
                ("Underwear", per_night(1.0).essential().with_max(14)),
                ("Socks", per_night(1.0).essential().with_max(14)),
                ("T-shirts", per_night(0.8).with_min(1).with_max(8)),
                ("Pants/trousers", per_night(0.3).with_min(1).with_max(4)),
                ("Sleepwear", per_night(0.2).with_min(1).with_max(2)),
                (
                    "Comfortable walking shoes",
                    single().essential().with_description("Broken-in pair"),
                ),
            ]),
        ),
        (
            "toiletries",
            category(vec![
                ("Toothbrush", single().essential()),
                ("Toothpaste", single().essential()),
                ("Deodorant", single().essential()),
                ("Shampoo", single()),
                ("Body wash/soap", single()),
                ("Bath towel", single()),
                ("Hairbrush/comb", single()),
                ("Travel hair dryer", single()),
                ("Travel iron", single()),
                ("Razor", single()),
                ("Lip balm", single()),
            ]),
        ),
        (
            "electronics",
            category(vec![
                ("Phone", single().essential()),
                ("Phone charger", single().essential()),
                ("Power bank", single()),
                ("Headphones", single()),
            ]),
        ),
        (
            "health",
            category(vec![
                (
                    "Personal medications",
                    per_night(1.0)
                        .with_description("One day's supply per night plus spare"),
                ),
                ("Basic first aid kit", single()),
                ("Pain relievers", single()),
                ("Hand sanitizer", single()),
            ]),
        ),
    ])
}
