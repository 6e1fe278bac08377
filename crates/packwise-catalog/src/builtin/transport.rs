use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn transportation() -> SectionItems {
    section(vec![
        (
            "plane",
            category(vec![
                ("Boarding pass", single().essential()),
                ("Cabin bag", single()),
                ("Travel pillow", single()),
                (
                    "Clear liquids bag",
                    single().with_description("1 L resealable bag for security"),
                ),
                ("Noise-cancelling headphones", single()),
            ]),
        ),
        (
            "car",
            category(vec![
                ("Driver's license", single().essential()),
                ("Phone mount", single()),
                ("Road snacks", per_night(0.5).with_max(5)),
                ("Emergency roadside kit", single()),
                ("Car phone charger", single()),
            ]),
        ),
        (
            "train",
            category(vec![
                ("Train tickets", single().essential()),
                ("Snacks for the journey", single()),
                ("Book or e-reader", single()),
            ]),
        ),
        (
            "bus",
            category(vec![
                ("Bus tickets", single().essential()),
                ("Neck pillow", single()),
                ("Motion sickness tablets", single()),
            ]),
        ),
        (
            "cruise",
            category(vec![
                ("Cruise documents", single().essential()),
                ("Motion sickness tablets", single()),
                ("Lanyard for cabin key", single()),
                ("Formal night outfit", single()),
                (
                    "Power strip",
                    single().with_description("Non-surge-protected, as cruise lines require"),
                ),
            ]),
        ),
    ])
}
