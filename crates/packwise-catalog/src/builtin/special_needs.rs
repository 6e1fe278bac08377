use super::{category, per_night, section, single};
use crate::catalog::SectionItems;

pub(crate) fn special_needs() -> SectionItems {
    section(vec![
        (
            "baby",
            category(vec![
                (
                    "Diapers",
                    per_night(6.0)
                        .essential()
                        .with_max(60)
                        .with_description("About six a day"),
                ),
                ("Baby wipes", per_night(0.5).with_min(1).with_max(6)),
                ("Formula/baby food", per_night(1.0).with_max(14)),
                ("Baby bottles", single()),
                ("Baby sling", single()),
                ("Changing mat", single()),
            ]),
        ),
        (
            "formal_event",
            category(vec![
                ("Formal outfit", single().essential()),
                ("Dress shoes", single()),
                ("Accessories", single()),
                ("Garment bag", single()),
            ]),
        ),
        (
            "conference",
            category(vec![
                ("Name badge holder", single()),
                ("Presentation clicker", single()),
                ("Notebook and pens", single()),
                ("Laptop", single().essential()),
            ]),
        ),
        (
            "medical",
            category(vec![
                (
                    "Prescription medications",
                    per_night(1.0).essential().with_description("Daily doses plus spare"),
                ),
                ("Doctor's letter", single()),
                ("Pill organizer", single()),
            ]),
        ),
        (
            "rental_vehicle",
            category(vec![
                ("Driver's license", single().essential()),
                ("International driving permit", single()),
                ("Rental booking confirmation", single().essential()),
            ]),
        ),
        (
            "long_flight",
            category(vec![
                ("Neck pillow", single()),
                ("Eye mask", single()),
                ("Compression socks", single()),
                ("Earplugs", single()),
            ]),
        ),
    ])
}
