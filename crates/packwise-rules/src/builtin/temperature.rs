use super::{per_night, single};
use crate::temperature::{BandRule, TemperatureBand};

pub(crate) fn bands() -> Vec<BandRule> {
    vec![
        BandRule::new(
            TemperatureBand::Freezing,
            vec![
                (
                    "Heavy winter coat",
                    single().essential().with_description("Insulated, windproof"),
                ),
                ("Thermal underwear", per_night(0.5).with_min(1).with_max(4)),
                ("Insulated boots", single().essential()),
                ("Wool sweaters", per_night(0.3).with_min(1).with_max(3)),
            ],
        ),
        BandRule::new(
            TemperatureBand::Cold,
            vec![
                (
                    "Winter jacket",
                    single().essential().with_description("Warm outer layer"),
                ),
                ("Warm sweater", per_night(0.3).with_min(1).with_max(3)),
                ("Long-sleeve shirts", per_night(0.5).with_max(5)),
                ("Thermal base layer", single()),
            ],
        ),
        BandRule::new(
            TemperatureBand::Mild,
            vec![
                ("Light jacket", single()),
                ("Long-sleeve shirts", per_night(0.4).with_max(4)),
                ("Jeans or chinos", per_night(0.3).with_min(1).with_max(3)),
            ],
        ),
        BandRule::new(
            TemperatureBand::Warm,
            vec![
                ("Shorts", per_night(0.4).with_min(1).with_max(4)),
                ("Breathable shirts", per_night(0.6).with_max(6)),
                ("Sandals", single()),
            ],
        ),
        BandRule::new(
            TemperatureBand::Hot,
            vec![
                (
                    "Linen clothing",
                    per_night(0.7)
                        .with_max(7)
                        .with_description("Loose and light-coloured"),
                ),
                ("Shorts", per_night(0.5).with_min(1).with_max(5)),
                ("Wide-brim hat", single()),
                ("Sandals", single()),
            ],
        ),
    ]
}
