//! # Rule Triggers
//!
//! A [`Trigger`] is a declarative predicate over a resolved trip. Triggers
//! are data: they serialize, they can be listed, and every variant is
//! evaluated by one exhaustive `match` in [`Trigger::evaluate`].
//!
//! Evaluation reads from [`TripFacts`], which caches the few derived facts
//! (normalized notes, the international heuristic) that several triggers
//! share.

use packwise_core::{
    Accommodation, AccommodationOption, Activity, TransportOption, Transportation, TripProfile,
    TripType,
};
use serde::{Deserialize, Serialize};

use crate::vocabulary::{self, LONG_HAUL_MIN_NIGHTS, RAIN_CHANCE_THRESHOLD};

// ---------------------------------------------------------------------------
// TripFacts
// ---------------------------------------------------------------------------

/// A resolved trip plus facts derived from it once per generation.
#[derive(Debug, Clone)]
pub struct TripFacts<'a> {
    trip: &'a TripProfile,
    notes: String,
    international_hint: bool,
}

impl<'a> TripFacts<'a> {
    /// Derive facts for `trip`.
    pub fn derive(trip: &'a TripProfile) -> Self {
        Self {
            trip,
            notes: trip.normalized_notes(),
            international_hint: vocabulary::is_international_trip(&trip.location, &trip.notes),
        }
    }

    /// The underlying trip.
    pub fn trip(&self) -> &'a TripProfile {
        self.trip
    }

    /// Lower-cased notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether location or notes suggest an international trip.
    pub fn international_hint(&self) -> bool {
        self.international_hint
    }

    /// Travelling by plane.
    pub fn flying(&self) -> bool {
        self.trip.transportation == Some(Transportation::Plane)
    }

    /// Plane travel flagged international, explicitly or by heuristic.
    pub fn international_flight(&self) -> bool {
        self.flying()
            && (self.trip.has_transport_option(TransportOption::International)
                || self.international_hint)
    }

    /// Plane travel flagged long-haul, or an international flight on a trip
    /// of at least a week.
    pub fn long_haul_flight(&self) -> bool {
        self.flying()
            && (self.trip.has_transport_option(TransportOption::LongHaul)
                || (self.international_flight() && self.trip.nights >= LONG_HAUL_MIN_NIGHTS))
    }

    /// Any forecast day likely to be rainy.
    pub fn rain_likely(&self) -> bool {
        let conditions = vocabulary::rain_conditions();
        self.trip.weather.iter().any(|day| {
            day.chance_of_rain >= RAIN_CHANCE_THRESHOLD || conditions.matches(&day.condition)
        })
    }

    /// Spread between the warmest and coldest forecast day.
    pub fn temperature_spread(&self) -> Option<f64> {
        Some(self.trip.max_temperature()? - self.trip.min_temperature()?)
    }
}

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// When a conditional rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Every trip.
    Always,
    /// The trip has this type.
    TripType(TripType),
    /// The activity is planned.
    Activity(Activity),
    /// Travelling by this mode.
    Transportation(Transportation),
    /// The transportation option is selected for the chosen mode.
    TransportOption(TransportOption),
    /// Staying in this kind of accommodation.
    Accommodation(Accommodation),
    /// The accommodation option is selected for the chosen mode.
    AccommodationOption(AccommodationOption),
    /// See [`TripFacts::international_flight`].
    InternationalFlight,
    /// See [`TripFacts::long_haul_flight`].
    LongHaulFlight,
    /// At most this many nights.
    NightsAtMost(u32),
    /// More than this many nights.
    NightsAbove(u32),
    /// Some forecast day is colder than this.
    AnyTempBelow(f64),
    /// Some forecast day is warmer than this.
    AnyTempAbove(f64),
    /// Some forecast day is likely to be rainy.
    RainLikely,
    /// The forecast spans at least this many degrees.
    TemperatureSwing(f64),
    /// The notes contain this keyword.
    NotesMention(String),
    /// Every inner trigger fires.
    All(Vec<Trigger>),
    /// At least one inner trigger fires.
    Any(Vec<Trigger>),
}

impl Trigger {
    /// Both triggers fire.
    pub fn and(self, other: Trigger) -> Trigger {
        match self {
            Trigger::All(mut inner) => {
                inner.push(other);
                Trigger::All(inner)
            }
            first => Trigger::All(vec![first, other]),
        }
    }

    /// Fires when `keyword` appears in the notes, case-insensitively.
    pub fn notes_mention(keyword: &str) -> Trigger {
        Trigger::NotesMention(packwise_core::normalize(keyword))
    }

    /// Evaluate against a trip.
    pub fn evaluate(&self, facts: &TripFacts<'_>) -> bool {
        let trip = facts.trip();
        match self {
            Self::Always => true,
            Self::TripType(t) => trip.trip_type == Some(*t),
            Self::Activity(a) => trip.has_activity(*a),
            Self::Transportation(m) => trip.transportation == Some(*m),
            Self::TransportOption(o) => trip.has_transport_option(*o),
            Self::Accommodation(m) => trip.accommodation == Some(*m),
            Self::AccommodationOption(o) => trip.has_accommodation_option(*o),
            Self::InternationalFlight => facts.international_flight(),
            Self::LongHaulFlight => facts.long_haul_flight(),
            Self::NightsAtMost(n) => trip.nights <= *n,
            Self::NightsAbove(n) => trip.nights > *n,
            Self::AnyTempBelow(t) => trip.weather.iter().any(|d| d.temp < *t),
            Self::AnyTempAbove(t) => trip.weather.iter().any(|d| d.temp > *t),
            Self::RainLikely => facts.rain_likely(),
            Self::TemperatureSwing(spread) => {
                facts.temperature_spread().is_some_and(|s| s >= *spread)
            }
            Self::NotesMention(keyword) => {
                !keyword.is_empty() && facts.notes().contains(keyword.as_str())
            }
            Self::All(inner) => inner.iter().all(|t| t.evaluate(facts)),
            Self::Any(inner) => inner.iter().any(|t| t.evaluate(facts)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwise_core::{TripContext, WeatherDay};

    fn profile(context: TripContext) -> TripProfile {
        TripProfile::resolve(&context).unwrap().0
    }

    fn rainy(chance: f64, condition: &str) -> WeatherDay {
        WeatherDay {
            temp: 15.0,
            condition: condition.into(),
            chance_of_rain: chance,
        }
    }

    #[test]
    fn international_flight_requires_plane() {
        let trip = profile(
            TripContext::new(5, "leisure")
                .with_location("Rome, Italy")
                .with_transportation("car", &[]),
        );
        let facts = TripFacts::derive(&trip);
        assert!(facts.international_hint());
        assert!(!Trigger::InternationalFlight.evaluate(&facts));
    }

    #[test]
    fn international_flight_from_option_or_heuristic() {
        let explicit = profile(
            TripContext::new(3, "business").with_transportation("plane", &["international"]),
        );
        assert!(Trigger::InternationalFlight.evaluate(&TripFacts::derive(&explicit)));

        let inferred = profile(
            TripContext::new(3, "leisure")
                .with_location("Lisbon")
                .with_transportation("plane", &[]),
        );
        assert!(Trigger::InternationalFlight.evaluate(&TripFacts::derive(&inferred)));

        let domestic = profile(
            TripContext::new(3, "leisure")
                .with_location("Chicago")
                .with_transportation("plane", &[]),
        );
        assert!(!Trigger::InternationalFlight.evaluate(&TripFacts::derive(&domestic)));
    }

    #[test]
    fn long_haul_from_option_or_long_international_trip() {
        let flagged = profile(
            TripContext::new(2, "leisure").with_transportation("plane", &["long_haul"]),
        );
        assert!(Trigger::LongHaulFlight.evaluate(&TripFacts::derive(&flagged)));

        let short_abroad = profile(
            TripContext::new(6, "leisure").with_transportation("plane", &["international"]),
        );
        assert!(!Trigger::LongHaulFlight.evaluate(&TripFacts::derive(&short_abroad)));

        let week_abroad = profile(
            TripContext::new(7, "leisure").with_transportation("plane", &["international"]),
        );
        assert!(Trigger::LongHaulFlight.evaluate(&TripFacts::derive(&week_abroad)));
    }

    #[test]
    fn weather_triggers_need_a_forecast() {
        let trip = profile(TripContext::new(3, "leisure"));
        let facts = TripFacts::derive(&trip);
        assert!(!Trigger::AnyTempBelow(5.0).evaluate(&facts));
        assert!(!Trigger::AnyTempAbove(28.0).evaluate(&facts));
        assert!(!Trigger::RainLikely.evaluate(&facts));
        assert!(!Trigger::TemperatureSwing(10.0).evaluate(&facts));
    }

    #[test]
    fn rain_from_chance_or_condition() {
        let by_chance = profile(TripContext::new(3, "city").with_weather(vec![rainy(50.0, "")]));
        assert!(Trigger::RainLikely.evaluate(&TripFacts::derive(&by_chance)));

        let by_text =
            profile(TripContext::new(3, "city").with_weather(vec![rainy(10.0, "Drizzle")]));
        assert!(Trigger::RainLikely.evaluate(&TripFacts::derive(&by_text)));

        let dry = profile(TripContext::new(3, "city").with_weather(vec![rainy(49.0, "Cloudy")]));
        assert!(!Trigger::RainLikely.evaluate(&TripFacts::derive(&dry)));
    }

    #[test]
    fn temperature_thresholds_are_strict() {
        let trip = profile(
            TripContext::new(3, "city")
                .with_weather(vec![WeatherDay::at(5.0), WeatherDay::at(28.0)]),
        );
        let facts = TripFacts::derive(&trip);
        assert!(!Trigger::AnyTempBelow(5.0).evaluate(&facts));
        assert!(!Trigger::AnyTempAbove(28.0).evaluate(&facts));
        assert!(Trigger::TemperatureSwing(10.0).evaluate(&facts));
    }

    #[test]
    fn duration_bounds() {
        let trip = profile(TripContext::new(3, "city"));
        let facts = TripFacts::derive(&trip);
        assert!(Trigger::NightsAtMost(3).evaluate(&facts));
        assert!(!Trigger::NightsAbove(3).evaluate(&facts));
    }

    #[test]
    fn notes_mention_is_case_insensitive() {
        let trip = profile(TripContext::new(3, "leisure").with_notes("Cousin's WEDDING on Sat"));
        let facts = TripFacts::derive(&trip);
        assert!(Trigger::notes_mention("Wedding").evaluate(&facts));
        assert!(!Trigger::notes_mention("conference").evaluate(&facts));
        assert!(!Trigger::NotesMention(String::new()).evaluate(&facts));
    }

    #[test]
    fn and_flattens_into_all() {
        let combined = Trigger::Transportation(Transportation::Car)
            .and(Trigger::Accommodation(Accommodation::Camping))
            .and(Trigger::NightsAbove(1));
        match &combined {
            Trigger::All(inner) => assert_eq!(inner.len(), 3),
            other => panic!("expected All, got {other:?}"),
        }
        let trip = profile(
            TripContext::new(2, "adventure")
                .with_transportation("car", &[])
                .with_accommodation("camping", &[]),
        );
        assert!(combined.evaluate(&TripFacts::derive(&trip)));
    }

    #[test]
    fn options_only_count_for_their_mode() {
        let trip = profile(
            TripContext::new(3, "leisure").with_transportation("train", &["international"]),
        );
        let facts = TripFacts::derive(&trip);
        assert!(!Trigger::TransportOption(TransportOption::International).evaluate(&facts));
    }

    #[test]
    fn triggers_serialize_as_tagged_values() {
        let trigger = Trigger::Activity(Activity::Hiking);
        assert_eq!(
            serde_json::to_string(&trigger).unwrap(),
            r#"{"activity":"hiking"}"#
        );
        assert_eq!(serde_json::to_string(&Trigger::Always).unwrap(), r#""always""#);
    }
}
