//! # Keyword Vocabularies
//!
//! Fixed keyword lists consulted by triggers and the built-in rule set. Each
//! list is a [`KeywordSet`] built once on first use.
//!
//! The international heuristic is plain substring matching over location and
//! notes. It has false positives ("Indiana" contains "india") and false
//! negatives (any destination not listed); an explicit `international`
//! transportation option always wins.

use std::sync::OnceLock;

use packwise_core::KeywordSet;

/// Minimum daily chance of rain, in percent, that counts as rainy.
pub const RAIN_CHANCE_THRESHOLD: f64 = 50.0;

/// Daily temperature, in °C, below which a forecast counts as cold.
pub const COLD_DAY_BELOW: f64 = 5.0;

/// Daily temperature, in °C, above which a forecast counts as hot.
pub const HOT_DAY_ABOVE: f64 = 28.0;

/// Spread between the warmest and coldest day, in °C, that counts as variable.
pub const VARIABLE_SPREAD: f64 = 10.0;

/// Nights from which an international flight also counts as long-haul.
pub const LONG_HAUL_MIN_NIGHTS: u32 = 7;

const INTERNATIONAL_HINTS: &[&str] = &[
    "international",
    "abroad",
    "overseas",
    "passport",
    "visa",
    "foreign",
];

const FOREIGN_PLACES: &[&str] = &[
    "africa",
    "amsterdam",
    "argentina",
    "asia",
    "australia",
    "austria",
    "bali",
    "bangkok",
    "barcelona",
    "berlin",
    "brazil",
    "canada",
    "china",
    "dubai",
    "dublin",
    "egypt",
    "england",
    "europe",
    "france",
    "germany",
    "greece",
    "iceland",
    "india",
    "indonesia",
    "ireland",
    "istanbul",
    "italy",
    "japan",
    "korea",
    "lisbon",
    "london",
    "madrid",
    "mexico",
    "morocco",
    "netherlands",
    "new zealand",
    "paris",
    "peru",
    "portugal",
    "prague",
    "rome",
    "seoul",
    "singapore",
    "south africa",
    "spain",
    "switzerland",
    "thailand",
    "tokyo",
    "turkey",
    "united kingdom",
    "vienna",
    "vietnam",
];

const RAIN_CONDITIONS: &[&str] = &["rain", "shower", "drizzle", "storm"];

/// Keywords and place names that mark a trip as international.
pub fn international_keywords() -> &'static KeywordSet {
    static SET: OnceLock<KeywordSet> = OnceLock::new();
    SET.get_or_init(|| {
        KeywordSet::new(INTERNATIONAL_HINTS.iter().chain(FOREIGN_PLACES.iter()))
    })
}

/// Condition fragments that mark a forecast day as rainy.
pub fn rain_conditions() -> &'static KeywordSet {
    static SET: OnceLock<KeywordSet> = OnceLock::new();
    SET.get_or_init(|| KeywordSet::new(RAIN_CONDITIONS))
}

/// Whether location or notes suggest the trip crosses a border.
pub fn is_international_trip(location: &str, notes: &str) -> bool {
    let keywords = international_keywords();
    keywords.matches(location) || keywords.matches(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_hints_are_detected() {
        assert!(is_international_trip("", "Need to renew my passport"));
        assert!(is_international_trip("Somewhere overseas", ""));
        assert!(is_international_trip("", "VISA appointment on Monday"));
    }

    #[test]
    fn known_places_are_detected() {
        assert!(is_international_trip("Paris, France", ""));
        assert!(is_international_trip("tokyo", ""));
        assert!(is_international_trip("Cape Town, South Africa", ""));
    }

    #[test]
    fn domestic_looking_trips_are_not_flagged() {
        assert!(!is_international_trip("Denver", "Visiting grandma"));
        assert!(!is_international_trip("", ""));
    }

    #[test]
    fn substring_heuristic_has_known_false_positives() {
        assert!(is_international_trip("Indianapolis, Indiana", ""));
    }

    #[test]
    fn rain_conditions_match_forecast_text() {
        let rain = rain_conditions();
        assert!(rain.matches("Light drizzle"));
        assert!(rain.matches("Thunderstorms"));
        assert!(rain.matches("Scattered showers"));
        assert!(!rain.matches("Sunny"));
        assert!(!rain.matches("Overcast"));
    }
}
