//! # Trip Context
//!
//! [`TripContext`] is the host-facing input: field names are camelCase and
//! identifiers are raw strings, so an unknown value never fails
//! deserialization. [`TripProfile::resolve`] validates a context and resolves
//! every identifier against the closed vocabularies, collecting
//! [`Diagnostic`]s for values it cannot place.
//!
//! ## Validation
//!
//! - `nights` must be strictly positive.
//! - `tripType` must be present and non-blank. An unknown trip type is only a
//!   diagnostic.
//! - Every forecast entry needs a finite `temp` and a `chanceOfRain` within
//!   `0..=100`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::ContextError;
use crate::matching::normalize;
use crate::vocabulary::{
    Accommodation, AccommodationOption, Activity, TransportOption, Transportation, TripType,
    Vocabulary,
};

/// One day of externally sourced forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDay {
    /// Temperature in °C.
    pub temp: f64,
    /// Free-text condition, e.g. "Light rain".
    #[serde(default)]
    pub condition: String,
    /// Probability of rain in percent.
    #[serde(default)]
    pub chance_of_rain: f64,
}

impl WeatherDay {
    /// A dry day at `temp` °C.
    pub fn at(temp: f64) -> Self {
        Self {
            temp,
            condition: String::new(),
            chance_of_rain: 0.0,
        }
    }
}

/// The trip description a host hands to the generator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripContext {
    /// Destination, free text.
    #[serde(default)]
    pub location: String,
    /// Number of nights away.
    pub nights: i64,
    /// Trip type identifier.
    #[serde(default)]
    pub trip_type: Option<String>,
    /// Transportation mode identifier.
    #[serde(default)]
    pub transportation: Option<String>,
    /// Option identifiers for the transportation mode.
    #[serde(default)]
    pub transportation_options: Vec<String>,
    /// Accommodation mode identifier.
    #[serde(default)]
    pub accommodation: Option<String>,
    /// Option identifiers for the accommodation mode.
    #[serde(default)]
    pub accommodation_options: Vec<String>,
    /// Activity identifiers.
    #[serde(default)]
    pub activities: Vec<String>,
    /// Free-text notes, scanned for keywords.
    #[serde(default)]
    pub notes: String,
    /// Daily forecast, possibly empty.
    #[serde(default)]
    pub weather: Vec<WeatherDay>,
}

impl TripContext {
    /// A context with the required fields set.
    pub fn new(nights: i64, trip_type: &str) -> Self {
        Self {
            nights,
            trip_type: Some(trip_type.to_string()),
            ..Self::default()
        }
    }

    /// Set the destination.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Set the transportation mode and its options.
    pub fn with_transportation(mut self, mode: &str, options: &[&str]) -> Self {
        self.transportation = Some(mode.to_string());
        self.transportation_options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Set the accommodation mode and its options.
    pub fn with_accommodation(mut self, mode: &str, options: &[&str]) -> Self {
        self.accommodation = Some(mode.to_string());
        self.accommodation_options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Set the activities.
    pub fn with_activities(mut self, activities: &[&str]) -> Self {
        self.activities = activities.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    /// Set the forecast.
    pub fn with_weather(mut self, weather: Vec<WeatherDay>) -> Self {
        self.weather = weather;
        self
    }
}

// ---------------------------------------------------------------------------
// TripProfile
// ---------------------------------------------------------------------------

/// A validated trip with every identifier resolved.
///
/// Unknown identifiers resolve to `None` (or are left out of the option and
/// activity sets) and contribute no rule matches.
#[derive(Debug, Clone, PartialEq)]
pub struct TripProfile {
    /// Destination, as supplied.
    pub location: String,
    /// Notes, as supplied.
    pub notes: String,
    /// Nights away, strictly positive.
    pub nights: u32,
    /// Resolved trip type.
    pub trip_type: Option<TripType>,
    /// Resolved transportation mode.
    pub transportation: Option<Transportation>,
    /// Options valid for the resolved transportation mode.
    pub transportation_options: BTreeSet<TransportOption>,
    /// Resolved accommodation mode.
    pub accommodation: Option<Accommodation>,
    /// Options valid for the resolved accommodation mode.
    pub accommodation_options: BTreeSet<AccommodationOption>,
    /// Resolved activities.
    pub activities: BTreeSet<Activity>,
    /// Validated forecast.
    pub weather: Vec<WeatherDay>,
}

impl TripProfile {
    /// Validate `context` and resolve its identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError`] for non-positive nights, a missing trip type
    /// or malformed forecast entries.
    pub fn resolve(context: &TripContext) -> Result<(Self, Vec<Diagnostic>), ContextError> {
        if context.nights <= 0 {
            return Err(ContextError::NonPositiveNights(context.nights));
        }
        let nights = u32::try_from(context.nights)
            .map_err(|_| ContextError::NightsOutOfRange(context.nights))?;

        let raw_trip_type = match context.trip_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ContextError::MissingTripType),
        };

        for (index, day) in context.weather.iter().enumerate() {
            if !day.temp.is_finite() {
                return Err(ContextError::MalformedWeather {
                    index,
                    reason: "temperature is not finite".into(),
                });
            }
            if !day.chance_of_rain.is_finite() || !(0.0..=100.0).contains(&day.chance_of_rain) {
                return Err(ContextError::MalformedWeather {
                    index,
                    reason: format!(
                        "chance of rain must be within 0..=100, got {}",
                        day.chance_of_rain
                    ),
                });
            }
        }

        let mut diagnostics = Vec::new();

        let trip_type = resolve_one::<TripType>(raw_trip_type, &mut diagnostics);
        let transportation = context
            .transportation
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| resolve_one::<Transportation>(raw, &mut diagnostics));
        let accommodation = context
            .accommodation
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| resolve_one::<Accommodation>(raw, &mut diagnostics));

        let transportation_options = resolve_options(
            &context.transportation_options,
            transportation.map(|m| (m.as_str(), m.options())),
            &mut diagnostics,
        );
        let accommodation_options = resolve_options(
            &context.accommodation_options,
            accommodation.map(|m| (m.as_str(), m.options())),
            &mut diagnostics,
        );

        let activities = context
            .activities
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .filter_map(|raw| resolve_one::<Activity>(raw, &mut diagnostics))
            .collect();

        diagnostics.sort();
        diagnostics.dedup();

        let profile = Self {
            location: context.location.clone(),
            notes: context.notes.clone(),
            nights,
            trip_type,
            transportation,
            transportation_options,
            accommodation,
            accommodation_options,
            activities,
            weather: context.weather.clone(),
        };
        Ok((profile, diagnostics))
    }

    /// Whether the transportation option is selected.
    pub fn has_transport_option(&self, option: TransportOption) -> bool {
        self.transportation_options.contains(&option)
    }

    /// Whether the accommodation option is selected.
    pub fn has_accommodation_option(&self, option: AccommodationOption) -> bool {
        self.accommodation_options.contains(&option)
    }

    /// Whether the activity is planned.
    pub fn has_activity(&self, activity: Activity) -> bool {
        self.activities.contains(&activity)
    }

    /// Mean forecast temperature rounded half-up, or `None` without forecast.
    pub fn average_temperature(&self) -> Option<i32> {
        if self.weather.is_empty() {
            return None;
        }
        let sum: f64 = self.weather.iter().map(|d| d.temp).sum();
        let mean = sum / self.weather.len() as f64;
        Some((mean + 0.5).floor() as i32)
    }

    /// Lowest forecast temperature.
    pub fn min_temperature(&self) -> Option<f64> {
        self.weather.iter().map(|d| d.temp).reduce(f64::min)
    }

    /// Highest forecast temperature.
    pub fn max_temperature(&self) -> Option<f64> {
        self.weather.iter().map(|d| d.temp).reduce(f64::max)
    }

    /// Notes lower-cased for keyword scanning.
    pub fn normalized_notes(&self) -> String {
        normalize(&self.notes)
    }
}

fn resolve_one<V: Vocabulary>(raw: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<V> {
    let resolved = V::parse(raw);
    if resolved.is_none() {
        tracing::warn!(axis = %V::AXIS, value = raw, "unrecognized identifier ignored");
        diagnostics.push(Diagnostic::UnrecognizedIdentifier {
            axis: V::AXIS,
            value: raw.to_string(),
        });
    }
    resolved
}

fn resolve_options<O: Vocabulary + Ord + PartialEq>(
    raw_options: &[String],
    mode: Option<(&str, &[O])>,
    diagnostics: &mut Vec<Diagnostic>,
) -> BTreeSet<O> {
    let mut resolved = BTreeSet::new();
    for raw in raw_options.iter().filter(|raw| !raw.trim().is_empty()) {
        let Some(option) = resolve_one::<O>(raw, diagnostics) else {
            continue;
        };
        match mode {
            Some((_, allowed)) if allowed.contains(&option) => {
                resolved.insert(option);
            }
            _ => {
                tracing::warn!(
                    axis = %O::AXIS,
                    value = raw.as_str(),
                    "option does not apply to mode"
                );
                diagnostics.push(Diagnostic::InapplicableOption {
                    axis: O::AXIS,
                    value: raw.clone(),
                    mode: mode.map(|(id, _)| id.to_string()),
                });
            }
        }
    }
    resolved
}
