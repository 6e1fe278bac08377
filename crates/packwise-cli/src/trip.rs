//! # Trip Files
//!
//! A trip file holds one [`TripContext`] in the host's camelCase field
//! naming. Files ending in `.yaml` or `.yml` are parsed as YAML; anything
//! else as JSON.
//!
//! ```yaml
//! location: Lisbon, Portugal
//! nights: 5
//! tripType: leisure
//! transportation: plane
//! transportationOptions: [international]
//! accommodation: hotel
//! activities: [sightseeing, beach]
//! weather:
//!   - { temp: 24, condition: Sunny, chanceOfRain: 10 }
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use packwise_core::TripContext;

/// Read and parse a trip file.
pub fn load_trip(path: &Path) -> Result<TripContext> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trip file: {}", path.display()))?;
    let trip = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    };
    Ok(trip)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_yaml_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.yml");
        std::fs::write(
            &path,
            "nights: 5\ntripType: leisure\ntransportation: plane\ntransportationOptions: [international]\nweather:\n  - { temp: 24, chanceOfRain: 10 }\n",
        )
        .unwrap();

        let trip = load_trip(&path).unwrap();
        assert_eq!(trip.nights, 5);
        assert_eq!(trip.trip_type.as_deref(), Some("leisure"));
        assert_eq!(trip.transportation_options, ["international"]);
        assert_eq!(trip.weather.len(), 1);
        assert_eq!(trip.weather[0].chance_of_rain, 10.0);
    }

    #[test]
    fn loads_json_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(
            &path,
            r#"{"nights": 3, "tripType": "business", "accommodation": "hotel", "activities": ["business"]}"#,
        )
        .unwrap();

        let trip = load_trip(&path).unwrap();
        assert_eq!(trip.nights, 3);
        assert_eq!(trip.accommodation.as_deref(), Some("hotel"));
        assert!(trip.weather.is_empty());
    }

    #[test]
    fn malformed_trip_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, "{ nights: ").unwrap();
        let err = load_trip(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid JSON"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_yaml(Path::new("trip.YAML")));
        assert!(is_yaml(Path::new("dir/trip.yml")));
        assert!(!is_yaml(Path::new("trip.json")));
        assert!(!is_yaml(Path::new("trip")));
    }
}
