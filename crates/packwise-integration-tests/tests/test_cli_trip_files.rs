//! # Trip Files Through the CLI Host
//!
//! Exercises the host-side path: trip files and configuration on disk, an
//! override catalog, and the rendered outputs.

use std::path::Path;

use packwise_cli::generate::{render, OutputFormat};
use packwise_cli::validate::{validate_trip, Validation};
use packwise_cli::{load_generator, load_trip};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ---------------------------------------------------------------------------
// 1. YAML and JSON trip files describe the same trip
// ---------------------------------------------------------------------------

#[test]
fn yaml_and_json_trip_files_generate_the_same_list() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write(
        dir.path(),
        "trip.yaml",
        "nights: 5\ntripType: beach\ntransportation: plane\ntransportationOptions: [international]\naccommodation: hotel\naccommodationOptions: [resort]\nactivities: [snorkeling, swimming]\nweather:\n  - { temp: 31, condition: Sunny }\n  - { temp: 29, condition: Sunny }\n",
    );
    let json = write(
        dir.path(),
        "trip.json",
        r#"{
            "nights": 5,
            "tripType": "beach",
            "transportation": "plane",
            "transportationOptions": ["international"],
            "accommodation": "hotel",
            "accommodationOptions": ["resort"],
            "activities": ["snorkeling", "swimming"],
            "weather": [
                {"temp": 31, "condition": "Sunny"},
                {"temp": 29, "condition": "Sunny"}
            ]
        }"#,
    );

    let generator = load_generator(None).unwrap();
    let from_yaml = generator.generate(&load_trip(&yaml).unwrap()).unwrap();
    let from_json = generator.generate(&load_trip(&json).unwrap()).unwrap();
    assert_eq!(from_yaml, from_json);
    assert!(from_yaml.category("airport_transfer").is_some());
}

// ---------------------------------------------------------------------------
// 2. Configuration file changes generation
// ---------------------------------------------------------------------------

#[test]
fn config_file_tunes_the_generator() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "packwise.yaml",
        "generator:\n  long_trip_min_nights: 30\n  enforce_carry_on_restrictions: true\n",
    );
    let trip = write(
        dir.path(),
        "trip.yaml",
        "nights: 20\ntripType: city\ntransportation: plane\ntransportationOptions: [carry_on_only]\n",
    );

    let tuned = load_generator(Some(&config)).unwrap();
    let list = tuned.generate(&load_trip(&trip).unwrap()).unwrap();
    // 20 nights is no longer long, so no 1.2 rescale
    let sheets = list.get("miscellaneous", "Laundry detergent sheets").unwrap();
    assert_eq!(sheets.quantity, 5);
    assert!(list.get("toiletries", "Shampoo").is_none());
}

// ---------------------------------------------------------------------------
// 3. Override catalog
// ---------------------------------------------------------------------------

#[test]
fn override_catalog_replaces_builtin_items() {
    let dir = tempfile::tempdir().unwrap();

    // Start from the built-in catalog so every rule target still resolves,
    // then rename one essential.
    let builtin = load_generator(None).unwrap().catalog().clone();
    let mut doc: serde_yaml::Value = serde_yaml::to_value(&builtin).unwrap();
    let documents = doc["essentials"]["documents"].as_mapping_mut().unwrap();
    let passport = documents.remove("Passport/ID").unwrap();
    documents.insert("Passport or national ID card".into(), passport);
    write(dir.path(), "catalog.yaml", &serde_yaml::to_string(&doc).unwrap());
    let config = write(dir.path(), "packwise.yaml", "catalog: catalog.yaml\n");

    let generator = load_generator(Some(&config)).unwrap();
    let list = generator
        .generate(&packwise_core::TripContext::new(2, "city"))
        .unwrap();
    assert!(list.get("documents", "Passport or national ID card").is_some());
    assert!(list.get("documents", "Passport/ID").is_none());
}

// ---------------------------------------------------------------------------
// 4. Validation and rendering
// ---------------------------------------------------------------------------

#[test]
fn malformed_forecast_is_rejected_by_validation() {
    let dir = tempfile::tempdir().unwrap();
    let trip = write(
        dir.path(),
        "trip.yaml",
        "nights: 3\ntripType: city\nweather:\n  - { temp: 20, chanceOfRain: 140 }\n",
    );
    let validation = validate_trip(&load_trip(&trip).unwrap());
    assert!(matches!(validation, Validation::Rejected(_)));
    assert_eq!(validation.exit_code(false), 1);
}

#[test]
fn rendered_checklist_and_json_agree() {
    let generator = load_generator(None).unwrap();
    let context = packwise_core::TripContext::new(4, "leisure").with_activities(&["cycling"]);
    let generation = generator.generate_with_report(&context).unwrap();

    let text = render(&generation, OutputFormat::Text, false, false).unwrap();
    let json = render(&generation, OutputFormat::Json, false, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let categories = value.as_object().unwrap();
    assert_eq!(categories.len(), generation.list.category_count());
    for key in categories.keys() {
        assert!(text.contains(&key.replace('_', " ").to_uppercase()));
    }
    let checkbox_lines = text.lines().filter(|l| l.starts_with("[ ] ")).count();
    assert_eq!(checkbox_lines, generation.list.total_items());
}
