/// Location registry override loader - parses locations.toml
///
/// Separates the monitored-location list from code, making it easy to add
/// or drop cities without recompiling the service. The built-in registry in
/// `locations` is used when no override file is given.

use serde::Deserialize;
use std::fs;

use crate::model::{Location, Province};

/// One monitored location as declared in locations.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub province: Province,
    pub latitude: f64,
    pub longitude: f64,
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Deserialize)]
struct LocationRegistry {
    location: Vec<LocationConfig>,
}

/// Loads the location registry from a TOML override file.
///
/// # Panics
/// Panics if the file is missing, malformed, or contains invalid data.
/// This is intentional — the service cannot operate without a valid
/// location registry, and a half-loaded one would silently drop cities
/// from every snapshot.
pub fn load_locations(path: &str) -> Vec<Location> {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));

    let registry: LocationRegistry = toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e));

    registry.location.into_iter().map(Location::from).collect()
}

impl From<LocationConfig> for Location {
    fn from(config: LocationConfig) -> Self {
        Location {
            name: config.name,
            province: config.province,
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::builtin_registry;

    // The sample locations.toml at the crate root mirrors the built-in
    // registry; these tests load the real file (cwd is the crate root
    // under `cargo test`).

    #[test]
    fn test_load_locations_succeeds() {
        let locations = load_locations("locations.toml");
        assert!(
            locations.len() >= 12,
            "sample file should list at least the 12 built-in cities"
        );
    }

    #[test]
    fn test_sample_file_matches_builtin_registry() {
        let loaded = load_locations("locations.toml");
        assert_eq!(
            loaded,
            builtin_registry(),
            "locations.toml drifted from the built-in registry"
        );
    }

    #[test]
    fn test_all_loaded_locations_have_valid_fields() {
        for location in load_locations("locations.toml") {
            assert!(!location.name.is_empty(), "name must not be empty");
            assert!(location.latitude >= -90.0 && location.latitude <= 90.0);
            assert!(location.longitude >= -180.0 && location.longitude <= 180.0);
        }
    }

    #[test]
    fn test_province_strings_parse() {
        let toml_str = r#"
            [[location]]
            name = "Peshawar"
            province = "KPK"
            latitude = 34.0151
            longitude = 71.5249
        "#;
        let registry: LocationRegistry = toml::from_str(toml_str).expect("should parse");
        assert_eq!(registry.location[0].province, Province::Kpk);
    }

    #[test]
    #[should_panic(expected = "Failed to read")]
    fn test_missing_file_panics() {
        load_locations("no_such_file.toml");
    }
}
