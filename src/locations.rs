/// Built-in registry of monitored locations.
///
/// Defines the canonical list of Pakistani cities monitored for flood risk,
/// grouped by province. This is the single source of truth for location
/// names — all other modules should reference locations from here rather
/// than hardcoding names or coordinates. `locations.toml` can override the
/// list at startup without recompiling (see `config`).
///
/// Registry order is a stable contract: snapshots present results in
/// exactly this order regardless of fetch completion order.

use crate::model::{Location, Province};

/// (name, province, latitude, longitude) for each built-in location.
const BUILTIN_LOCATIONS: &[(&str, Province, f64, f64)] = &[
    // Punjab
    ("Lahore", Province::Punjab, 31.5204, 74.3587),
    ("Multan", Province::Punjab, 30.1575, 71.5249),
    ("Faisalabad", Province::Punjab, 31.4504, 73.1350),
    ("Bahawalpur", Province::Punjab, 29.3956, 71.6836),
    // KPK
    ("Peshawar", Province::Kpk, 34.0151, 71.5249),
    ("Swat", Province::Kpk, 35.2227, 72.4258),
    ("Abbottabad", Province::Kpk, 34.1688, 73.2215),
    ("Mardan", Province::Kpk, 34.1986, 72.0404),
    // Balochistan
    ("Quetta", Province::Balochistan, 30.1798, 66.9750),
    ("Gwadar", Province::Balochistan, 25.1264, 62.3225),
    ("Sibi", Province::Balochistan, 29.5430, 67.8773),
    ("Turbat", Province::Balochistan, 26.0031, 63.0544),
];

/// Builds the built-in location registry, in canonical order.
pub fn builtin_registry() -> Vec<Location> {
    BUILTIN_LOCATIONS
        .iter()
        .map(|&(name, province, latitude, longitude)| Location {
            name: name.to_string(),
            province,
            latitude,
            longitude,
        })
        .collect()
}

/// Looks up a built-in location by name. Returns `None` if not found.
pub fn find_location(name: &str) -> Option<Location> {
    BUILTIN_LOCATIONS
        .iter()
        .find(|(n, _, _, _)| *n == name)
        .map(|&(n, province, latitude, longitude)| Location {
            name: n.to_string(),
            province,
            latitude,
            longitude,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
