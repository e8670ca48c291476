/// Shared data types for the flood risk aggregation service.
///
/// Everything that crosses a module boundary lives here: the location
/// registry entry, the raw forecast as returned by Open-Meteo, the reduced
/// per-location result, the published snapshot, and the error taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Administrative province of a monitored location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Province {
    Punjab,
    #[serde(rename = "KPK")]
    Kpk,
    Balochistan,
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Province::Punjab => write!(f, "Punjab"),
            Province::Kpk => write!(f, "KPK"),
            Province::Balochistan => write!(f, "Balochistan"),
        }
    }
}

/// A monitored location. Defined once at process start (built-in registry or
/// locations.toml) and never mutated afterwards. `name` is the unique id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub province: Province,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Forecast data
// ---------------------------------------------------------------------------

/// Raw per-location forecast as parsed from the Open-Meteo flood API:
/// parallel arrays of ISO dates and daily maximum discharge values, where
/// `None` marks a day the model produced no value for. Discarded once the
/// engine has reduced it to a `LocationResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecast {
    pub dates: Vec<String>,
    pub discharge: Vec<Option<f64>>,
}

/// Flood risk tier derived from peak forecast discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Extreme => "extreme",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reduced forecast for one location.
///
/// `discharge` is the displayed series: absent days substituted with 0.0.
/// `max_discharge` / `avg_discharge` are computed over present, non-NaN
/// values only — the two transformations are deliberately distinct, since
/// zero-filling before averaging would drag the average down.
///
/// `valid` is false when the fetch failed; consumers use it to tell
/// "no risk" apart from "no data" (a failed location otherwise reads as
/// all-zero statistics and low risk).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationResult {
    pub location: Location,
    pub dates: Vec<String>,
    pub discharge: Vec<f64>,
    pub max_discharge: f64,
    pub avg_discharge: f64,
    pub risk_level: RiskLevel,
    pub valid: bool,
}

/// The published aggregate: one result per registered location, in registry
/// order. Partial batches are never published. Owned by the `SnapshotStore`;
/// consumers receive clones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Strictly increasing refresh counter, assigned at trigger time and
    /// used to resolve publish races between overlapping refreshes.
    pub generation: u64,
    pub completed_at: DateTime<Utc>,
    pub results: Vec<LocationResult>,
}

impl Snapshot {
    /// Looks up a single location's result by name. Returns `None` if the
    /// name is not in the registry this snapshot was built from.
    pub fn result_for(&self, name: &str) -> Option<&LocationResult> {
        self.results.iter().find(|r| r.location.name == name)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a single location's forecast fetch failed. Caught at the client
/// boundary and absorbed into a degraded `LocationResult`; never aborts
/// the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection failure or request timeout.
    Network(String),
    /// Non-success HTTP status from the flood API.
    HttpStatus(u16),
    /// Malformed or unexpected response payload.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::HttpStatus(code) => write!(f, "flood API returned HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "failed to decode response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Why a whole refresh attempt failed. Individual location failures are
/// never escalated to this level.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshError {
    /// No locations configured — there is nothing to aggregate.
    EmptyRegistry,
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::EmptyRegistry => write!(f, "location registry is empty"),
        }
    }
}

impl std::error::Error for RefreshError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
