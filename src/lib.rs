/// floodrisk_service: Pakistan river flood risk aggregation service.
///
/// # Module structure
///
/// ```text
/// floodrisk_service
/// ├── model      — shared data types (Location, RiskLevel, Snapshot, FetchError, …)
/// ├── locations  — built-in monitored-location registry (Punjab, KPK, Balochistan)
/// ├── config     — location registry override loader (locations.toml)
/// ├── risk       — discharge → risk tier classification thresholds
/// ├── ingest
/// │   ├── open_meteo — Open-Meteo flood API: URL construction + JSON parsing + client
/// │   └── fixtures (test only) — representative API response payloads
/// ├── engine     — aggregation engine (parallel per-location fan-out, reduction)
/// ├── store      — generation-gated latest-snapshot store (publish/current)
/// └── endpoint   — JSON HTTP API for snapshot consumers
/// ```

/// Public modules
pub mod config;
pub mod endpoint;
pub mod engine;
pub mod ingest;
pub mod locations;
pub mod model;
pub mod risk;
pub mod store;
