/// Test fixtures: representative JSON payloads from the Open-Meteo flood API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned by:
///   https://flood-api.open-meteo.com/v1/flood?daily=river_discharge_max&...
///
/// Flood API response shape:
///   response.latitude / .longitude  — grid cell center, not the request point
///   response.daily_units            — unit labels per daily metric
///   response.daily.time[]           — ISO dates (local to the requested timezone)
///   response.daily.river_discharge_max[] — floats, or null for days with no value
///
/// Note: `time` and `river_discharge_max` are parallel arrays aligned by
/// index. The `daily` block is omitted entirely for points the hydrological
/// model has no discharge data for.

/// Lahore with a complete 5-day series including one high-risk peak.
pub(crate) fn fixture_lahore_json() -> &'static str {
    r#"{
      "latitude": 31.5,
      "longitude": 74.4,
      "generationtime_ms": 1.452,
      "utc_offset_seconds": 18000,
      "timezone": "Asia/Karachi",
      "timezone_abbreviation": "PKT",
      "daily_units": { "time": "iso8601", "river_discharge_max": "m³/s" },
      "daily": {
        "time": ["2024-08-01", "2024-08-02", "2024-08-03", "2024-08-04", "2024-08-05"],
        "river_discharge_max": [412.5, 688.1, 1632.8, 990.4, 541.0]
      }
    }"#
}

/// Series with a one-day gap (null) in the middle — simulates a day the
/// GloFAS model produced no value for. Parser must keep it as absent.
pub(crate) fn fixture_gap_json() -> &'static str {
    r#"{
      "latitude": 30.2,
      "longitude": 67.0,
      "generationtime_ms": 0.981,
      "utc_offset_seconds": 18000,
      "timezone": "Asia/Karachi",
      "timezone_abbreviation": "PKT",
      "daily_units": { "time": "iso8601", "river_discharge_max": "m³/s" },
      "daily": {
        "time": ["2024-08-01", "2024-08-02", "2024-08-03"],
        "river_discharge_max": [310.0, null, 295.5]
      }
    }"#
}

/// Every value null — a dry-basin point where the model covers the grid
/// cell but has no discharge estimate for any requested day.
pub(crate) fn fixture_all_null_json() -> &'static str {
    r#"{
      "latitude": 25.1,
      "longitude": 62.3,
      "generationtime_ms": 0.771,
      "utc_offset_seconds": 18000,
      "timezone": "Asia/Karachi",
      "timezone_abbreviation": "PKT",
      "daily_units": { "time": "iso8601", "river_discharge_max": "m³/s" },
      "daily": {
        "time": ["2024-08-01", "2024-08-02", "2024-08-03"],
        "river_discharge_max": [null, null, null]
      }
    }"#
}

/// Valid envelope with no `daily` block at all — returned for points
/// entirely outside the model's river network.
pub(crate) fn fixture_no_daily_json() -> &'static str {
    r#"{
      "latitude": 26.0,
      "longitude": 63.1,
      "generationtime_ms": 0.412,
      "utc_offset_seconds": 18000,
      "timezone": "Asia/Karachi",
      "timezone_abbreviation": "PKT"
    }"#
}
