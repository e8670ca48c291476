/// Open-Meteo Flood API client.
///
/// Handles URL construction and JSON response parsing for the GloFAS-backed
/// flood forecast endpoint:
///   https://flood-api.open-meteo.com/v1/flood
///
/// Each request covers a fixed 30-day forward window of daily maximum river
/// discharge for one location. See `fixtures.rs` for annotated examples of
/// the response structure.

use crate::ingest::ForecastFetcher;
use crate::model::{FetchError, Location, RawForecast};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;

const FLOOD_API_BASE: &str = "https://flood-api.open-meteo.com/v1/flood";

/// Daily metric requested from the API: peak river discharge per day.
pub const DAILY_METRIC: &str = "river_discharge_max";

/// All forecast windows are anchored to the Pakistan time zone, matching
/// the local context of the monitored locations.
pub const FORECAST_TIMEZONE: &str = "Asia/Karachi";

/// Forward horizon of each forecast request, in days.
pub const FORECAST_HORIZON_DAYS: i64 = 30;

/// Per-request timeout. Bounds the worst-case latency of a refresh cycle —
/// without it one unresponsive request would stall the whole batch.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Serde structures for flood API JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct FloodResponse {
    daily: Option<DailyBlock>,
}

#[derive(Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<String>,
    // null entries mark days the hydrological model produced no value for.
    #[serde(default)]
    river_discharge_max: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds a flood API URL for one location and date window.
///
/// The returned URL always requests the daily maximum discharge metric in
/// the fixed service time zone. Dates are YYYY-MM-DD.
pub fn build_flood_url(latitude: f64, longitude: f64, start_date: &str, end_date: &str) -> String {
    format!(
        "{}?latitude={}&longitude={}&daily={}&timezone={}&start_date={}&end_date={}",
        FLOOD_API_BASE, latitude, longitude, DAILY_METRIC, FORECAST_TIMEZONE, start_date, end_date
    )
}

/// Computes the (start_date, end_date) request window: today through
/// today + 30 days, both formatted as YYYY-MM-DD.
pub fn forecast_window(today: NaiveDate) -> (String, String) {
    let end = today + Duration::days(FORECAST_HORIZON_DAYS);
    (
        today.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a flood API JSON response body into a `RawForecast`.
///
/// The `daily.time` and `daily.river_discharge_max` arrays are parallel and
/// assumed aligned by index. A response without a `daily` block parses as an
/// empty forecast — the API omits it rather than sending empty arrays when
/// no discharge data exists for the requested point.
///
/// # Errors
/// `FetchError::Decode` — malformed or unexpected JSON structure.
pub fn parse_flood_response(json: &str) -> Result<RawForecast, FetchError> {
    let response: FloodResponse = serde_json::from_str(json)
        .map_err(|e| FetchError::Decode(format!("JSON deserialization failed: {}", e)))?;

    match response.daily {
        Some(daily) => Ok(RawForecast {
            dates: daily.time,
            discharge: daily.river_discharge_max,
        }),
        None => Ok(RawForecast {
            dates: Vec::new(),
            discharge: Vec::new(),
        }),
    }
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the flood API. One instance is shared across
/// all per-location fetches; reqwest's blocking client is internally
/// synchronized and cheap to clone.
#[derive(Clone)]
pub struct OpenMeteoClient {
    http: reqwest::blocking::Client,
}

impl OpenMeteoClient {
    /// Creates a client with the standard per-request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl ForecastFetcher for OpenMeteoClient {
    fn fetch(&self, location: &Location) -> Result<RawForecast, FetchError> {
        let (start_date, end_date) = forecast_window(Utc::now().date_naive());
        let url = build_flood_url(location.latitude, location.longitude, &start_date, &end_date);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_flood_response(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
