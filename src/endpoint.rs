/// HTTP endpoint for snapshot consumers
///
/// Provides a simple JSON API for external tools (dashboards, map overlays,
/// alert banners) to read the latest published snapshot and trigger an
/// on-demand refresh.
///
/// Endpoints:
/// - GET  /snapshot        - Latest full snapshot (404 before first publish)
/// - GET  /snapshot/{name} - Result for a single location
/// - POST /refresh         - Trigger a refresh on a background thread
/// - GET  /health          - Service health check

use crate::engine::AggregationEngine;
use crate::store::SnapshotStore;
use std::sync::Arc;
use tiny_http::Method;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------
//
// Handlers return (status, body) pairs so they can be unit-tested without
// binding a socket; `create_response` adapts them for tiny_http.

/// Handle /health endpoint
fn handle_health() -> (u16, serde_json::Value) {
    (
        200,
        serde_json::json!({
            "status": "ok",
            "service": "floodrisk_service",
            "version": "0.1.0"
        }),
    )
}

/// Handle /snapshot endpoint
fn handle_snapshot(store: &SnapshotStore) -> (u16, serde_json::Value) {
    match store.current() {
        Some(snapshot) => match serde_json::to_value(&snapshot) {
            Ok(body) => (200, body),
            Err(e) => (500, serde_json::json!({ "error": format!("serialization failed: {}", e) })),
        },
        None => (
            404,
            serde_json::json!({ "error": "no snapshot published yet" }),
        ),
    }
}

/// Handle /snapshot/{name} endpoint
fn handle_location_query(store: &SnapshotStore, name: &str) -> (u16, serde_json::Value) {
    let Some(snapshot) = store.current() else {
        return (
            404,
            serde_json::json!({ "error": "no snapshot published yet" }),
        );
    };

    match snapshot.result_for(name) {
        Some(result) => match serde_json::to_value(result) {
            Ok(body) => (200, body),
            Err(e) => (500, serde_json::json!({ "error": format!("serialization failed: {}", e) })),
        },
        None => (
            404,
            serde_json::json!({
                "error": format!("location '{}' is not in the monitored registry", name)
            }),
        ),
    }
}

/// Handle POST /refresh: kick off a refresh without blocking the request.
/// Overlapping refreshes are safe — the store's generation gate decides
/// which result is kept.
fn handle_refresh(engine: &Arc<AggregationEngine>) -> (u16, serde_json::Value) {
    let engine = Arc::clone(engine);
    std::thread::spawn(move || {
        if let Err(e) = engine.refresh() {
            eprintln!("✗ On-demand refresh failed: {}", e);
        }
    });
    (202, serde_json::json!({ "status": "refresh started" }))
}

fn handle_not_found() -> (u16, serde_json::Value) {
    (
        404,
        serde_json::json!({
            "error": "Not found",
            "available_endpoints": ["/health", "/snapshot", "/snapshot/{name}", "POST /refresh"]
        }),
    )
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the endpoint server on the specified port. Blocks serving requests;
/// callers run it on a background thread.
pub fn start_endpoint_server(
    port: u16,
    store: Arc<SnapshotStore>,
    engine: Arc<AggregationEngine>,
) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET  /snapshot        - Latest published snapshot");
    println!("   GET  /snapshot/{{name}} - Single location result");
    println!("   POST /refresh         - Trigger an on-demand refresh");
    println!("   GET  /health          - Service health check\n");

    for request in server.incoming_requests() {
        let url = request.url().to_string();

        let (status, body) = match (request.method(), url.as_str()) {
            (Method::Get, "/health") => handle_health(),
            (Method::Get, "/snapshot") => handle_snapshot(&store),
            (Method::Get, path) if path.starts_with("/snapshot/") => {
                handle_location_query(&store, path.trim_start_matches("/snapshot/"))
            }
            (Method::Post, "/refresh") => handle_refresh(&engine),
            _ => handle_not_found(),
        };

        if let Err(e) = request.respond(create_response(status, body)) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string());
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .unwrap_or_else(|_| unreachable!("static header is valid")),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, LocationResult, Province, RiskLevel, Snapshot};
    use chrono::Utc;

    fn populated_store() -> SnapshotStore {
        let store = SnapshotStore::new();
        store.publish(Snapshot {
            generation: 1,
            completed_at: Utc::now(),
            results: vec![LocationResult {
                location: Location {
                    name: "Lahore".to_string(),
                    province: Province::Punjab,
                    latitude: 31.5204,
                    longitude: 74.3587,
                },
                dates: vec!["2024-08-01".to_string()],
                discharge: vec![820.0],
                max_discharge: 820.0,
                avg_discharge: 820.0,
                risk_level: RiskLevel::Moderate,
                valid: true,
            }],
        });
        store
    }

    #[test]
    fn test_health_reports_ok() {
        let (status, body) = handle_health();
        assert_eq!(status, 200);
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_snapshot_before_first_publish_is_404() {
        let (status, body) = handle_snapshot(&SnapshotStore::new());
        assert_eq!(status, 404);
        assert!(
            body["error"].as_str().unwrap_or_default().contains("no snapshot"),
            "error should say no snapshot exists yet"
        );
    }

    #[test]
    fn test_snapshot_returns_published_data() {
        let (status, body) = handle_snapshot(&populated_store());
        assert_eq!(status, 200);
        assert_eq!(body["generation"], 1);
        assert_eq!(body["results"][0]["location"]["name"], "Lahore");
        assert_eq!(body["results"][0]["risk_level"], "moderate");
    }

    #[test]
    fn test_location_query_finds_result_by_name() {
        let (status, body) = handle_location_query(&populated_store(), "Lahore");
        assert_eq!(status, 200);
        assert_eq!(body["max_discharge"], 820.0);
        assert_eq!(body["valid"], true);
    }

    #[test]
    fn test_location_query_unknown_name_is_404() {
        let (status, body) = handle_location_query(&populated_store(), "Atlantis");
        assert_eq!(status, 404);
        assert!(body["error"].as_str().unwrap_or_default().contains("Atlantis"));
    }
}
