//! Flood Risk Service - Main Daemon
//!
//! A server-side daemon that periodically:
//! 1. Fetches 30-day river discharge forecasts for every monitored location
//! 2. Reduces each series to max/avg statistics and a risk tier
//! 3. Publishes a consistent snapshot of all locations
//! 4. Serves the snapshot over a JSON HTTP endpoint
//!
//! Chart, table, and map rendering are handled by external consumers that
//! read the published snapshot.
//!
//! Usage:
//!   cargo run --release                        # Refresh loop, no endpoint
//!   cargo run --release -- --endpoint 8080     # Also serve JSON on port 8080
//!   cargo run --release -- --interval 30       # Refresh every 30 minutes
//!   cargo run --release -- --locations my.toml # Override location registry
//!   cargo run --release -- --once              # Single refresh, then exit

use floodrisk_service::config;
use floodrisk_service::endpoint;
use floodrisk_service::engine::AggregationEngine;
use floodrisk_service::ingest::open_meteo::OpenMeteoClient;
use floodrisk_service::locations;
use floodrisk_service::model::Snapshot;
use floodrisk_service::store::SnapshotStore;
use std::env;
use std::sync::Arc;

const DEFAULT_INTERVAL_MINUTES: u64 = 60;

fn main() {
    println!("🌊 Flood Risk Service");
    println!("======================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut endpoint_port: Option<u16> = None;
    let mut interval_minutes = DEFAULT_INTERVAL_MINUTES;
    let mut locations_file: Option<String> = None;
    let mut run_once = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            "--interval" => {
                if i + 1 < args.len() {
                    interval_minutes = args[i + 1].parse().unwrap_or(DEFAULT_INTERVAL_MINUTES);
                    i += 2;
                } else {
                    eprintln!("Error: --interval requires a number of minutes");
                    std::process::exit(1);
                }
            }
            "--locations" => {
                if i + 1 < args.len() {
                    locations_file = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --locations requires a file path");
                    std::process::exit(1);
                }
            }
            "--once" => {
                run_once = true;
                i += 1;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!(
                    "Usage: {} [--endpoint PORT] [--interval MINUTES] [--locations FILE] [--once]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
    }

    // Load the location registry
    let registry = match &locations_file {
        Some(path) => {
            println!("📋 Loading locations from {}...", path);
            config::load_locations(path)
        }
        None => locations::builtin_registry(),
    };
    println!("   Monitoring {} locations\n", registry.len());

    // Build the fetch client, store, and engine
    let fetcher = match OpenMeteoClient::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let store = Arc::new(SnapshotStore::new());
    let engine = Arc::new(AggregationEngine::new(
        registry,
        fetcher,
        Arc::clone(&store),
    ));

    // Start HTTP endpoint if requested (in background thread)
    if let Some(port) = endpoint_port {
        println!("🚀 Starting HTTP endpoint server...");
        let endpoint_store = Arc::clone(&store);
        let endpoint_engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            if let Err(e) = endpoint::start_endpoint_server(port, endpoint_store, endpoint_engine) {
                eprintln!("❌ Endpoint server error: {}", e);
            }
        });
    }

    // Run the refresh loop
    println!("🔄 Starting refresh loop...");
    println!("   Refresh interval: {} minutes", interval_minutes);
    println!("   Press Ctrl+C to stop\n");

    loop {
        let start = std::time::Instant::now();

        match engine.refresh() {
            Ok(snapshot) => print_snapshot_summary(&snapshot),
            Err(e) => {
                eprintln!("❌ Refresh failed: {}", e);
                std::process::exit(1);
            }
        }

        if run_once {
            break;
        }

        // Sleep until next refresh interval
        let interval = std::time::Duration::from_secs(interval_minutes * 60);
        if let Some(remaining) = interval.checked_sub(start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}

fn print_snapshot_summary(snapshot: &Snapshot) {
    let failed = snapshot.results.iter().filter(|r| !r.valid).count();
    println!(
        "✓ Refresh {} complete: {} locations ({} failed)",
        snapshot.generation,
        snapshot.results.len(),
        failed
    );

    for result in &snapshot.results {
        if result.valid {
            println!(
                "   {:<12} {:<12} {:>8}  max {:>9.1} m³/s  avg {:>9.1} m³/s",
                result.location.name,
                result.location.province.to_string(),
                result.risk_level.to_string(),
                result.max_discharge,
                result.avg_discharge
            );
        } else {
            println!(
                "   {:<12} {:<12} {:>8}  (no data - fetch failed)",
                result.location.name,
                result.location.province.to_string(),
                result.risk_level.to_string()
            );
        }
    }
    println!();
}
