/// Flood risk aggregation engine.
///
/// One `refresh()` call fans out a forecast fetch per registered location,
/// reduces each outcome to a `LocationResult`, and assembles a complete
/// snapshot in registry order. Fetches run in parallel on a thread pool and
/// results are collected over a channel tagged with the registry index, so
/// completion order never affects result order.
///
/// Per-location failures are absorbed into degraded all-zero results and
/// recorded with a log line; the only whole-batch failure is an empty
/// registry. A batch is published only once every location has resolved —
/// partial snapshots never leave this module.

use crate::ingest::ForecastFetcher;
use crate::model::{Location, LocationResult, RawForecast, RefreshError, RiskLevel, Snapshot};
use crate::risk;
use crate::store::SnapshotStore;
use chrono::Utc;
use std::sync::Arc;
use std::sync::mpsc;
use threadpool::ThreadPool;

/// Upper bound on concurrent forecast requests per refresh. The registry is
/// small, so in practice every location gets its own worker.
const DEFAULT_MAX_PARALLEL: usize = 8;

pub struct AggregationEngine {
    registry: Vec<Location>,
    fetcher: Arc<dyn ForecastFetcher>,
    store: Arc<SnapshotStore>,
    max_parallel: usize,
}

impl AggregationEngine {
    pub fn new(
        registry: Vec<Location>,
        fetcher: Arc<dyn ForecastFetcher>,
        store: Arc<SnapshotStore>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            store,
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }

    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    pub fn registry(&self) -> &[Location] {
        &self.registry
    }

    /// Runs one full refresh cycle and hands the assembled snapshot to the
    /// store. Blocks until every location has resolved (the fetch client's
    /// request timeout bounds how long that can take).
    ///
    /// Returns the snapshot whether or not the store accepted it — a
    /// superseded publish is an expected outcome of overlapping refreshes,
    /// not a failure.
    ///
    /// # Errors
    /// `RefreshError::EmptyRegistry` — no locations configured.
    pub fn refresh(&self) -> Result<Snapshot, RefreshError> {
        if self.registry.is_empty() {
            return Err(RefreshError::EmptyRegistry);
        }

        // Generation is taken at trigger time, not completion time: a
        // refresh triggered later must win the publish race even if an
        // earlier one is still in flight.
        let generation = self.store.next_generation();

        let pool = ThreadPool::new(self.max_parallel.min(self.registry.len()));
        let (tx, rx) = mpsc::channel();

        for (index, location) in self.registry.iter().cloned().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let tx = tx.clone();
            pool.execute(move || {
                let outcome = fetcher.fetch(&location);
                let _ = tx.send((index, outcome));
            });
        }
        drop(tx);

        let mut slots: Vec<Option<LocationResult>> = vec![None; self.registry.len()];
        for (index, outcome) in rx {
            let location = self.registry[index].clone();
            slots[index] = Some(match outcome {
                Ok(raw) => reduce_forecast(location, raw),
                Err(e) => {
                    eprintln!("   ✗ {} fetch failed: {}", self.registry[index].name, e);
                    failed_result(location)
                }
            });
        }

        // A worker that died without reporting still yields a degraded
        // result, so the snapshot always covers the full registry.
        let results: Vec<LocationResult> = slots
            .into_iter()
            .zip(self.registry.iter())
            .map(|(slot, location)| slot.unwrap_or_else(|| failed_result(location.clone())))
            .collect();

        let snapshot = Snapshot {
            generation,
            completed_at: Utc::now(),
            results,
        };

        if !self.store.publish(snapshot.clone()) {
            println!(
                "   Refresh generation {} superseded by a newer snapshot",
                generation
            );
        }

        Ok(snapshot)
    }
}

/// Reduces a raw forecast to a per-location result.
///
/// Two distinct transformations, kept separate on purpose:
/// - the displayed series substitutes 0.0 for absent days;
/// - max/avg are computed over present, non-NaN values only, so a data gap
///   does not drag the average toward zero.
/// Both statistics default to 0.0 (and the tier to low) when no valid value
/// exists.
pub fn reduce_forecast(location: Location, raw: RawForecast) -> LocationResult {
    let displayed: Vec<f64> = raw
        .discharge
        .iter()
        .map(|d| d.unwrap_or(0.0))
        .collect();

    let valid_values: Vec<f64> = raw
        .discharge
        .iter()
        .filter_map(|d| *d)
        .filter(|v| !v.is_nan())
        .collect();

    let (max_discharge, avg_discharge) = if valid_values.is_empty() {
        (0.0, 0.0)
    } else {
        let max = valid_values.iter().copied().fold(f64::MIN, f64::max);
        let avg = valid_values.iter().sum::<f64>() / valid_values.len() as f64;
        (max, avg)
    };

    LocationResult {
        location,
        dates: raw.dates,
        discharge: displayed,
        risk_level: risk::classify(max_discharge),
        max_discharge,
        avg_discharge,
        valid: true,
    }
}

/// Degraded result for a location whose fetch failed: empty series,
/// all-zero statistics, low risk, `valid == false`.
fn failed_result(location: Location) -> LocationResult {
    LocationResult {
        location,
        dates: Vec::new(),
        discharge: Vec::new(),
        max_discharge: 0.0,
        avg_discharge: 0.0,
        risk_level: RiskLevel::Low,
        valid: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
