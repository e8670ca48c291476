/// Generation-gated snapshot store.
///
/// Holds the latest published snapshot and arbitrates overlapping refresh
/// attempts. Refreshes may run concurrently (a user can trigger a new one
/// while an old one is still waiting on the network); the only shared state
/// between them is this store, and the generation gate guarantees that a
/// slow, superseded refresh can never overwrite the result of a newer one
/// that finished first.
///
/// State machine: Empty → Populated, with Populated replaced indefinitely
/// by newer Populated snapshots. `current()` generation is monotonically
/// non-decreasing over time.

use crate::model::Snapshot;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct SnapshotStore {
    latest: Mutex<Option<Snapshot>>,
    // Counts refresh triggers, not publishes: a generation is taken when a
    // refresh starts, so trigger order decides which snapshot wins.
    generation: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Allocates the next refresh generation. Strictly increasing across
    /// all callers; the first refresh gets generation 1.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publishes a candidate snapshot. Replaces the stored snapshot only if
    /// the candidate's generation is strictly greater; otherwise the
    /// candidate is silently dropped and `false` is returned. A dropped
    /// candidate is an expected concurrency outcome, not an error.
    pub fn publish(&self, candidate: Snapshot) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        let accept = match latest.as_ref() {
            Some(stored) => candidate.generation > stored.generation,
            None => true,
        };
        if accept {
            *latest = Some(candidate);
        }
        accept
    }

    /// Returns a clone of the latest published snapshot, or `None` before
    /// the first successful publish.
    pub fn current(&self) -> Option<Snapshot> {
        self.latest.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
