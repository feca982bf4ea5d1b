//! Memoization of snapshots, owned by the caller.
//!
//! The statistics are pure functions of the record set, so a caller that
//! recomputes them often (e.g. on every redraw) can keep a [SnapshotCache]
//! and only pay for record sets it has not seen before.

use crate::driver;
use crate::input::ConcordanceRecord;
use crate::output::AnalyticsSnapshot;
use log::trace;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

pub fn content_hash(records: &[ConcordanceRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.hash(&mut hasher);
    hasher.finish()
}

struct Entry {
    records: Vec<ConcordanceRecord>,
    snapshot: AnalyticsSnapshot,
}

/// Snapshots keyed by the content of their record set.
///
/// Holds at most `capacity` record sets; when full, the cache is cleared.
pub struct SnapshotCache {
    capacity: usize,
    entries: HashMap<u64, Entry>,
    hits: u64,
    misses: u64,
}

impl SnapshotCache {
    pub fn new(capacity: usize) -> SnapshotCache {
        SnapshotCache {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The snapshot of `records`, computed only if an equal record set is not cached.
    pub fn get_or_compute(&mut self, records: &[ConcordanceRecord]) -> &AnalyticsSnapshot {
        let key = content_hash(records);
        let fresh = match self.entries.get(&key) {
            Some(e) => e.records != records,
            None => true,
        };
        if fresh {
            self.misses += 1;
            if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
                trace!(target: "concordance", "snapshot cache full, clearing");
                self.entries.clear();
            }
            let entry = Entry {
                records: records.to_vec(),
                snapshot: driver::analyze(records),
            };
            self.entries.insert(key, entry);
        } else {
            self.hits += 1;
        }
        &self.entries[&key].snapshot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(16)
    }
}
