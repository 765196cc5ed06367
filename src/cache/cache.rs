// Caching is opt-in: the analyzer only consults a cache the caller passes in.
// Entries are never mutated after insertion, only replaced or evicted.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::types::{AnalysisKey, AnalysisReport};

/// Storage for finished analyses, keyed by [`AnalysisKey`].
pub trait ScoreCache {
    fn get(&self, key: &AnalysisKey) -> Option<AnalysisReport>;

    fn insert(&self, key: AnalysisKey, report: AnalysisReport);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedReport {
    pub report: AnalysisReport,
    pub stored_at: DateTime<Utc>, // informational only
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<AnalysisKey, CachedReport>,
    // Insertion order, oldest first
    order: VecDeque<AnalysisKey>,
}

/// Bounded in-process cache with first-in-first-out eviction.
/// Safe to share between threads; a capacity of 0 stores nothing.
#[derive(Debug)]
pub struct InMemoryScoreCache {
    capacity: usize,
    state: RwLock<CacheState>,
}

impl InMemoryScoreCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: RwLock::new(CacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &AnalysisKey) -> bool {
        self.state.read().entries.contains_key(key)
    }

    pub fn entry(&self, key: &AnalysisKey) -> Option<CachedReport> {
        self.state.read().entries.get(key).cloned()
    }

    pub fn clear(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.order.clear();
    }
}

impl ScoreCache for InMemoryScoreCache {
    fn get(&self, key: &AnalysisKey) -> Option<AnalysisReport> {
        self.state
            .read()
            .entries
            .get(key)
            .map(|cached| cached.report.clone())
    }

    fn insert(&self, key: AnalysisKey, report: AnalysisReport) {
        if self.capacity == 0 {
            return;
        }

        let cached = CachedReport {
            report,
            stored_at: Utc::now(),
        };

        let mut state = self.state.write();
        if state.entries.contains_key(&key) {
            state.entries.insert(key, cached);
            return;
        }

        while state.entries.len() >= self.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            state.entries.remove(&oldest);
            tracing::trace!(key = oldest.as_str(), "evicted cached analysis");
        }

        state.order.push_back(key.clone());
        state.entries.insert(key, cached);
    }
}
