//! # Correlation Cache (`cache`)
//!
//! Maps job ids to their most recently computed [`JobCorrelation`] under a
//! single shared population timestamp. The cache is valid only while
//! `now - populated_at < ttl`; there is no per-entry expiry, and clearing
//! drops every entry and unsets the timestamp.
//!
//! One cache should be created per logical dataset and shared by reference
//! (`Arc<CorrelationCache>`). All state sits behind one mutex, so readers
//! never observe a half-replaced map.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use cache::{CorrelationCache, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new());
//! let cache = CorrelationCache::with_clock(Duration::from_secs(300), clock.clone());
//! cache.replace_all(Vec::new());
//! assert!(cache.is_valid());
//!
//! clock.advance(Duration::from_secs(300));
//! assert!(cache.is_expired());
//! ```

mod clock;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use correlate::JobCorrelation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use crate::clock::{Clock, ManualClock, SystemClock};

/// Default time-to-live for a populated cache.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Counters describing cache traffic since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Full populations plus windows opened by single inserts.
    pub populations: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, Arc<JobCorrelation>>,
    populated_at: Option<Instant>,
}

/// Shared job-id -> correlation cache with all-or-nothing expiry.
#[derive(Debug)]
pub struct CorrelationCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    state: Mutex<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
    populations: AtomicU64,
}

impl Default for CorrelationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationCache {
    /// Cache with [`DEFAULT_TTL`] on the system clock.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            state: Mutex::new(CacheState::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            populations: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn valid_at(&self, state: &CacheState, now: Instant) -> bool {
        match state.populated_at {
            Some(at) => now.saturating_duration_since(at) < self.ttl,
            None => false,
        }
    }

    /// Cached correlation for `job_id`, only while the cache is valid.
    pub fn get(&self, job_id: &str) -> Option<Arc<JobCorrelation>> {
        let state = self.lock();
        let hit = if self.valid_at(&state, self.clock.now()) {
            state.entries.get(job_id).cloned()
        } else {
            None
        };
        drop(state);

        match hit {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Replace every entry and restart the TTL window.
    pub fn replace_all<I>(&self, correlations: I)
    where
        I: IntoIterator<Item = JobCorrelation>,
    {
        let entries: HashMap<String, Arc<JobCorrelation>> = correlations
            .into_iter()
            .map(|c| (c.job.id.clone(), Arc::new(c)))
            .collect();
        let entry_count = entries.len();

        let mut state = self.lock();
        state.entries = entries;
        state.populated_at = Some(self.clock.now());
        drop(state);

        self.populations.fetch_add(1, Ordering::Relaxed);
        info!(entry_count, ttl_secs = self.ttl.as_secs(), "cache_populated");
    }

    /// Cache one on-demand correlation.
    ///
    /// A cache that is not currently valid drops its stale entries and
    /// starts a new window holding only this entry.
    pub fn insert(&self, correlation: JobCorrelation) -> Arc<JobCorrelation> {
        let entry = Arc::new(correlation);
        let now = self.clock.now();

        let mut state = self.lock();
        if !self.valid_at(&state, now) {
            state.entries.clear();
            state.populated_at = Some(now);
            self.populations.fetch_add(1, Ordering::Relaxed);
        }
        state
            .entries
            .insert(entry.job.id.clone(), Arc::clone(&entry));
        drop(state);

        debug!(job_id = %entry.job.id, "cache_insert");
        entry
    }

    /// Drop every entry and unset the population timestamp.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.populated_at = None;
        drop(state);
        info!(dropped, "cache_cleared");
    }

    /// Populated and still inside the TTL window.
    pub fn is_valid(&self) -> bool {
        let state = self.lock();
        self.valid_at(&state, self.clock.now())
    }

    /// Populated at some point and now past the TTL window.
    pub fn is_expired(&self) -> bool {
        let state = self.lock();
        state.populated_at.is_some() && !self.valid_at(&state, self.clock.now())
    }

    /// Time since the cache was last populated.
    pub fn age(&self) -> Option<Duration> {
        let state = self.lock();
        state
            .populated_at
            .map(|at| self.clock.now().saturating_duration_since(at))
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            populations: self.populations.load(Ordering::Relaxed),
        }
    }
}
