// Metrics hooks for the `correlate` crate.
//
// Callers install a global `CorrelationMetrics` implementation via
// [`set_correlation_metrics`]; every call to [`crate::correlate_all_jobs`]
// then reports its latency and aggregate statistics. Keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::CorrelationStats;

/// Metrics observer for batch correlation.
pub trait CorrelationMetrics: Send + Sync {
    /// Record the outcome of one batch.
    ///
    /// `job_count` is the number of jobs correlated, `latency` the wall-clock
    /// duration of the batch, and `stats` the aggregate computed for it.
    fn record_batch(&self, job_count: usize, latency: Duration, stats: &CorrelationStats);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CorrelationMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CorrelationMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CorrelationMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global correlation metrics recorder.
pub fn set_correlation_metrics(recorder: Option<Arc<dyn CorrelationMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
