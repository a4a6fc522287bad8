// Metrics hooks for the `matcher` crate.
//
// Callers install a global `ResolutionMetrics` implementation via
// [`set_resolution_metrics`], then every resolution call reports its corpus
// size, latency, and outcome. This keeps instrumentation decoupled from any
// specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchTier;

/// Metrics observer for resolution calls.
pub trait ResolutionMetrics: Send + Sync {
    /// Record the outcome of one resolution.
    ///
    /// `corpus_size` is the number of entities scanned, `latency` is the
    /// wall-clock duration of the scan, and `outcome` is the tier of the
    /// selected match, or `None` when no duplicate was found.
    fn record_resolution(&self, corpus_size: usize, latency: Duration, outcome: Option<MatchTier>);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ResolutionMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn ResolutionMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn ResolutionMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global resolution metrics recorder.
///
/// Typically called once during service startup so every caller of the
/// engine shares the same metrics backend.
pub fn set_resolution_metrics(recorder: Option<Arc<dyn ResolutionMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("resolution metrics lock poisoned");
    *guard = recorder;
}
