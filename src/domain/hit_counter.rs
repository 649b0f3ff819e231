//! Process-wide tally of requests routed through the hit-count middleware.

use std::sync::atomic::{AtomicU32, Ordering};

/// Atomic hit counter shared between the middleware and the admin reporter.
///
/// Created once by the composition root and shared as `Arc<HitCounter>`.
/// All operations use `SeqCst`, so any interleaving of concurrent
/// increments, reads, and resets is consistent with a single total order.
/// No increment is ever lost.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU32,
}

impl HitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one hit. Wraps on overflow.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the current number of hits.
    pub fn read(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Sets the counter back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}
