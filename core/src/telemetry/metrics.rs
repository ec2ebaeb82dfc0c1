use std::sync::Mutex;

/// Run-wide rendering counters owned by the driver.
pub struct RenderMetrics {
    inner: Mutex<Counters>,
}

struct Counters {
    locations: usize,
    rendered: usize,
    skipped: usize,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                locations: 0,
                rendered: 0,
                skipped: 0,
            }),
        }
    }

    pub fn record_location(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.locations += 1;
        }
    }

    pub fn record_rendered(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rendered += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.skipped += 1;
        }
    }

    /// (locations, rendered, skipped) processed so far.
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.locations, counters.rendered, counters.skipped)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
