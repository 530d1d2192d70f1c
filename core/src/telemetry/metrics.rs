use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

/// Point-in-time copy of the store counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub saved: usize,
    pub loaded: usize,
    pub bytes_written: usize,
    pub errors: usize,
}

#[derive(Default)]
struct Metrics {
    saved: usize,
    loaded: usize,
    bytes_written: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_saved(&self, bytes: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.saved += 1;
            metrics.bytes_written += bytes;
        }
    }

    pub fn record_loaded(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.loaded += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                saved: metrics.saved,
                loaded: metrics.loaded,
                bytes_written: metrics.bytes_written,
                errors: metrics.errors,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
