use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    analyses_completed: usize,
    fallbacks_served: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                analyses_completed: 0,
                fallbacks_served: 0,
            }),
        }
    }

    pub fn record_analysis(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.analyses_completed += 1;
        }
    }

    pub fn record_fallback(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.fallbacks_served += 1;
        }
    }

    /// Returns `(analyses_completed, fallbacks_served)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.analyses_completed, metrics.fallbacks_served)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_analysis();
        recorder.record_analysis();
        recorder.record_fallback();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
