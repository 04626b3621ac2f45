use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_recorded: AtomicU64,
    requests_rejected: AtomicU64,
    store_errors: AtomicU64,
    timelines_built: AtomicU64,
}

impl Metrics {
    pub fn record_event(&self) {
        self.events_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_request(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_timelines_built(&self, count: usize) {
        self.timelines_built
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let recorded = self.events_recorded.load(Ordering::Relaxed);
        let rejected = self.requests_rejected.load(Ordering::Relaxed);
        let store_errors = self.store_errors.load(Ordering::Relaxed);
        let timelines = self.timelines_built.load(Ordering::Relaxed);

        format!(
            "# TYPE portal_events_recorded_total counter\n\
portal_events_recorded_total {}\n\
# TYPE portal_requests_rejected_total counter\n\
portal_requests_rejected_total {}\n\
# TYPE portal_store_errors_total counter\n\
portal_store_errors_total {}\n\
# TYPE portal_timelines_built_total counter\n\
portal_timelines_built_total {}\n",
            recorded, rejected, store_errors, timelines
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_prometheus_text() {
        let metrics = Metrics::default();
        metrics.record_event();
        metrics.record_event();
        metrics.record_rejected_request();
        metrics.record_timelines_built(3);

        let rendered = metrics.render_prometheus();
        assert!(rendered.contains("portal_events_recorded_total 2"));
        assert!(rendered.contains("portal_requests_rejected_total 1"));
        assert!(rendered.contains("portal_store_errors_total 0"));
        assert!(rendered.contains("portal_timelines_built_total 3"));
    }
}
