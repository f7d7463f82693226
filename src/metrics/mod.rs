use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};

// ============================================================================
// Dispatch Metrics - Prometheus instrumentation for the event dispatcher
// ============================================================================
//
// Tracks:
// - Notifications per event type (handled and unhandled)
// - Handler invocations and failures
// - Time spent fanning out one notification
// - Number of live handler registrations
//
// Nothing is exported over the network; callers gather from `registry()`.
// ============================================================================

pub struct DispatchMetrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub events_unhandled: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
    pub notify_duration: HistogramVec,
    pub registered_handlers: IntGauge,
}

impl DispatchMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("events_notified_total", "Total notify calls"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let events_unhandled = IntCounterVec::new(
            Opts::new("events_unhandled_total", "Notify calls with no registered handler"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_unhandled.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new("handler_invocations_total", "Total handler invocations"),
            &["event_type"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            Opts::new("handler_failures_total", "Handler invocations that returned an error"),
            &["event_type", "handler"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        let notify_duration = HistogramVec::new(
            HistogramOpts::new("notify_duration_seconds", "Time spent invoking all handlers")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["event_type"],
        )?;
        registry.register(Box::new(notify_duration.clone()))?;

        let registered_handlers = IntGauge::new(
            "registered_handlers",
            "Handler registrations currently held by the dispatcher",
        )?;
        registry.register(Box::new(registered_handlers.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            events_unhandled,
            handler_invocations,
            handler_failures,
            notify_duration,
            registered_handlers,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_notify(&self, event_type: &str, handler_count: usize, duration_secs: f64) {
        self.events_notified.with_label_values(&[event_type]).inc();
        if handler_count == 0 {
            self.events_unhandled.with_label_values(&[event_type]).inc();
        }
        self.notify_duration.with_label_values(&[event_type]).observe(duration_secs);
    }

    pub fn record_invocation(&self, event_type: &str) {
        self.handler_invocations.with_label_values(&[event_type]).inc();
    }

    pub fn record_failure(&self, event_type: &str, handler: &str) {
        self.handler_failures.with_label_values(&[event_type, handler]).inc();
    }

    pub fn set_registered_handlers(&self, count: usize) {
        self.registered_handlers.set(count as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.record_notify("CustomerCreatedEvent", 1, 0.001);
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_notify_counts_unhandled() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.record_notify("CustomerCreatedEvent", 2, 0.001);
        metrics.record_notify("Nobody", 0, 0.0);

        assert_eq!(metrics.events_notified.with_label_values(&["CustomerCreatedEvent"]).get(), 1);
        assert_eq!(metrics.events_unhandled.with_label_values(&["CustomerCreatedEvent"]).get(), 0);
        assert_eq!(metrics.events_unhandled.with_label_values(&["Nobody"]).get(), 1);
    }

    #[test]
    fn test_record_failures_and_gauge() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.record_invocation("CustomerCreatedEvent");
        metrics.record_failure("CustomerCreatedEvent", "broken");
        metrics.set_registered_handlers(3);

        assert_eq!(metrics.handler_invocations.with_label_values(&["CustomerCreatedEvent"]).get(), 1);
        assert_eq!(
            metrics.handler_failures.with_label_values(&["CustomerCreatedEvent", "broken"]).get(),
            1
        );
        assert_eq!(metrics.registered_handlers.get(), 3);
    }
}
