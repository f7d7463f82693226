use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use crate::event_dispatch::core::{DomainEvent, Event, EventHandler};
use crate::metrics::DispatchMetrics;

use super::config::{DispatcherConfig, FailurePolicy};
use super::errors::DispatchError;

// ============================================================================
// Event Dispatcher - Name → Handlers Registry with Synchronous Fan-out
// ============================================================================
//
// Rules:
// 1. Handlers run in registration order, on the caller's thread
// 2. Registering the same handler twice appends it twice
// 3. Unregister matches by identity (same Arc), never by value
// 4. A name whose list becomes empty is removed from the map
// 5. The lock is released before handlers run, so a handler may register or
//    unregister on the same dispatcher; the change applies to the next notify
//
// ============================================================================

pub struct EventDispatcher {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    config: DispatcherConfig,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        metrics.set_registered_handlers(self.total_handlers());
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Append `handler` to the list for `event_type`
    pub fn register(&self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(event_type = %event_type, handler = handler.name(), "Registering handler");

        let mut handlers = self.handlers.write();
        handlers.entry(event_type).or_default().push(handler);
        self.update_registered_gauge(&handlers);
    }

    /// Remove the first registration of this exact handler instance.
    /// Unknown names or handlers are ignored.
    pub fn unregister<H>(&self, event_type: &str, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        let mut handlers = self.handlers.write();

        let Some(list) = handlers.get_mut(event_type) else {
            return;
        };

        let target = Arc::as_ptr(handler);
        if let Some(index) = list
            .iter()
            .position(|existing| std::ptr::addr_eq(Arc::as_ptr(existing), target))
        {
            let removed = list.remove(index);
            tracing::debug!(event_type, handler = removed.name(), "Unregistered handler");
        }

        if list.is_empty() {
            handlers.remove(event_type);
        }
        self.update_registered_gauge(&handlers);
    }

    /// Drop every registration under every name
    pub fn unregister_all(&self) {
        let mut handlers = self.handlers.write();
        handlers.clear();
        self.update_registered_gauge(&handlers);
        tracing::debug!("Unregistered all handlers");
    }

    /// Invoke every handler registered under `event_type`, in order.
    ///
    /// With no handlers this is a no-op. Under [`FailurePolicy::FailFast`] the
    /// first failing handler stops the fan-out and its error is returned.
    pub fn notify(&self, event: &Event, event_type: &str) -> Result<(), DispatchError> {
        let started = Instant::now();
        let handlers = self.snapshot(event_type);

        if handlers.is_empty() {
            tracing::trace!(event_type, event_id = %event.event_id(), "No handlers registered");
            self.record_notify(event_type, 0, started);
            return Ok(());
        }

        tracing::debug!(
            event_type,
            event_id = %event.event_id(),
            handlers = handlers.len(),
            "Notifying handlers"
        );

        for handler in &handlers {
            if let Some(metrics) = &self.metrics {
                metrics.record_invocation(event_type);
            }

            let Err(source) = handler.handle(event) else {
                continue;
            };

            if let Some(metrics) = &self.metrics {
                metrics.record_failure(event_type, handler.name());
            }

            match self.config.failure_policy {
                FailurePolicy::FailFast => {
                    self.record_notify(event_type, handlers.len(), started);
                    return Err(DispatchError::HandlerFailed {
                        event_type: event_type.to_string(),
                        handler: handler.name().to_string(),
                        source,
                    });
                }
                FailurePolicy::Isolate => {
                    tracing::error!(
                        event_type,
                        event_id = %event.event_id(),
                        handler = handler.name(),
                        error = %source,
                        "Handler failed, continuing with remaining handlers"
                    );
                }
            }
        }

        self.record_notify(event_type, handlers.len(), started);
        Ok(())
    }

    pub fn register_for<E: DomainEvent>(&self, handler: Arc<dyn EventHandler>) {
        self.register(E::EVENT_TYPE, handler);
    }

    pub fn unregister_for<E, H>(&self, handler: &Arc<H>)
    where
        E: DomainEvent,
        H: EventHandler + ?Sized,
    {
        self.unregister(E::EVENT_TYPE, handler);
    }

    /// Notify using the name carried by the marker type `E`
    pub fn publish<E: DomainEvent>(&self, event: &Event) -> Result<(), DispatchError> {
        self.notify(event, E::EVENT_TYPE)
    }

    pub fn handlers_count(&self, event_type: &str) -> usize {
        self.handlers.read().get(event_type).map_or(0, Vec::len)
    }

    pub fn has_handlers(&self, event_type: &str) -> bool {
        self.handlers_count(event_type) > 0
    }

    /// Names that currently have at least one handler, sorted
    pub fn event_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    fn total_handlers(&self) -> usize {
        self.handlers.read().values().map(Vec::len).sum()
    }

    fn snapshot(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }

    fn record_notify(&self, event_type: &str, handler_count: usize, started: Instant) {
        if let Some(metrics) = &self.metrics {
            metrics.record_notify(event_type, handler_count, started.elapsed().as_secs_f64());
        }
    }

    fn update_registered_gauge(&self, handlers: &HashMap<String, Vec<Arc<dyn EventHandler>>>) {
        if let Some(metrics) = &self.metrics {
            metrics.set_registered_handlers(handlers.values().map(Vec::len).sum());
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<String, usize> = self
            .handlers
            .read()
            .iter()
            .map(|(name, list)| (name.clone(), list.len()))
            .collect();

        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .field("config", &self.config)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
