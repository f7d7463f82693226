use anyhow::Result;

use super::event::Event;

// ============================================================================
// Event Handler Capability
// ============================================================================

/// A unit of reaction to one kind of event.
///
/// Handlers are shared with the dispatcher behind an `Arc` and may be
/// registered under several event types. They must not assume they run only
/// once per occurrence.
pub trait EventHandler: Send + Sync {
    /// React to the event. An `Err` is surfaced to the caller of `notify`
    /// unless the dispatcher (or an [`Isolated`] wrapper) isolates it.
    fn handle(&self, event: &Event) -> Result<()>;

    /// Name used in logs and metric labels
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Wraps a handler so its failures are logged and swallowed instead of
/// aborting the remaining handlers of a notify call.
pub struct Isolated<H> {
    inner: H,
}

impl<H: EventHandler> Isolated<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: EventHandler> EventHandler for Isolated<H> {
    fn handle(&self, event: &Event) -> Result<()> {
        if let Err(e) = self.inner.handle(event) {
            tracing::error!(
                handler = self.inner.name(),
                event_id = %event.event_id(),
                error = %e,
                "Isolated handler failed"
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingHandler {
        calls: AtomicUsize,
    }

    impl EventHandler for FailingHandler {
        fn handle(&self, _event: &Event) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("boom")
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct Unnamed;

    impl EventHandler for Unnamed {
        fn handle(&self, _event: &Event) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_isolated_swallows_failure() {
        let handler = Isolated::new(FailingHandler {
            calls: AtomicUsize::new(0),
        });
        let event = Event::new(Arc::new(()));

        assert!(handler.handle(&event).is_ok());
        assert_eq!(handler.name(), "failing");
        assert_eq!(handler.into_inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(Unnamed.name().ends_with("Unnamed"));
    }
}
