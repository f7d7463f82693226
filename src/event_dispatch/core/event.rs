use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// Event - Timestamped Payload Handed to Handlers
// ============================================================================
//
// The payload is held behind an `Arc`, never deep-copied. A producer that
// keeps its own handle to the same entity and mutates it before notifying
// will have those mutations observed by the handlers.
//
// ============================================================================

/// Opaque shared payload carried by an [`Event`]
pub type SharedPayload = Arc<dyn Any + Send + Sync>;

/// A domain occurrence ready to be dispatched
#[derive(Clone)]
pub struct Event {
    event_id: Uuid,
    occurred_at: DateTime<Utc>,
    payload: SharedPayload,
}

impl Event {
    /// Wrap a shared payload, stamping it with the current wall-clock time
    pub fn new<T>(payload: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Borrow the payload as `T`, or `None` if it holds something else
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Clone out the shared handle to the payload as `T`
    pub fn shared_payload<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.payload).downcast::<T>().ok()
    }

    pub fn is_payload<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_id", &self.event_id)
            .field("occurred_at", &self.occurred_at)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Domain Event Names
// ============================================================================

/// Marker for a category of domain event.
///
/// The name is the registry key used by the dispatcher. Keeping it on a type
/// lets producers and subscribers share one definition instead of repeating
/// string literals at every call site.
pub trait DomainEvent: 'static {
    const EVENT_TYPE: &'static str;

    fn event_type() -> &'static str {
        Self::EVENT_TYPE
    }
}
