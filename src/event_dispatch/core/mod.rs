// ============================================================================
// Event Dispatch Core - Event Value and Handler Capability
// ============================================================================
//
// Nothing in here knows about customers or any other aggregate.
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{DomainEvent, Event, SharedPayload};
pub use handler::{EventHandler, Isolated};
