// ============================================================================
// Event Dispatch Infrastructure
// ============================================================================
//
// Generic, same-process, synchronous fan-out of domain events.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

mod core;
mod dispatcher;

pub use self::core::*;
pub use self::dispatcher::*;
