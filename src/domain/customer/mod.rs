// ============================================================================
// Customer Domain - Producer and Subscribers of Customer Events
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Entity (Customer, with validation)
// - Events (CustomerCreatedEvent, CustomerChangeAddressEvent)
// - Handlers (log reactions to those events)
// - Service (mutates customers, then publishes through the dispatcher)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;
pub mod events;
pub mod handlers;
pub mod service;

pub use value_objects::*;
pub use errors::*;
pub use entity::*;
pub use events::*;
pub use handlers::*;
pub use service::*;
