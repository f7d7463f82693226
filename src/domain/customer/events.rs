use std::sync::Arc;

use anyhow::{anyhow, Result};
use parking_lot::RwLock;

use crate::event_dispatch::{DomainEvent, Event};

use super::entity::{Customer, SharedCustomer};

// ============================================================================
// Customer Domain Events
// ============================================================================
//
// Both events carry the shared customer handle, so handlers read the
// customer as it is when `notify` runs.
//
// ============================================================================

/// A customer was registered
pub struct CustomerCreatedEvent;

impl DomainEvent for CustomerCreatedEvent {
    const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
}

impl CustomerCreatedEvent {
    pub fn for_customer(customer: &SharedCustomer) -> Event {
        Event::new(Arc::clone(customer))
    }
}

/// A customer's address was replaced
pub struct CustomerChangeAddressEvent;

impl DomainEvent for CustomerChangeAddressEvent {
    const EVENT_TYPE: &'static str = "CustomerChangeAddressEvent";
}

impl CustomerChangeAddressEvent {
    pub fn for_customer(customer: &SharedCustomer) -> Event {
        Event::new(Arc::clone(customer))
    }
}

/// Borrow the customer carried by a customer event
pub fn customer_payload(event: &Event) -> Result<&RwLock<Customer>> {
    event
        .payload::<RwLock<Customer>>()
        .ok_or_else(|| anyhow!("Event {} does not carry a customer", event.event_id()))
}
