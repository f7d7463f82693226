use std::sync::Arc;

use anyhow::Result;

use crate::event_dispatch::EventDispatcher;

use super::entity::{Customer, SharedCustomer};
use super::events::{CustomerChangeAddressEvent, CustomerCreatedEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Entity behavior → (success) → Event → Dispatcher
//
// Events are only published once the state change has been applied.
//
// ============================================================================

pub struct CustomerService {
    dispatcher: Arc<EventDispatcher>,
}

impl CustomerService {
    pub fn new(dispatcher: Arc<EventDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.dispatcher
    }

    /// Build a customer, optionally with an address, and announce it
    pub fn create(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
    ) -> Result<SharedCustomer> {
        let mut customer = Customer::new(id, name)?;
        if let Some(address) = address {
            customer.change_address(address)?;
        }

        let customer = customer.into_shared();
        let event = CustomerCreatedEvent::for_customer(&customer);
        self.dispatcher.publish::<CustomerCreatedEvent>(&event)?;

        Ok(customer)
    }

    /// Replace the customer's address and announce the change
    pub fn change_address(&self, customer: &SharedCustomer, address: Address) -> Result<()> {
        // The write guard must be gone before handlers read the customer
        customer.write().change_address(address)?;

        let event = CustomerChangeAddressEvent::for_customer(customer);
        self.dispatcher.publish::<CustomerChangeAddressEvent>(&event)?;

        Ok(())
    }
}
