use anyhow::Result;

use crate::event_dispatch::{Event, EventHandler};

use super::entity::Customer;
use super::events::customer_payload;

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First reaction to `CustomerCreatedEvent`: a one-line log entry
#[derive(Debug, Default)]
pub struct LogCustomerCreatedHandler;

impl LogCustomerCreatedHandler {
    pub fn describe(customer: &Customer) -> String {
        format!("Customer created: {}, {}", customer.id(), customer.name())
    }
}

impl EventHandler for LogCustomerCreatedHandler {
    fn handle(&self, event: &Event) -> Result<()> {
        let customer = customer_payload(event)?.read();
        tracing::info!(
            event_id = %event.event_id(),
            occurred_at = %event.occurred_at(),
            "{}",
            Self::describe(&customer)
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log_customer_created"
    }
}

/// Second reaction to `CustomerCreatedEvent`: logs the full customer as JSON
#[derive(Debug, Default)]
pub struct LogCustomerCreatedSnapshotHandler;

impl LogCustomerCreatedSnapshotHandler {
    pub fn describe(customer: &Customer) -> Result<String> {
        Ok(serde_json::to_string(customer)?)
    }
}

impl EventHandler for LogCustomerCreatedSnapshotHandler {
    fn handle(&self, event: &Event) -> Result<()> {
        let snapshot = Self::describe(&customer_payload(event)?.read())?;
        tracing::info!(event_id = %event.event_id(), customer = %snapshot, "Customer created");
        Ok(())
    }

    fn name(&self) -> &str {
        "log_customer_created_snapshot"
    }
}

/// Reaction to `CustomerChangeAddressEvent`
#[derive(Debug, Default)]
pub struct LogCustomerAddressChangedHandler;

impl LogCustomerAddressChangedHandler {
    pub fn describe(customer: &Customer) -> String {
        let address = customer
            .address()
            .map(ToString::to_string)
            .unwrap_or_default();
        format!(
            "Endereço do cliente: {}, {} alterado para: {}",
            customer.id(),
            customer.name(),
            address
        )
    }
}

impl EventHandler for LogCustomerAddressChangedHandler {
    fn handle(&self, event: &Event) -> Result<()> {
        let customer = customer_payload(event)?.read();
        tracing::info!(event_id = %event.event_id(), "{}", Self::describe(&customer));
        Ok(())
    }

    fn name(&self) -> &str {
        "log_customer_address_changed"
    }
}
