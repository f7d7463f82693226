use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use domain_events::domain::customer::{
    Address, CustomerChangeAddressEvent, CustomerCreatedEvent, CustomerService,
    LogCustomerAddressChangedHandler, LogCustomerCreatedHandler,
    LogCustomerCreatedSnapshotHandler,
};
use domain_events::event_dispatch::{DispatcherConfig, DomainEvent, EventDispatcher};
use domain_events::metrics::DispatchMetrics;

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,domain_events=debug")),
        )
        .init();

    let config = DispatcherConfig::from_env()?;
    tracing::info!(failure_policy = ?config.failure_policy, "Starting domain event demo");

    let metrics = Arc::new(DispatchMetrics::new()?);
    let dispatcher = Arc::new(EventDispatcher::with_config(config).with_metrics(Arc::clone(&metrics)));

    // === 1. Wire handlers ===
    dispatcher.register_for::<CustomerCreatedEvent>(Arc::new(LogCustomerCreatedHandler));
    dispatcher.register_for::<CustomerCreatedEvent>(Arc::new(LogCustomerCreatedSnapshotHandler));
    dispatcher.register_for::<CustomerChangeAddressEvent>(Arc::new(LogCustomerAddressChangedHandler));

    // === 2. Run the customer lifecycle ===
    let service = CustomerService::new(Arc::clone(&dispatcher));

    let customer = service.create(
        "123",
        "Customer 1",
        Some(Address::new("Street 1", 1, "Zipcode 1", "City 1")?),
    )?;

    service.change_address(&customer, Address::new("Street 2", 2, "Zipcode 2", "City 2")?)?;

    // === 3. Report ===
    for event_type in [CustomerCreatedEvent::EVENT_TYPE, CustomerChangeAddressEvent::EVENT_TYPE] {
        tracing::info!(
            event_type,
            notified = metrics.events_notified.with_label_values(&[event_type]).get(),
            invocations = metrics.handler_invocations.with_label_values(&[event_type]).get(),
            "Dispatch summary"
        );
    }

    dispatcher.unregister_all();
    tracing::info!("Demo complete");

    Ok(())
}
