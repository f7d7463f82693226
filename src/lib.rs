//! Same-process, synchronous domain event dispatch.
//!
//! Producers wrap a shared entity in an [`Event`] and ask the
//! [`EventDispatcher`] to notify every [`EventHandler`] registered under the
//! event's type name, in registration order.

pub mod domain;
pub mod event_dispatch;
pub mod metrics;

pub use event_dispatch::{
    DispatchError, DispatcherConfig, DomainEvent, Event, EventDispatcher, EventHandler,
    FailurePolicy, Isolated,
};
