pub mod config;
pub mod errors;
pub mod registry;

pub use config::{DispatcherConfig, FailurePolicy, FAILURE_POLICY_ENV};
pub use errors::{ConfigError, DispatchError};
pub use registry::EventDispatcher;
