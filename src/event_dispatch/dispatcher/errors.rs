// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler '{handler}' failed while handling {event_type}: {source}")]
    HandlerFailed {
        event_type: String,
        handler: String,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    pub fn event_type(&self) -> &str {
        match self {
            DispatchError::HandlerFailed { event_type, .. } => event_type,
        }
    }

    pub fn handler(&self) -> &str {
        match self {
            DispatchError::HandlerFailed { handler, .. } => handler,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown failure policy: {0} (expected 'fail_fast' or 'isolate')")]
    UnknownFailurePolicy(String),
}
