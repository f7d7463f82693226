use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::ConfigError;

/// Environment variable consulted by [`DispatcherConfig::from_env`]
pub const FAILURE_POLICY_ENV: &str = "EVENT_DISPATCH_FAILURE_POLICY";

/// What `notify` does when a handler returns an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing handler and return its error
    #[default]
    FailFast,
    /// Log the failure and keep invoking the remaining handlers
    Isolate,
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" | "failfast" => Ok(FailurePolicy::FailFast),
            "isolate" => Ok(FailurePolicy::Isolate),
            other => Err(ConfigError::UnknownFailurePolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Policy applied to handler failures during `notify`
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl DispatcherConfig {
    /// Config for callers that want every handler to run no matter what
    pub fn isolating() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
        }
    }

    /// Read the config from the environment, falling back to the defaults
    /// for anything that is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let failure_policy = match lookup(FAILURE_POLICY_ENV) {
            Some(raw) => raw.parse()?,
            None => FailurePolicy::default(),
        };

        Ok(Self { failure_policy })
    }
}
