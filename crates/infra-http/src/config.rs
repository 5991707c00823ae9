// Service bus connection settings

use contentservice_core::error::{AppError, Result};
use std::time::Duration;

pub const DEFAULT_SERVICEBUS_ENDPOINT: &str = "http://servicebus.qa01.local/Execute.svc/Execute";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service bus settings (read-only after startup)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBusConfig {
    pub endpoint: String,
    /// Upper bound for one outbound call, connect through last body byte
    pub timeout: Duration,
}

impl Default for ServiceBusConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SERVICEBUS_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceBusConfig {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Reject endpoints that are not absolute http(s) URLs and a zero timeout
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            AppError::Config(format!("Invalid service bus endpoint '{}': {}", self.endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Service bus endpoint must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(AppError::Config(
                "Service bus timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
