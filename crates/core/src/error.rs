// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// A downstream business error (a JSON-RPC response whose `error` member is
/// populated) is NOT represented here: it is a successful call and travels
/// inside `PutResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Transport error: {message}")]
    Transport { message: String, timed_out: bool },

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Transport failure that is not a timeout (connection refused, HTTP error, ...)
    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport {
            message: message.into(),
            timed_out: false,
        }
    }

    /// Transport failure caused by the outbound call exceeding its deadline
    pub fn timeout(message: impl Into<String>) -> Self {
        AppError::Transport {
            message: message.into(),
            timed_out: true,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Transport { timed_out: true, .. })
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
