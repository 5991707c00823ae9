// Service Bus Port
// Abstraction over the downstream JSON-RPC endpoint (real HTTP or canned)

use crate::domain::{JsonRpcRequest, JsonRpcResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Service bus caller trait
///
/// Implementations:
/// - HttpServiceBusCaller: POSTs the envelope to the configured endpoint
/// - MockServiceBusCaller: returns a canned response or error
#[async_trait]
pub trait ServiceBusCaller: Send + Sync {
    /// Send one JSON-RPC request and return the decoded response
    ///
    /// # Errors
    /// - AppError::Serialization if the envelope cannot be encoded
    /// - AppError::Transport if the endpoint is unreachable, times out or answers with an HTTP failure
    /// - AppError::Deserialization if the body is not a JSON-RPC response
    async fn call(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::application::put::codec;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Mock service bus behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Answer with a decoded envelope
        Respond(JsonRpcResponse),
        /// Answer with raw body bytes (run through BOM stripping and decoding)
        RespondRaw(Vec<u8>),
        /// Fail at the transport level with message
        TransportFail(String),
        /// Answer after a delay
        Delay(Duration, JsonRpcResponse),
        /// Never answer (for cancellation testing)
        Hang,
    }

    /// Mock ServiceBusCaller for testing
    pub struct MockServiceBusCaller {
        behavior: Arc<Mutex<MockBehavior>>,
        requests: Arc<Mutex<Vec<JsonRpcRequest>>>,
    }

    impl MockServiceBusCaller {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_response(response: JsonRpcResponse) -> Self {
            Self::new(MockBehavior::Respond(response))
        }

        pub fn new_raw(body: impl Into<Vec<u8>>) -> Self {
            Self::new(MockBehavior::RespondRaw(body.into()))
        }

        pub fn new_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::TransportFail(message.into()))
        }

        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Requests received so far, oldest first
        pub fn requests(&self) -> Vec<JsonRpcRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ServiceBusCaller for MockServiceBusCaller {
        async fn call(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
            self.requests.lock().unwrap().push(request.clone());

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Respond(response) => Ok(response),
                MockBehavior::RespondRaw(body) => codec::decode_response(codec::strip_bom(&body)),
                MockBehavior::TransportFail(msg) => Err(AppError::transport(msg)),
                MockBehavior::Delay(delay, response) => {
                    tokio::time::sleep(delay).await;
                    Ok(response)
                }
                MockBehavior::Hang => std::future::pending().await,
            }
        }
    }
}
