// HTTP service bus caller
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::config::ServiceBusConfig;
use contentservice_core::application::put::codec;
use contentservice_core::domain::{JsonRpcRequest, JsonRpcResponse};
use contentservice_core::error::{AppError, Result};
use contentservice_core::port::ServiceBusCaller;

/// The service bus only accepts this content type, even though the body is JSON
pub const SERVICEBUS_CONTENT_TYPE: &str = "application/octet-stream";

/// Service bus caller over HTTP
///
/// Cheap to share: `reqwest::Client` pools connections internally and the
/// endpoint never changes after construction.
pub struct HttpServiceBusCaller {
    client: Client,
    endpoint: Url,
}

impl HttpServiceBusCaller {
    /// Create a caller for the configured endpoint
    ///
    /// # Errors
    /// - AppError::Config if the endpoint or timeout is invalid, or the client cannot be built
    pub fn new(config: ServiceBusConfig) -> Result<Self> {
        config.validate()?;

        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| AppError::Config(format!("Invalid service bus endpoint: {}", e)))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

/// Map reqwest failures onto the transport taxonomy
fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::timeout(format!("Service bus call timed out: {}", err))
    } else {
        AppError::transport(format!("Service bus unreachable: {}", err))
    }
}

#[async_trait]
impl ServiceBusCaller for HttpServiceBusCaller {
    async fn call(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let body = codec::encode_request(request)?;

        debug!(
            endpoint = %self.endpoint,
            method = %request.method,
            body_bytes = body.len(),
            "POST service bus"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, SERVICEBUS_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let raw = response.bytes().await.map_err(transport_error)?;

        debug!(status = %status, body_bytes = raw.len(), "Service bus answered");

        match codec::decode_response(codec::strip_bom(&raw)) {
            Ok(decoded) => {
                if !status.is_success() {
                    warn!(status = %status, "Service bus returned a JSON-RPC body with a failure status");
                }
                Ok(decoded)
            }
            // A non-JSON error page is an HTTP failure, not a protocol one
            Err(e) if !status.is_success() => {
                warn!(status = %status, error = %e, "Service bus returned an HTTP failure");
                Err(AppError::transport(format!(
                    "Service bus answered HTTP {}",
                    status
                )))
            }
            Err(e) => Err(e),
        }
    }
}
