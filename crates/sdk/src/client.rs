//! Content Service Client Implementation

use crate::error::{Result, SdkError};
use contentservice_api_grpc::proto;
use contentservice_core::domain::{PutRequest, PutResponse};
use std::path::PathBuf;
use std::time::Duration;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:10000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `host:port` of the gRPC front-end
    pub server_addr: String,
    pub tls: bool,
    /// CA bundle used to verify the server; native roots when `None`
    pub ca_file: Option<PathBuf>,
    /// Name checked against the server certificate instead of the host
    pub server_host_override: Option<String>,
    /// Deadline sent with every call (`grpc-timeout`)
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            tls: false,
            ca_file: None,
            server_host_override: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Content Service Client
///
/// Cloning is cheap: clones share the underlying channel.
///
/// # Example
///
/// ```no_run
/// use contentservice_sdk::{ClientConfig, ContentServiceClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContentServiceClient::connect(ClientConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ContentServiceClient {
    inner: proto::ContentServiceClient<Channel>,
    timeout: Duration,
}

impl ContentServiceClient {
    /// Connect to the content service
    ///
    /// # Errors
    /// - SdkError::InvalidAddress if `server_addr` does not form a valid URI
    /// - SdkError::Io if the CA file cannot be read
    /// - SdkError::Tls if the TLS configuration is rejected
    /// - SdkError::Connection if the server cannot be reached
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let scheme = if config.tls { "https" } else { "http" };
        let uri = format!("{}://{}", scheme, config.server_addr);

        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| SdkError::InvalidAddress(format!("{}: {}", uri, e)))?;

        if config.tls {
            endpoint = endpoint
                .tls_config(tls_config(&config).await?)
                .map_err(|e| SdkError::Tls(e.to_string()))?;
        }

        let channel = endpoint.connect().await?;

        Ok(Self {
            inner: proto::ContentServiceClient::new(channel),
            timeout: config.timeout,
        })
    }

    /// Store one image through the service bus
    ///
    /// A service bus rejection is `Ok` with `PutResponse::error` set; `Err`
    /// means the call itself failed.
    pub async fn put(&self, request: PutRequest) -> Result<PutResponse> {
        let mut request = tonic::Request::new(proto::PutRequest::from(request));
        request.set_timeout(self.timeout);

        let response = self.inner.clone().put(request).await?;

        Ok(response.into_inner().into())
    }
}

async fn tls_config(config: &ClientConfig) -> Result<ClientTlsConfig> {
    let mut tls = ClientTlsConfig::new();

    tls = match &config.ca_file {
        Some(path) => {
            let pem = tokio::fs::read(path).await?;
            tls.ca_certificate(Certificate::from_pem(pem))
        }
        None => tls.with_native_roots(),
    };

    if let Some(host) = config.server_host_override.as_deref().filter(|h| !h.is_empty()) {
        tls = tls.domain_name(host);
    }

    Ok(tls)
}
