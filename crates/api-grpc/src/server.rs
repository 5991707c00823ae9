//! gRPC Server
//!
//! Serves `ContentService` over TCP, optionally with TLS.

use crate::handler::ContentServiceHandler;
use crate::proto::ContentServiceServer;
use contentservice_core::port::ServiceBusCaller;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::server::TcpIncoming;
use tonic::transport::{Identity, Server, ServerTlsConfig};
use tracing::{error, info};

const DEFAULT_GRPC_HOST: &str = "0.0.0.0";
const DEFAULT_GRPC_PORT: u16 = 10000;

/// PEM files for the server identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsFiles {
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
}

/// gRPC Server Configuration
#[derive(Debug, Clone)]
pub struct GrpcServerConfig {
    pub host: String,
    pub port: u16,
    /// Plain TCP when `None`
    pub tls: Option<TlsFiles>,
}

impl Default for GrpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GRPC_HOST.to_string(),
            port: DEFAULT_GRPC_PORT,
            tls: None,
        }
    }
}

/// gRPC Server
pub struct GrpcServer {
    config: GrpcServerConfig,
    handler: ContentServiceHandler,
}

/// Handle to a running server
///
/// Dropping the handle without calling `stop` also shuts the server down.
pub struct GrpcServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), String>>,
}

impl GrpcServerHandle {
    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal graceful shutdown; in-flight calls are allowed to finish
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Wait until the server task exits
    pub async fn stopped(self) -> Result<(), String> {
        self.task
            .await
            .map_err(|e| format!("gRPC server task failed: {}", e))?
    }
}

/// Read the PEM pair into a tonic identity
pub async fn load_identity(files: &TlsFiles) -> Result<Identity, String> {
    let cert = tokio::fs::read(&files.cert_file)
        .await
        .map_err(|e| format!("Failed to read cert file {}: {}", files.cert_file.display(), e))?;
    let key = tokio::fs::read(&files.key_file)
        .await
        .map_err(|e| format!("Failed to read key file {}: {}", files.key_file.display(), e))?;

    Ok(Identity::from_pem(cert, key))
}

impl GrpcServer {
    pub fn new(config: GrpcServerConfig, caller: Arc<dyn ServiceBusCaller>) -> Self {
        Self {
            config,
            handler: ContentServiceHandler::new(caller),
        }
    }

    /// Bind the listener and start serving in the background
    pub async fn start(self) -> Result<GrpcServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let mut builder = Server::builder();
        if let Some(files) = &self.config.tls {
            let identity = load_identity(files).await?;
            builder = builder
                .tls_config(ServerTlsConfig::new().identity(identity))
                .map_err(|e| format!("Failed to configure TLS: {}", e))?;
        }

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to listen on {}: {}", addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| format!("Failed to resolve bound address: {}", e))?;
        let incoming = TcpIncoming::from_listener(listener, true, None)
            .map_err(|e| format!("Failed to accept on {}: {}", local_addr, e))?;

        info!(
            addr = %local_addr,
            tls = self.config.tls.is_some(),
            "Starting gRPC server"
        );

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = builder.add_service(ContentServiceServer::new(self.handler));

        let task = tokio::spawn(async move {
            let result = router
                .serve_with_incoming_shutdown(incoming, async {
                    let _ = shutdown_rx.await;
                })
                .await;

            match result {
                Ok(()) => {
                    info!("gRPC server stopped");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "gRPC server failed");
                    Err(e.to_string())
                }
            }
        });

        Ok(GrpcServerHandle {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }
}
