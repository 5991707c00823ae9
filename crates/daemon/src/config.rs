//! Daemon configuration
//!
//! Parsed once at startup from flags (with environment fallbacks) and then
//! handed to the adapters as plain structs.

use crate::logging::LogFormat;
use clap::Parser;
use contentservice_api_grpc::{GrpcServerConfig, TlsFiles};
use contentservice_core::error::{AppError, Result};
use contentservice_infra_http::config::{DEFAULT_SERVICEBUS_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use contentservice_infra_http::ServiceBusConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "contentservice")]
#[command(about = "gRPC front-end for the content service bus", long_about = None)]
#[command(version)]
pub struct DaemonConfig {
    /// Connection uses TLS if true, else plain TCP
    #[arg(long, env = "CONTENTSERVICE_TLS")]
    pub tls: bool,

    /// The TLS cert file
    #[arg(long, env = "CONTENTSERVICE_CERT_FILE", default_value = "testdata/server1.pem")]
    pub cert_file: PathBuf,

    /// The TLS key file
    #[arg(long, env = "CONTENTSERVICE_KEY_FILE", default_value = "testdata/server1.key")]
    pub key_file: PathBuf,

    /// The server port
    #[arg(long, env = "CONTENTSERVICE_PORT", default_value = "10000")]
    pub port: u16,

    /// The address to listen on
    #[arg(long, env = "CONTENTSERVICE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// The service bus execute endpoint
    #[arg(long, env = "CONTENTSERVICE_SERVICEBUS_ENDPOINT", default_value = DEFAULT_SERVICEBUS_ENDPOINT)]
    pub servicebus_endpoint: String,

    /// Upper bound for one service bus call, in seconds
    #[arg(long, env = "CONTENTSERVICE_SERVICEBUS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub servicebus_timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "CONTENTSERVICE_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl DaemonConfig {
    pub fn servicebus(&self) -> ServiceBusConfig {
        ServiceBusConfig::new(
            self.servicebus_endpoint.clone(),
            Duration::from_secs(self.servicebus_timeout_secs),
        )
    }

    pub fn grpc(&self) -> GrpcServerConfig {
        GrpcServerConfig {
            host: self.host.clone(),
            port: self.port,
            tls: self.tls.then(|| TlsFiles {
                cert_file: self.cert_file.clone(),
                key_file: self.key_file.clone(),
            }),
        }
    }

    /// Fail fast on settings that would only surface at the first call
    pub fn validate(&self) -> Result<()> {
        self.servicebus().validate()?;

        if self.tls {
            require_file(&self.cert_file, "cert")?;
            require_file(&self.key_file, "key")?;
        }

        Ok(())
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "TLS {} file not found: {}",
            what,
            path.display()
        )))
    }
}
