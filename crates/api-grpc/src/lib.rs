//! gRPC API Layer
//!
//! Exposes the `contentservice.ContentService/Put` method and maps it onto
//! the core Put use case.

pub mod convert;
pub mod error;
pub mod handler;
pub mod proto;
pub mod server;

pub use handler::ContentServiceHandler;
pub use server::{GrpcServer, GrpcServerConfig, GrpcServerHandle, TlsFiles};
