//! Content Service SDK - Rust Client Library
//!
//! Provides a convenient client for the content service gRPC front-end.
//!
//! # Example
//!
//! ```no_run
//! use contentservice_sdk::{read_file_contents, ClientConfig, ContentServiceClient, PutRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to the front-end
//!     let client = ContentServiceClient::connect(ClientConfig::default()).await?;
//!
//!     // Upload an image
//!     let response = client.put(PutRequest {
//!         contractor_id: 72494,
//!         order_number: 600016555,
//!         image_type: 1,
//!         file_name: "photo.png".to_string(),
//!         image_width: 100,
//!         image_height: 100,
//!         release_date: "2015-08-06".to_string(),
//!         dept_code: "01".to_string(),
//!         file_contents: read_file_contents("photo.png")?,
//!     }).await?;
//!
//!     if let Some(result) = response.result {
//!         println!("put id: {}", result.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod files;

pub use client::{ClientConfig, ContentServiceClient};
pub use error::{Result, SdkError};
pub use files::read_file_contents;

// Domain types shared with the server
pub use contentservice_core::domain::{PutOutcome, PutRequest, PutResponse, PutResult, RpcError};
