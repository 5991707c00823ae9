//! Simple SDK Example
//!
//! Demonstrates a single Put through the content service.
//!
//! # Usage
//!
//! 1. Start the front-end:
//!    ```bash
//!    cargo run --package contentservice-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple -- path/to/image.png
//!    ```

use contentservice_sdk::{
    read_file_contents, ClientConfig, ContentServiceClient, PutOutcome, PutRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Content Service SDK - Simple Example");
    println!("====================================\n");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "testdata/e3e0f976-79a5-4059-ac23-d44386a6d4da.png".to_string());

    // 1. Connect to the front-end
    println!("1. Connecting...");
    let client = ContentServiceClient::connect(ClientConfig::default()).await?;
    println!("   ✓ Connected\n");

    // 2. Put the image
    println!("2. Uploading {}...", path);
    let response = client
        .put(PutRequest {
            contractor_id: 72494,
            order_number: 600016555,
            image_type: 1,
            file_name: path.clone(),
            image_width: 100,
            image_height: 100,
            release_date: "2015-08-06".to_string(),
            dept_code: "01".to_string(),
            file_contents: read_file_contents(&path)?,
        })
        .await?;

    match response.outcome() {
        PutOutcome::Stored(result) => {
            println!("   ✓ Stored with id {}", result.id);
            println!("   Web file: {}", result.web_file_name);
        }
        PutOutcome::Rejected(error) => println!("   ✗ Rejected: {}", error.message),
        PutOutcome::Empty => println!("   ? Service bus returned nothing"),
    }

    Ok(())
}
