//! Content Service CLI - uploads one image through the gRPC front-end

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use contentservice_sdk::{
    read_file_contents, ClientConfig, ContentServiceClient, PutOutcome, PutRequest, PutResult,
};
use std::path::PathBuf;
use std::time::Duration;
use tabled::{Table, Tabled};

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:10000";

#[derive(Parser, Debug)]
#[command(name = "contentservice-client")]
#[command(about = "Put an image through the content service", long_about = None)]
#[command(version)]
struct Cli {
    /// Connection uses TLS if true, else plain TCP
    #[arg(long, env = "CONTENTSERVICE_TLS")]
    tls: bool,

    /// The file containing the CA root cert
    #[arg(long, env = "CONTENTSERVICE_CA_FILE", default_value = "testdata/ca.pem")]
    ca_file: PathBuf,

    /// The server address in the format of host:port
    #[arg(long, env = "CONTENTSERVICE_SERVER_ADDR", default_value = DEFAULT_SERVER_ADDR)]
    server_addr: String,

    /// The server name used to verify the hostname returned by the TLS handshake
    #[arg(long, default_value = "")]
    server_host_override: String,

    /// Call deadline in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Contractor id for the Put call
    #[arg(long, default_value = "72494")]
    contractorid: i64,

    /// Order number for the Put call
    #[arg(long, default_value = "600016555")]
    ordernumber: i64,

    /// Image type for the Put call
    #[arg(long, default_value = "1")]
    imagetype: i32,

    /// Image file to upload
    #[arg(
        long,
        default_value = "../testdata/e3e0f976-79a5-4059-ac23-d44386a6d4da.png"
    )]
    filename: PathBuf,

    /// Image width for the Put call
    #[arg(long, default_value = "100")]
    imagewidth: i32,

    /// Image height for the Put call
    #[arg(long, default_value = "100")]
    imageheight: i32,

    /// Release date for the Put call
    #[arg(long, default_value = "2015-08-06")]
    releasedate: String,

    /// Department code for the Put call
    #[arg(long, default_value = "01")]
    deptcode: String,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server_addr: self.server_addr.clone(),
            tls: self.tls,
            ca_file: Some(self.ca_file.clone()).filter(|p| !p.as_os_str().is_empty()),
            server_host_override: Some(self.server_host_override.clone())
                .filter(|h| !h.is_empty()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn put_request(&self) -> Result<PutRequest> {
        let file_contents = read_file_contents(&self.filename).with_context(|| {
            format!(
                "Error retrieving the file contents of {}",
                self.filename.display()
            )
        })?;

        Ok(PutRequest {
            contractor_id: self.contractorid,
            order_number: self.ordernumber,
            image_type: self.imagetype,
            file_name: self.filename.display().to_string(),
            image_width: self.imagewidth,
            image_height: self.imageheight,
            release_date: self.releasedate.clone(),
            dept_code: self.deptcode.clone(),
            file_contents,
        })
    }
}

#[derive(Tabled)]
struct StoredRow {
    id: i64,
    contractorid: i64,
    ordernumber: i64,
    filesize: i64,
    datecreated: String,
    webfilename: String,
}

impl From<&PutResult> for StoredRow {
    fn from(r: &PutResult) -> Self {
        Self {
            id: r.id,
            contractorid: r.contractor_id,
            ordernumber: r.order_number,
            filesize: r.file_size,
            datecreated: r.date_created.clone(),
            webfilename: r.web_file_name.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let request = cli.put_request()?;
    let client = ContentServiceClient::connect(cli.client_config())
        .await
        .with_context(|| format!("Failed to dial {}", cli.server_addr))?;

    let response = client
        .put(request)
        .await
        .context("Error making put call")?;

    match response.outcome() {
        PutOutcome::Stored(result) => {
            println!("{} {}", "put id:".green().bold(), result.id);
            println!();
            println!("{}", Table::new(vec![StoredRow::from(result)]));
        }
        PutOutcome::Rejected(error) => {
            println!("{} {}", "put error:".red().bold(), error.message);
        }
        PutOutcome::Empty => {
            println!("{}", "put returned neither result nor error".yellow());
        }
    }

    Ok(())
}
