//! Protobuf messages for the `contentservice` package
//!
//! ```text
//! service ContentService { rpc Put(PutRequest) returns (PutResponse); }
//! ```

// ---------------------------------------------------------------------------
// Message types (prost - standard protobuf wire format)
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PutRequest {
    #[prost(int64, tag = "1")]
    pub contractorid: i64,
    #[prost(int64, tag = "2")]
    pub ordernumber: i64,
    #[prost(int32, tag = "3")]
    pub imagetype: i32,
    #[prost(string, tag = "4")]
    pub filename: String,
    #[prost(int32, tag = "5")]
    pub imagewidth: i32,
    #[prost(int32, tag = "6")]
    pub imageheight: i32,
    #[prost(string, tag = "7")]
    pub releasedate: String,
    #[prost(string, tag = "8")]
    pub deptcode: String,
    /// Base64-encoded image bytes
    #[prost(string, tag = "9")]
    pub filecontents: String,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct JsonRpcResult {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int64, tag = "2")]
    pub contractorid: i64,
    #[prost(int64, tag = "3")]
    pub ordernumber: i64,
    #[prost(int32, tag = "4")]
    pub imagetype: i32,
    #[prost(int32, tag = "5")]
    pub imagewidth: i32,
    #[prost(int32, tag = "6")]
    pub imageheight: i32,
    #[prost(string, tag = "7")]
    pub releasedate: String,
    #[prost(string, tag = "8")]
    pub scandate: String,
    #[prost(string, tag = "9")]
    pub deptcode: String,
    #[prost(string, tag = "10")]
    pub descprefix: String,
    #[prost(string, tag = "11")]
    pub desctext: String,
    #[prost(string, tag = "12")]
    pub category: String,
    #[prost(string, tag = "13")]
    pub archived: String,
    #[prost(string, tag = "14")]
    pub datecreated: String,
    #[prost(string, tag = "15")]
    pub datemodefied: String,
    #[prost(int64, tag = "16")]
    pub filesize: i64,
    #[prost(string, tag = "17")]
    pub imagefilename: String,
    #[prost(int64, tag = "18")]
    pub thumbnailsize: i64,
    #[prost(string, tag = "19")]
    pub webfilename: String,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct JsonRpcError {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PutResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<JsonRpcResult>,
    #[prost(message, optional, tag = "2")]
    pub error: Option<JsonRpcError>,
}

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/contentservice.ContentService.rs"));

pub use content_service_client::ContentServiceClient;
pub use content_service_server::{ContentService, ContentServiceServer};
