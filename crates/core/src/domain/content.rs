// Content Domain Model
//
// Field names on the wire follow the service bus contract: lowercase,
// no separators ("contractorid", "datemodefied", ...).

use serde::{Deserialize, Deserializer, Serialize};

/// Caller-supplied image upload request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutRequest {
    #[serde(rename = "contractorid")]
    pub contractor_id: i64,

    #[serde(rename = "ordernumber")]
    pub order_number: i64,

    #[serde(rename = "imagetype")]
    pub image_type: i32,

    #[serde(rename = "filename", deserialize_with = "null_as_default")]
    pub file_name: String,

    #[serde(rename = "imagewidth")]
    pub image_width: i32,

    #[serde(rename = "imageheight")]
    pub image_height: i32,

    /// Date-like string, passed through unvalidated
    #[serde(rename = "releasedate", deserialize_with = "null_as_default")]
    pub release_date: String,

    #[serde(rename = "deptcode", deserialize_with = "null_as_default")]
    pub dept_code: String,

    /// Base64-encoded image bytes
    #[serde(rename = "filecontents", deserialize_with = "null_as_default")]
    pub file_contents: String,
}

/// Record assigned by the service bus after a successful put
///
/// Opaque pass-through data: nothing here is interpreted by the shim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(rename = "contractorid", deserialize_with = "null_as_default")]
    pub contractor_id: i64,

    #[serde(rename = "ordernumber", deserialize_with = "null_as_default")]
    pub order_number: i64,

    #[serde(rename = "imagetype", deserialize_with = "null_as_default")]
    pub image_type: i32,

    #[serde(rename = "imagewidth", deserialize_with = "null_as_default")]
    pub image_width: i32,

    #[serde(rename = "imageheight", deserialize_with = "null_as_default")]
    pub image_height: i32,

    #[serde(rename = "releasedate", deserialize_with = "null_as_default")]
    pub release_date: String,

    #[serde(rename = "scandate", deserialize_with = "null_as_default")]
    pub scan_date: String,

    #[serde(rename = "deptcode", deserialize_with = "null_as_default")]
    pub dept_code: String,

    #[serde(rename = "descprefix", deserialize_with = "null_as_default")]
    pub desc_prefix: String,

    #[serde(rename = "desctext", deserialize_with = "null_as_default")]
    pub desc_text: String,

    #[serde(deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(deserialize_with = "null_as_default")]
    pub archived: String,

    #[serde(rename = "datecreated", deserialize_with = "null_as_default")]
    pub date_created: String,

    // Misspelled on the service bus side
    #[serde(rename = "datemodefied", deserialize_with = "null_as_default")]
    pub date_modified: String,

    #[serde(rename = "filesize", deserialize_with = "null_as_default")]
    pub file_size: i64,

    #[serde(rename = "imagefilename", deserialize_with = "null_as_default")]
    pub image_file_name: String,

    #[serde(rename = "thumbnailsize", deserialize_with = "null_as_default")]
    pub thumbnail_size: i64,

    #[serde(rename = "webfilename", deserialize_with = "null_as_default")]
    pub web_file_name: String,
}

/// Error payload of a JSON-RPC response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcError {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i32,

    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

impl RpcError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }
}

/// The service bus emits `null` for empty values; treat it as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
