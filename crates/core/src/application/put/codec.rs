//! JSON envelope codec shared by every `ServiceBusCaller` adapter

use crate::domain::{JsonRpcRequest, JsonRpcResponse};
use crate::error::{AppError, Result};

/// UTF-8 byte-order-mark the service bus prepends to its JSON output
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encode the outbound envelope as JSON bytes
pub fn encode_request(request: &JsonRpcRequest) -> Result<Vec<u8>> {
    serde_json::to_vec(request).map_err(AppError::Serialization)
}

/// Remove a single leading BOM; a body without one is returned unchanged
pub fn strip_bom(body: &[u8]) -> &[u8] {
    body.strip_prefix(UTF8_BOM).unwrap_or(body)
}

/// Decode a (BOM-stripped) response body
pub fn decode_response(body: &[u8]) -> Result<JsonRpcResponse> {
    serde_json::from_slice(body).map_err(AppError::Deserialization)
}
