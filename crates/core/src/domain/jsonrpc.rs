// JSON-RPC Envelopes exchanged with the service bus

use super::content::{PutRequest, PutResult, RpcError};
use serde::{Deserialize, Serialize};

/// Protocol version carried by every outbound envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// The only method the service bus is ever asked to run
pub const PUT_METHOD: &str = "CONTENTSERVICE.PUT";

/// Outbound request envelope (built fresh per call, never mutated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: PutRequest,
}

/// Inbound response envelope
///
/// Both members may technically be present; callers treat a populated
/// `error` as authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PutResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// Reply handed back to the gRPC caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutResponse {
    pub result: Option<PutResult>,
    pub error: Option<RpcError>,
}

/// Interpretation of a `PutResponse` (error takes precedence)
#[derive(Debug, PartialEq, Eq)]
pub enum PutOutcome<'a> {
    Stored(&'a PutResult),
    Rejected(&'a RpcError),
    Empty,
}

impl PutResponse {
    pub fn outcome(&self) -> PutOutcome<'_> {
        match (&self.error, &self.result) {
            (Some(error), _) => PutOutcome::Rejected(error),
            (None, Some(result)) => PutOutcome::Stored(result),
            (None, None) => PutOutcome::Empty,
        }
    }
}
