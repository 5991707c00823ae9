// Domain Layer - Content records and the JSON-RPC envelopes

pub mod content;
pub mod jsonrpc;

// Re-exports
pub use content::{PutRequest, PutResult, RpcError};
pub use jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, PutOutcome, PutResponse, JSONRPC_VERSION, PUT_METHOD,
};
