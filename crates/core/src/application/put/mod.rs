// Put Use Case - translate one Put call into a service bus round trip

pub mod codec;

use crate::domain::{
    JsonRpcRequest, JsonRpcResponse, PutOutcome, PutRequest, PutResponse, JSONRPC_VERSION,
    PUT_METHOD,
};
use crate::error::Result;
use crate::port::ServiceBusCaller;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Wrap a Put request in the fixed CONTENTSERVICE.PUT envelope
pub fn build_jsonrpc_request(request: PutRequest) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION.to_string(),
        method: PUT_METHOD.to_string(),
        params: request,
    }
}

/// Copy result and error verbatim into the caller-facing reply
pub fn build_put_response(response: JsonRpcResponse) -> PutResponse {
    PutResponse {
        result: response.result,
        error: response.error,
    }
}

/// Put Service
///
/// Holds nothing but the injected caller, so one instance is shared by every
/// concurrently handled request.
pub struct PutService {
    caller: Arc<dyn ServiceBusCaller>,
}

impl PutService {
    pub fn new(caller: Arc<dyn ServiceBusCaller>) -> Self {
        Self { caller }
    }

    /// Execute one Put
    ///
    /// A service bus error payload is a successful call: it comes back inside
    /// `PutResponse::error`. Only encode, transport and decode failures are `Err`.
    pub async fn put(&self, request: PutRequest) -> Result<PutResponse> {
        let contractor_id = request.contractor_id;
        let order_number = request.order_number;
        let envelope = build_jsonrpc_request(request);

        debug!(
            method = %envelope.method,
            contractor_id,
            order_number,
            "Calling service bus"
        );

        let response = match self.caller.call(&envelope).await {
            Ok(response) => build_put_response(response),
            Err(e) => {
                warn!(error = %e, contractor_id, order_number, "Service bus call failed");
                return Err(e);
            }
        };

        match response.outcome() {
            PutOutcome::Stored(result) => {
                info!(id = result.id, contractor_id, order_number, "Content stored")
            }
            PutOutcome::Rejected(error) => info!(
                code = error.code,
                message = %error.message,
                contractor_id,
                order_number,
                "Service bus rejected put"
            ),
            PutOutcome::Empty => warn!(
                contractor_id,
                order_number,
                "Service bus returned neither result nor error"
            ),
        }

        Ok(response)
    }
}
