//! ContentService Handler
//!
//! Bridges the generated `ContentService` trait to the core Put use case.

use crate::error::to_status;
use crate::proto::{self, ContentService};
use contentservice_core::application::PutService;
use contentservice_core::port::ServiceBusCaller;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// gRPC handler with injected dependencies
///
/// If the caller goes away, tonic drops the `put` future and with it the
/// in-flight service bus request.
pub struct ContentServiceHandler {
    service: Arc<PutService>,
}

impl ContentServiceHandler {
    pub fn new(caller: Arc<dyn ServiceBusCaller>) -> Self {
        Self {
            service: Arc::new(PutService::new(caller)),
        }
    }
}

#[tonic::async_trait]
impl ContentService for ContentServiceHandler {
    async fn put(
        &self,
        request: Request<proto::PutRequest>,
    ) -> Result<Response<proto::PutResponse>, Status> {
        let remote_addr = request.remote_addr();
        let req = request.into_inner();

        debug!(
            remote_addr = ?remote_addr,
            contractor_id = req.contractorid,
            filename = %req.filename,
            file_contents_bytes = req.filecontents.len(),
            "Put received"
        );

        let response = self.service.put(req.into()).await.map_err(to_status)?;

        Ok(Response::new(response.into()))
    }
}
