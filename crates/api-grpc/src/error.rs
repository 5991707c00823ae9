//! gRPC Error Mapping
//!
//! Maps application errors to gRPC status codes. A service bus error payload
//! never reaches this module: it is returned inside `PutResponse`.

use contentservice_core::error::AppError;
use tonic::{Code, Status};

/// Convert AppError to a gRPC Status
pub fn to_status(err: AppError) -> Status {
    let code = match &err {
        AppError::Serialization(_) => Code::Internal,
        AppError::Transport {
            timed_out: true, ..
        } => Code::DeadlineExceeded,
        AppError::Transport { .. } => Code::Unavailable,
        AppError::Deserialization(_) => Code::DataLoss,
        AppError::Config(_) => Code::Internal,
    };

    Status::new(code, err.to_string())
}
