//! Error types for calls against pachd.

use std::time::Duration;
use thiserror::Error;
use tonic::Status;

/// Failures talking to pachd. Every variant names the address it was
/// talking to; `Status` only ever carries the sanitized description.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The configured address cannot be turned into an endpoint.
    #[error("invalid pachd address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    /// The call did not complete within its deadline.
    #[error("timed out after {timeout:?} waiting for pachd at {address}")]
    Timeout { address: String, timeout: Duration },

    /// pachd (or the transport underneath) rejected the call.
    #[error("{message}")]
    Status {
        address: String,
        code: tonic::Code,
        message: String,
    },
}

impl RpcError {
    pub fn from_status(address: &str, status: &Status) -> Self {
        RpcError::Status {
            address: address.to_string(),
            code: status.code(),
            message: sanitize(status),
        }
    }

    pub fn address(&self) -> &str {
        match self {
            RpcError::InvalidAddress { address, .. }
            | RpcError::Timeout { address, .. }
            | RpcError::Status { address, .. } => address,
        }
    }

    /// True when the failure means pachd could not be reached at all
    pub fn is_connectivity(&self) -> bool {
        match self {
            RpcError::InvalidAddress { .. } | RpcError::Timeout { .. } => true,
            RpcError::Status { code, .. } => {
                matches!(code, tonic::Code::Unavailable | tonic::Code::DeadlineExceeded)
            }
        }
    }
}

/// Reduce a gRPC status to the human-readable description underneath it.
///
/// Transport failures wrap the real cause ("transport error", "tcp connect
/// error") around an io error at the bottom of the source chain; that
/// innermost error is the description. Statuses sent by pachd have no
/// source and keep their message.
pub fn sanitize(status: &Status) -> String {
    let mut innermost = None;
    let mut source = std::error::Error::source(status);
    while let Some(err) = source {
        innermost = Some(err.to_string());
        source = err.source();
    }
    if let Some(cause) = innermost {
        return cause;
    }

    let message = status.message().trim();
    if message.is_empty() {
        return status.code().description().to_string();
    }
    message.to_string()
}
