//! Narrow interfaces onto pachd used by the admin commands.

pub mod error;
pub mod grpc;
pub mod proto;

pub use error::{RpcError, sanitize};
pub use grpc::{ClientConfig, GrpcClient};

use async_trait::async_trait;
use std::time::Duration;

use crate::version::Version;

/// Reports the version of the server at `address()`.
#[async_trait]
pub trait VersionApi: Send + Sync {
    fn address(&self) -> &str;

    async fn get_version(&self, timeout: Duration) -> Result<Version, RpcError>;
}

/// Cluster-wide mutating operations.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Delete all repos, commits, files, pipelines and jobs.
    async fn delete_all(&self) -> Result<(), RpcError>;

    /// Reclaim storage no longer referenced by any commit.
    async fn garbage_collect(&self) -> Result<(), RpcError>;
}
