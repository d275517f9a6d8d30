//! tonic-backed client for the pachd version, pfs and pps services.

use async_trait::async_trait;
use std::time::Duration;
use tonic::Request;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use super::error::RpcError;
use super::proto::{
    Empty, GET_VERSION_PATH, GarbageCollectRequest, PFS_DELETE_ALL_PATH,
    PPS_DELETE_ALL_PATH, PPS_GARBAGE_COLLECT_PATH, VersionMessage,
};
use super::{ClusterApi, VersionApi};
use crate::config::Config;
use crate::logging::LogConfig;
use crate::version::Version;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to construct a client for one command invocation
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub address: String,
    pub metrics: bool,
    pub log: LogConfig,
}

impl ClientConfig {
    pub fn from_config(config: &Config, log: LogConfig) -> Self {
        Self {
            address: config.cluster.address.clone(),
            metrics: config.cluster.metrics,
            log,
        }
    }
}

/// gRPC client for a single pachd address.
///
/// The channel connects lazily, so construction never blocks on the
/// network; connection failures surface on the first call.
#[derive(Clone)]
pub struct GrpcClient {
    channel: Channel,
    config: ClientConfig,
}

impl GrpcClient {
    pub fn new(config: ClientConfig) -> Result<Self, RpcError> {
        let uri = if config.address.contains("://") {
            config.address.clone()
        } else {
            format!("http://{}", config.address)
        };

        let endpoint = Endpoint::from_shared(uri).map_err(|e| RpcError::InvalidAddress {
            address: config.address.clone(),
            message: e.to_string(),
        })?;
        let channel = endpoint.connect_timeout(CONNECT_TIMEOUT).connect_lazy();

        if config.log.transport_logging() {
            debug!(
                address = %config.address,
                metrics = config.metrics,
                "created pachd client"
            );
        }

        Ok(Self { channel, config })
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, RpcError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let address = &self.config.address;
        if self.config.log.transport_logging() {
            debug!(address = %address, path, "grpc unary call");
        }

        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready().await.map_err(|e| RpcError::Status {
            address: address.clone(),
            code: tonic::Code::Unavailable,
            message: e.to_string(),
        })?;

        let codec = ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(Request::new(request), PathAndQuery::from_static(path), codec)
            .await
            .map_err(|status| {
                if self.config.log.transport_logging() {
                    debug!(address = %address, path, ?status, "grpc call failed");
                }
                RpcError::from_status(address, &status)
            })?;

        Ok(response.into_inner())
    }
}

#[async_trait]
impl VersionApi for GrpcClient {
    fn address(&self) -> &str {
        &self.config.address
    }

    async fn get_version(&self, timeout: Duration) -> Result<Version, RpcError> {
        let call = self.unary::<Empty, VersionMessage>(GET_VERSION_PATH, Empty {});
        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result.map(Version::from),
            Err(_) => Err(RpcError::Timeout {
                address: self.config.address.clone(),
                timeout,
            }),
        }
    }
}

#[async_trait]
impl ClusterApi for GrpcClient {
    async fn delete_all(&self) -> Result<(), RpcError> {
        // Pipelines first so nothing writes into repos while they are removed
        self.unary::<Empty, Empty>(PPS_DELETE_ALL_PATH, Empty {})
            .await?;
        self.unary::<Empty, Empty>(PFS_DELETE_ALL_PATH, Empty {})
            .await?;
        Ok(())
    }

    async fn garbage_collect(&self) -> Result<(), RpcError> {
        self.unary::<GarbageCollectRequest, Empty>(PPS_GARBAGE_COLLECT_PATH, GarbageCollectRequest {})
            .await?;
        Ok(())
    }
}
