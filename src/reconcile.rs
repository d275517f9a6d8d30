//! Resolve the `from`/`to` versions of a migration.
//!
//! An explicit value is always used verbatim. A missing `from` is read from
//! the live cluster within [`VERSION_QUERY_TIMEOUT`]; if the cluster cannot
//! answer the whole resolution fails. A missing `to` is this binary's own
//! version.

use thiserror::Error;
use tracing::debug;

use crate::client::{RpcError, VersionApi};
use crate::constants::VERSION_QUERY_TIMEOUT;
use crate::version::Version;

/// Both ends of a migration, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    pub from: String,
    pub to: String,
}

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error(
        "unable to discover cluster version ({address}); please provide the --from flag.  Error: {cause}"
    )]
    Unreachable { address: String, cause: RpcError },
}

fn explicit(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub async fn resolve<V>(
    explicit_from: Option<&str>,
    explicit_to: Option<&str>,
    client_version: &Version,
    live: &V,
) -> Result<ResolvedVersions, ReconcileError>
where
    V: VersionApi + ?Sized,
{
    let from = match explicit(explicit_from) {
        Some(from) => from.to_string(),
        None => {
            debug!("No --from given, querying cluster at {}", live.address());
            let query = live.get_version(VERSION_QUERY_TIMEOUT);
            let result = match tokio::time::timeout(VERSION_QUERY_TIMEOUT, query).await {
                Ok(result) => result,
                Err(_) => Err(RpcError::Timeout {
                    address: live.address().to_string(),
                    timeout: VERSION_QUERY_TIMEOUT,
                }),
            };
            let cluster_version = result.map_err(|cause| ReconcileError::Unreachable {
                address: live.address().to_string(),
                cause,
            })?;
            cluster_version.pretty_no_additional()
        }
    };

    let to = match explicit(explicit_to) {
        Some(to) => to.to_string(),
        None => client_version.pretty_no_additional(),
    };

    debug!("Resolved migration versions: {} -> {}", from, to);
    Ok(ResolvedVersions { from, to })
}
