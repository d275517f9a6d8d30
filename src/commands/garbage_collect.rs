use anyhow::{Context, Result};
use console::style;

use crate::client::{ClientConfig, ClusterApi, GrpcClient};
use crate::config::ConfigInput;
use crate::registry::Invocation;

pub async fn cmd_garbage_collect(invocation: &Invocation) -> Result<()> {
    let config = invocation.config(ConfigInput::default())?;
    let client = GrpcClient::new(ClientConfig::from_config(&config, invocation.log()))?;

    garbage_collect(&client, &config.cluster.address).await?;
    println!("{}", style("Garbage collection finished").green());
    Ok(())
}

/// Ask the cluster to reclaim unreferenced storage. The cluster refuses
/// while jobs are running; that refusal comes back as the error.
pub async fn garbage_collect<C>(cluster: &C, address: &str) -> Result<()>
where
    C: ClusterApi + ?Sized,
{
    cluster
        .garbage_collect()
        .await
        .with_context(|| format!("garbage collection failed on pachd at {}", address))
}
