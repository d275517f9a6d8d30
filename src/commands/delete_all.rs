use anyhow::{Context, Result};
use console::style;
use tracing::info;

use crate::client::{ClientConfig, ClusterApi, GrpcClient};
use crate::config::ConfigInput;
use crate::guard::{Confirmer, GuardOutcome, LineConfirmer, guard_destructive};
use crate::registry::Invocation;

pub const DELETE_ALL_PROMPT: &str =
    "Are you sure you want to delete all repos, commits, files, pipelines and jobs? yN";

pub async fn cmd_delete_all(invocation: &Invocation) -> Result<()> {
    let config = invocation.config(ConfigInput::default())?;
    // Connect before asking so a bad address fails without a prompt
    let client = GrpcClient::new(ClientConfig::from_config(&config, invocation.log()))?;

    let mut confirmer = LineConfirmer::stdio();
    let outcome = delete_all(&client, &config.cluster.address, &mut confirmer).await?;
    if outcome == GuardOutcome::Performed {
        println!("{}", style("Deleted all cluster state").green());
    }
    Ok(())
}

pub async fn delete_all<C, K>(cluster: &C, address: &str, confirmer: &mut K) -> Result<GuardOutcome>
where
    C: ClusterApi + ?Sized,
    K: Confirmer + ?Sized,
{
    let outcome = guard_destructive(confirmer, DELETE_ALL_PROMPT, || async {
        cluster
            .delete_all()
            .await
            .with_context(|| format!("delete-all failed against pachd at {}", address))
    })
    .await?;

    if outcome == GuardOutcome::Declined {
        info!("delete-all declined, nothing was deleted");
    }
    Ok(outcome)
}
