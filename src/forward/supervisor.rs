//! Runs a set of forward tasks concurrently and applies each task's
//! failure policy.

use anyhow::Result;
use console::style;
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{debug, warn};

use super::{FailurePolicy, ForwardTask, Forwarder};

/// Run `task` and fold its outcome through its policy. Only required
/// tasks can produce an error here.
async fn run_task<F>(forwarder: &F, task: &ForwardTask) -> Result<()>
where
    F: Forwarder + ?Sized,
{
    let Err(err) = forwarder.forward(task).await else {
        debug!("Forward task '{}' finished", task.name);
        return Ok(());
    };

    match &task.policy {
        FailurePolicy::Required => {
            Err(err.context(format!("port forwarding for {} failed", task.name)))
        }
        FailurePolicy::BestEffort { advisory } => {
            debug!("Best-effort forward task '{}' failed: {:#}", task.name, err);
            let message = match advisory {
                Some(advisory) => advisory.clone(),
                None => format!("{} port forwarding failed: {:#}", task.name, err),
            };
            eprintln!("{}", style(message).yellow());
            Ok(())
        }
        FailurePolicy::Silent => {
            debug!("Silent forward task '{}' failed: {:#}", task.name, err);
            Ok(())
        }
    }
}

/// Launch every task at once and wait for all of them to finish.
///
/// Returns the first required-task failure in completion order. Later
/// failures do not cut the wait short; sibling tasks keep running until
/// they end on their own.
pub async fn supervise<F>(forwarder: &F, tasks: &[ForwardTask]) -> Result<()>
where
    F: Forwarder + ?Sized,
{
    let mut running: FuturesUnordered<_> =
        tasks.iter().map(|task| run_task(forwarder, task)).collect();

    let mut first_failure = None;
    while let Some(outcome) = running.next().await {
        if let Err(err) = outcome {
            if first_failure.is_none() {
                first_failure = Some(err);
            } else {
                warn!("{:#}", err);
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
