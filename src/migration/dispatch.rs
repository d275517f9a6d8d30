//! Resolve versions, build the job, write it out, submit it.
//!
//! Each step consumes the previous step's output, so nothing is built or
//! written until both versions are known.

use anyhow::{Context, Result, bail};
use console::style;
use std::io::Write;
use tracing::{debug, info};

use super::job::{JobArtifact, JobDescription, MigrationRequest, image_reference};
use super::submit::JobSubmitter;
use crate::client::VersionApi;
use crate::constants::MIGRATION_JOB_NAME;
use crate::reconcile;
use crate::version::Version;

/// Operator input for one migration
#[derive(Debug, Clone, Default)]
pub struct MigrationOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub namespace: String,
    pub image_registry: String,
}

pub async fn dispatch<V, S, W>(
    options: &MigrationOptions,
    client_version: &Version,
    live: &V,
    submitter: &S,
    out: &mut W,
) -> Result<()>
where
    V: VersionApi + ?Sized,
    S: JobSubmitter + ?Sized,
    W: Write,
{
    let versions = reconcile::resolve(
        options.from.as_deref(),
        options.to.as_deref(),
        client_version,
        live,
    )
    .await?;

    let request = MigrationRequest::new(
        versions,
        image_reference(&options.image_registry, client_version),
        options.namespace.clone(),
    );
    info!(
        "Migrating cluster state from {} to {} using {}",
        request.from, request.to, request.image
    );

    let job = JobDescription::for_migration(&request);
    let artifact = JobArtifact::write(&job)?;

    let submitted = submitter.submit(artifact.path()).await;
    drop(artifact);
    let output = submitted.context("Failed to run job submission")?;

    let combined = output.combined();
    writeln!(out, "{}", combined)?;

    if !output.status.success() {
        debug!("Job submission failed with {}", output.status);
        bail!(
            "failed to create migration job ({}): {}",
            output.status,
            combined.trim()
        );
    }

    writeln!(
        out,
        "{}",
        style(format!(
            "Successfully launched migration.  To see the progress, use `kubectl logs job/{}`",
            MIGRATION_JOB_NAME
        ))
        .green()
    )?;
    Ok(())
}
