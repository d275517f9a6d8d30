//! The migration job description and its on-disk form.
//!
//! Every struct declares its fields in lexicographic key order and maps are
//! `BTreeMap`s, so serde emits the same bytes for the same request every
//! time without relying on encoder behaviour.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::constants::{
    MIGRATION_CONTAINER_NAME, MIGRATION_JOB_NAME, MIGRATION_LABEL_KEY, MIGRATION_LABEL_VALUE,
    PACHD_BINARY, PACHD_COMPONENT,
};
use crate::reconcile::ResolvedVersions;
use crate::version::Version;

/// A fully resolved migration, ready to be turned into a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    pub from: String,
    pub to: String,
    pub image: String,
    pub namespace: String,
}

impl MigrationRequest {
    pub fn new(
        versions: ResolvedVersions,
        image: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            from: versions.from,
            to: versions.to,
            image: image.into(),
            namespace: namespace.into(),
        }
    }

    pub fn migrate_flag(&self) -> String {
        format!("--migrate={}-{}", self.from, self.to)
    }
}

/// `<registry>/pachd:<client version>`
pub fn image_reference(registry: &str, client_version: &Version) -> String {
    format!(
        "{}/{}:{}",
        registry.trim_end_matches('/'),
        PACHD_COMPONENT,
        client_version
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestartPolicy {
    OnFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: JobSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMeta {
    pub labels: BTreeMap<String, String>,
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSpec {
    pub template: PodTemplateSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodTemplateSpec {
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub containers: Vec<Container>,
    pub restart_policy: RestartPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub command: Vec<String>,
    pub image: String,
    pub name: String,
}

impl JobDescription {
    /// The well-known migration job. Retries belong to the cluster's job
    /// controller, hence `OnFailure`.
    pub fn for_migration(request: &MigrationRequest) -> Self {
        let labels = BTreeMap::from([(
            MIGRATION_LABEL_KEY.to_string(),
            MIGRATION_LABEL_VALUE.to_string(),
        )]);

        Self {
            api_version: "batch/v1".to_string(),
            kind: "Job".to_string(),
            metadata: ObjectMeta {
                labels,
                name: MIGRATION_JOB_NAME.to_string(),
                namespace: request.namespace.clone(),
            },
            spec: JobSpec {
                template: PodTemplateSpec {
                    spec: PodSpec {
                        containers: vec![Container {
                            command: vec![PACHD_BINARY.to_string(), request.migrate_flag()],
                            image: request.image.clone(),
                            name: MIGRATION_CONTAINER_NAME.to_string(),
                        }],
                        restart_policy: RestartPolicy::OnFailure,
                    },
                },
            },
        }
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_canonical_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("Failed to serialize job description")?;
        json.push('\n');
        Ok(json)
    }
}

/// A job description written to a temporary file. The file is removed
/// when the artifact is dropped, whichever way the caller exits.
pub struct JobArtifact {
    file: NamedTempFile,
}

impl JobArtifact {
    pub fn write(job: &JobDescription) -> Result<Self> {
        let contents = job.to_canonical_json()?;

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", MIGRATION_JOB_NAME))
            .suffix(".json")
            .tempfile()
            .context("Failed to create temporary job file")?;
        file.write_all(contents.as_bytes())
            .context("Failed to write temporary job file")?;
        file.flush().context("Failed to write temporary job file")?;

        debug!("Wrote job description to {}", file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
