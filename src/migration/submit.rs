use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::constants::KUBECTL;
use crate::process::{CapturedOutput, CommandLine, ProcessRunner};

/// Hands a serialized job description to the cluster scheduler
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    async fn submit(&self, artifact: &Path) -> Result<CapturedOutput>;
}

/// `kubectl create --validate=false -f <file>`. Validation is off so a
/// cluster with a slightly different schema still accepts the job.
pub struct KubectlSubmitter<R> {
    runner: R,
    flags: Vec<String>,
}

impl<R: ProcessRunner> KubectlSubmitter<R> {
    pub fn new(runner: R, flags: Vec<String>) -> Self {
        Self { runner, flags }
    }

    pub fn create_command(&self, artifact: &Path) -> CommandLine {
        CommandLine::new(KUBECTL)
            .args(self.flags.iter().cloned())
            .args(["create", "--validate=false", "-f"])
            .arg(artifact.to_string_lossy())
    }
}

#[async_trait]
impl<R: ProcessRunner> JobSubmitter for KubectlSubmitter<R> {
    async fn submit(&self, artifact: &Path) -> Result<CapturedOutput> {
        self.runner.output(&self.create_command(artifact)).await
    }
}
