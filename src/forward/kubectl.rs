//! Forwarding through `kubectl port-forward`.

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use tracing::debug;

use super::{ForwardTask, Forwarder};
use crate::constants::KUBECTL;
use crate::process::{CommandLine, ProcessRunner, Sink};

/// Finds the first pod matching a task's selector and forwards to it
pub struct KubectlForwarder<R> {
    runner: R,
    flags: Vec<String>,
}

impl<R: ProcessRunner> KubectlForwarder<R> {
    pub fn new(runner: R, flags: Vec<String>) -> Self {
        Self { runner, flags }
    }

    fn kubectl(&self) -> CommandLine {
        CommandLine::new(KUBECTL).args(self.flags.iter().cloned())
    }

    pub fn find_pod_command(&self, selector: &str) -> CommandLine {
        self.kubectl().args([
            "get",
            "pod",
            "-l",
            selector,
            "-o",
            "jsonpath={.items[*].metadata.name}",
        ])
    }

    pub fn port_forward_command(&self, pod: &str, task: &ForwardTask) -> CommandLine {
        self.kubectl().args([
            "port-forward".to_string(),
            pod.to_string(),
            format!("{}:{}", task.local_port, task.remote_port),
        ])
    }

    async fn find_pod(&self, selector: &str) -> Result<String> {
        let cmd = self.find_pod_command(selector);
        let output = self.runner.output(&cmd).await?;

        if !output.status.success() {
            bail!(
                "'{}' failed ({}): {}",
                cmd,
                output.status,
                output.stderr.trim()
            );
        }

        output
            .stdout
            .split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no pod matches selector '{}'", selector))
    }
}

#[async_trait]
impl<R: ProcessRunner> Forwarder for KubectlForwarder<R> {
    async fn forward(&self, task: &ForwardTask) -> Result<()> {
        let pod = self.find_pod(&task.selector).await?;
        debug!(
            "Forwarding localhost:{} to {}:{} ({})",
            task.local_port, pod, task.remote_port, task.name
        );

        let cmd = self.port_forward_command(&pod, task);
        let status = self
            .runner
            .run(&cmd, Sink::Discard, task.policy.stderr_sink())
            .await?;

        if !status.success() {
            bail!("'{}' exited with {}", cmd, status);
        }
        Ok(())
    }
}
