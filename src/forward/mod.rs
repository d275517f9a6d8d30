//! Port forwarding from the local machine into cluster components.

pub mod kubectl;
pub mod supervisor;

pub use kubectl::KubectlForwarder;
pub use supervisor::supervise;

use anyhow::Result;
use async_trait::async_trait;

use crate::constants::{
    DASH_SELECTOR, PACHD_REMOTE_PORT, PACHD_SELECTOR, UI_REMOTE_PORT, UI_WEBSOCKET_REMOTE_PORT,
};
use crate::process::Sink;

/// What a task's failure means for the forwarding session as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure fails the session
    Required,
    /// Failure is reported to the operator, optionally replaced by an advisory
    BestEffort { advisory: Option<String> },
    /// Failure is dropped
    Silent,
}

impl FailurePolicy {
    pub fn best_effort(advisory: impl Into<String>) -> Self {
        FailurePolicy::BestEffort {
            advisory: Some(advisory.into()),
        }
    }

    /// Only required tasks get to write diagnostics to the terminal
    pub fn stderr_sink(&self) -> Sink {
        match self {
            FailurePolicy::Required => Sink::Inherit,
            FailurePolicy::BestEffort { .. } | FailurePolicy::Silent => Sink::Discard,
        }
    }
}

/// One local port relayed to a port on the pod matched by `selector`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardTask {
    pub name: String,
    pub selector: String,
    pub local_port: u16,
    pub remote_port: u16,
    pub policy: FailurePolicy,
}

impl ForwardTask {
    pub fn new(
        name: impl Into<String>,
        selector: impl Into<String>,
        local_port: u16,
        remote_port: u16,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
            local_port,
            remote_port,
            policy,
        }
    }
}

/// Local ports chosen by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardPorts {
    pub pachd: u16,
    pub ui: u16,
    pub ui_websocket: u16,
}

/// pachd (required), the dashboard UI (best-effort) and its websocket
/// proxy (silent)
pub fn cluster_tasks(ports: ForwardPorts) -> Vec<ForwardTask> {
    vec![
        ForwardTask::new(
            "pachd",
            PACHD_SELECTOR,
            ports.pachd,
            PACHD_REMOTE_PORT,
            FailurePolicy::Required,
        ),
        ForwardTask::new(
            "dash",
            DASH_SELECTOR,
            ports.ui,
            UI_REMOTE_PORT,
            FailurePolicy::best_effort("UI not enabled, deploy with --dashboard"),
        ),
        ForwardTask::new(
            "dash-websocket",
            DASH_SELECTOR,
            ports.ui_websocket,
            UI_WEBSOCKET_REMOTE_PORT,
            FailurePolicy::Silent,
        ),
    ]
}

/// Runs one forward task until it ends
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, task: &ForwardTask) -> Result<()>;
}
