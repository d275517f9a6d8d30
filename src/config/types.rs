use clap::Args;
use serde::{Deserialize, Serialize};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConfigInput {
    pub address: Option<String>,
    pub metrics: Option<bool>,
    pub kubectl: Option<KubectlInput>,
    pub migration: Option<MigrationInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub cluster: Cluster,
    pub kubectl: Kubectl,
    pub migration: Migration,
}

#[derive(Debug, Clone)]
pub struct Cluster {
    /// pachd host:port
    pub address: String,
    /// Anonymous usage reporting
    pub metrics: bool,
}

// kubectl configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KubectlInput {
    pub flags: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Kubectl {
    /// Extra flags prepended to every kubectl invocation
    pub flags: Vec<String>,
}

// Migration configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MigrationInput {
    pub namespace: Option<String>,
    pub image_registry: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Migration {
    pub namespace: String,
    pub image_registry: String,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct KubectlArgs {
    #[arg(
        long = "kubectlflags",
        short = 'k',
        help = "Any kubectl flags to proxy, e.g. --kubectlflags='--kubeconfig /some/path/kubeconfig'"
    )]
    pub kubectl_flags: Option<String>,
}

impl From<KubectlArgs> for KubectlInput {
    fn from(args: KubectlArgs) -> Self {
        Self {
            flags: args.kubectl_flags,
        }
    }
}
