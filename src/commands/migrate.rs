use anyhow::Result;
use clap::Args;

use crate::client::{ClientConfig, GrpcClient};
use crate::config::{ConfigInput, KubectlArgs, MigrationInput};
use crate::migration::{KubectlSubmitter, MigrationOptions, dispatch};
use crate::process::SystemRunner;
use crate::registry::Invocation;
use crate::version::client_version;

#[derive(Debug, Clone, Args)]
pub struct MigrateArgs {
    /// The version of Pachyderm to migrate from (default: the running cluster's version).
    #[arg(long)]
    pub from: Option<String>,

    /// The version of Pachyderm to migrate to (default: this pachctl's version).
    #[arg(long)]
    pub to: Option<String>,

    /// The kubernetes namespace under which the migration job runs [default: default]
    #[arg(long)]
    pub namespace: Option<String>,

    #[command(flatten)]
    pub kubectl: KubectlArgs,
}

impl MigrateArgs {
    fn config_input(&self) -> ConfigInput {
        ConfigInput {
            kubectl: Some(self.kubectl.clone().into()),
            migration: Some(MigrationInput {
                namespace: self.namespace.clone(),
                image_registry: None,
            }),
            ..Default::default()
        }
    }
}

pub async fn cmd_migrate(args: &MigrateArgs, invocation: &Invocation) -> Result<()> {
    let config = invocation.config(args.config_input())?;
    let client = GrpcClient::new(ClientConfig::from_config(&config, invocation.log()))?;
    let submitter = KubectlSubmitter::new(SystemRunner, config.kubectl.flags.clone());

    let options = MigrationOptions {
        from: args.from.clone(),
        to: args.to.clone(),
        namespace: config.migration.namespace.clone(),
        image_registry: config.migration.image_registry.clone(),
    };

    dispatch(
        &options,
        &client_version(),
        &client,
        &submitter,
        &mut std::io::stdout(),
    )
    .await
}
