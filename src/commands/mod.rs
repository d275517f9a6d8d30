pub mod delete_all;
pub mod garbage_collect;
pub mod migrate;
pub mod port_forward;
pub mod version;

pub use delete_all::{DELETE_ALL_PROMPT, cmd_delete_all, delete_all};
pub use garbage_collect::{cmd_garbage_collect, garbage_collect};
pub use migrate::{MigrateArgs, cmd_migrate};
pub use port_forward::{PortForwardArgs, cmd_port_forward};
pub use version::{VersionTable, cmd_version, print_versions};

use anyhow::Result;
use async_trait::async_trait;
use clap::{ArgMatches, Command, FromArgMatches, Subcommand};

use crate::registry::{CommandGroup, Invocation};

/// Cluster administration commands
#[derive(Debug, Clone, Subcommand)]
pub enum AdminCommand {
    /// Return version information.
    Version,

    /// Delete everything.
    #[command(
        long_about = "Delete all repos, commits, files, pipelines and jobs.\nThis resets the cluster to its initial state."
    )]
    DeleteAll,

    /// Forward a port on the local machine to pachd. This command blocks.
    PortForward(PortForwardArgs),

    /// Garbage collect unused data.
    #[command(
        long_about = "Garbage collect unused data.\n\nWhen a file/commit/repo is deleted, the data is not immediately removed from\nthe underlying storage system (e.g. S3) for performance and architectural\nreasons. This is similar to how when you delete a file on your computer, the\nfile is not necessarily wiped from disk immediately.\n\nTo actually remove the data, you will need to manually invoke garbage\ncollection. The easiest way to do it is through \"pachctl garbage-collect\".\n\nCurrently \"pachctl garbage-collect\" can only be started when there are no\nactive jobs running. You also need to ensure that there's no ongoing\n\"put-file\". Garbage collection puts the cluster into a readonly mode where no\nnew jobs can be created and no data can be added."
    )]
    GarbageCollect,

    /// Migrate the internal state of Pachyderm from one version to another.
    Migrate(MigrateArgs),
}

/// The command group defined by this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminCommands;

impl AdminCommands {
    pub async fn execute(command: AdminCommand, invocation: &Invocation) -> Result<()> {
        match command {
            AdminCommand::Version => cmd_version(invocation).await,
            AdminCommand::DeleteAll => cmd_delete_all(invocation).await,
            AdminCommand::PortForward(args) => cmd_port_forward(&args, invocation).await,
            AdminCommand::GarbageCollect => cmd_garbage_collect(invocation).await,
            AdminCommand::Migrate(args) => cmd_migrate(&args, invocation).await,
        }
    }
}

#[async_trait]
impl CommandGroup for AdminCommands {
    fn name(&self) -> &str {
        "admin"
    }

    fn commands(&self) -> Result<Vec<Command>> {
        let carrier = AdminCommand::augment_subcommands(Command::new("admin"));
        Ok(carrier.get_subcommands().cloned().collect())
    }

    async fn run(&self, matches: &ArgMatches, invocation: &Invocation) -> Result<()> {
        let command = AdminCommand::from_arg_matches(matches)?;
        Self::execute(command, invocation).await
    }
}
