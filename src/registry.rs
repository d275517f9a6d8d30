//! Composes independently owned command groups into one `pachctl` command
//! tree and routes parsed invocations back to the group that owns them.

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::collections::BTreeMap;
use tracing::debug;

use crate::client::{RpcError, sanitize};
use crate::config::{self, Config, ConfigBuilder, ConfigInput};
use crate::constants::CONFIG_FILENAME;
use crate::logging::LogConfig;

const ROOT_LONG_ABOUT: &str = "Access the Pachyderm API.

Environment variables:
  ADDRESS=<host>:<port>, the pachd server to connect to (e.g. 127.0.0.1:30650).
  PACH_NO_METRICS=true, don't report user metrics.
";

/// Flags accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Output verbose logs
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Don't report user metrics for this command
    #[arg(long, global = true)]
    pub no_metrics: bool,

    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    pub config_file: String,
}

/// Per-invocation state handed to every command group
#[derive(Debug, Clone)]
pub struct Invocation {
    globals: GlobalArgs,
    file_config: ConfigInput,
    log: LogConfig,
}

impl Invocation {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let globals = GlobalArgs::from_arg_matches(matches)?;
        let file_config = config::load_config(&globals.config_file)?;
        Ok(Self::new(globals, file_config))
    }

    pub fn new(globals: GlobalArgs, file_config: ConfigInput) -> Self {
        let log = LogConfig::new(globals.verbose);
        Self {
            globals,
            file_config,
            log,
        }
    }

    pub fn log(&self) -> LogConfig {
        self.log
    }

    /// Resolve configuration: file, then environment, then global flags,
    /// then the command's own flags.
    pub fn config(&self, command_input: ConfigInput) -> Result<Config> {
        let global_input = ConfigInput {
            metrics: self.globals.no_metrics.then_some(false),
            ..Default::default()
        };

        ConfigBuilder::new()
            .with_file(self.file_config.clone())
            .with_env()
            .with_cli_args(global_input)
            .with_cli_args(command_input)
            .resolve()
    }
}

/// A set of subcommands contributed by one part of the tool
#[async_trait]
pub trait CommandGroup: Send + Sync {
    fn name(&self) -> &str;

    /// The subcommands this group adds to the root
    fn commands(&self) -> Result<Vec<Command>>;

    /// Run the subcommand selected in `matches` (the root matches)
    async fn run(&self, matches: &ArgMatches, invocation: &Invocation) -> Result<()>;
}

/// Strip transport wrapping from RPC failures before they reach the operator
pub fn sanitize_error(err: anyhow::Error) -> anyhow::Error {
    if let Some(status) = err.downcast_ref::<tonic::Status>() {
        return anyhow!(sanitize(status));
    }
    if let Some(rpc) = err.downcast_ref::<RpcError>() {
        return anyhow!(rpc.to_string());
    }
    err
}

pub struct Registry {
    root: Command,
    groups: Vec<Box<dyn CommandGroup>>,
    owners: BTreeMap<String, usize>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("owners", &self.owners)
            .finish_non_exhaustive()
    }
}

fn root_command() -> Command {
    // augment_args applies GlobalArgs' own about text, so ours goes on after
    GlobalArgs::augment_args(Command::new("pachctl"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Access the Pachyderm API.")
        .long_about(ROOT_LONG_ABOUT)
        .subcommand_required(true)
        .arg_required_else_help(true)
}

impl Registry {
    /// Build the command tree. Any group failing to produce its commands
    /// aborts the whole build; no partial tree is returned.
    pub fn build(groups: Vec<Box<dyn CommandGroup>>) -> Result<Self> {
        let mut root = root_command();
        let mut owners = BTreeMap::new();

        for (index, group) in groups.iter().enumerate() {
            let commands = group.commands().map_err(sanitize_error)?;
            for command in commands {
                let name = command.get_name().to_string();
                if let Some(previous) = owners.insert(name.clone(), index) {
                    bail!(
                        "command '{}' is registered by both '{}' and '{}'",
                        name,
                        groups[previous].name(),
                        group.name()
                    );
                }
                root = root.subcommand(command);
            }
            debug!("Registered command group '{}'", group.name());
        }

        Ok(Self {
            root,
            groups,
            owners,
        })
    }

    pub fn command(&self) -> Command {
        self.root.clone()
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    pub async fn dispatch(&self, matches: &ArgMatches, invocation: &Invocation) -> Result<()> {
        let (name, _) = matches
            .subcommand()
            .ok_or_else(|| anyhow!("no command given"))?;
        let index = self
            .owners
            .get(name)
            .ok_or_else(|| anyhow!("unknown command '{}'", name))?;

        self.groups[*index].run(matches, invocation).await
    }
}
