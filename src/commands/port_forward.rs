use anyhow::Result;
use clap::Args;
use console::style;
use std::io::Write;

use crate::config::{ConfigInput, KubectlArgs};
use crate::constants::{
    DEFAULT_PACHD_LOCAL_PORT, DEFAULT_UI_LOCAL_PORT, DEFAULT_UI_WEBSOCKET_LOCAL_PORT,
};
use crate::forward::{ForwardPorts, KubectlForwarder, cluster_tasks, supervise};
use crate::process::SystemRunner;
use crate::registry::Invocation;

#[derive(Debug, Clone, Args)]
pub struct PortForwardArgs {
    /// The local port to bind to.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PACHD_LOCAL_PORT)]
    pub port: u16,

    /// The local port to bind to.
    #[arg(long, short = 'u', default_value_t = DEFAULT_UI_LOCAL_PORT)]
    pub ui_port: u16,

    /// The local port to bind to.
    #[arg(long, short = 'x', default_value_t = DEFAULT_UI_WEBSOCKET_LOCAL_PORT)]
    pub proxy_port: u16,

    #[command(flatten)]
    pub kubectl: KubectlArgs,
}

impl PortForwardArgs {
    pub fn ports(&self) -> ForwardPorts {
        ForwardPorts {
            pachd: self.port,
            ui: self.ui_port,
            ui_websocket: self.proxy_port,
        }
    }
}

pub async fn cmd_port_forward(args: &PortForwardArgs, invocation: &Invocation) -> Result<()> {
    let config = invocation.config(ConfigInput {
        kubectl: Some(args.kubectl.clone().into()),
        ..Default::default()
    })?;

    let forwarder = KubectlForwarder::new(SystemRunner, config.kubectl.flags.clone());
    let tasks = cluster_tasks(args.ports());

    write_banner(&mut std::io::stdout(), args.ui_port)?;
    supervise(&forwarder, &tasks).await
}

pub fn write_banner<W: Write>(out: &mut W, ui_port: u16) -> Result<()> {
    writeln!(out, "Pachd port forwarded")?;
    writeln!(out, "Dash websocket port forwarded")?;
    writeln!(
        out,
        "Dash UI port forwarded, navigate to localhost:{}",
        ui_port
    )?;
    writeln!(out, "{}", style("CTRL-C to exit").bold())?;
    out.flush()?;
    Ok(())
}
