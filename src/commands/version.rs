use anyhow::{Result, bail};
use std::io::Write;
use tracing::debug;

use crate::client::{ClientConfig, GrpcClient, VersionApi};
use crate::config::ConfigInput;
use crate::constants::{PACHD_COMPONENT, TABLE_MIN_WIDTH, TABLE_PADDING, VERSION_QUERY_TIMEOUT};
use crate::registry::Invocation;
use crate::version::{Version, client_version};

const CLIENT_COMPONENT: &str = "pachctl";

/// Two aligned columns. Every row is known up front, so the width is fixed
/// before the first row is written.
#[derive(Debug, Clone, Copy)]
pub struct VersionTable {
    width: usize,
}

impl VersionTable {
    pub fn new(first_column: &[&str]) -> Self {
        let widest = first_column.iter().map(|c| c.len()).max().unwrap_or(0);
        Self {
            width: TABLE_MIN_WIDTH.max(widest + TABLE_PADDING),
        }
    }

    pub fn cell(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.width)
    }

    pub fn row(&self, component: &str, version: &str) -> String {
        format!("{}{}", self.cell(component), version)
    }
}

pub async fn cmd_version(invocation: &Invocation) -> Result<()> {
    let config = invocation.config(ConfigInput::default())?;
    let client = GrpcClient::new(ClientConfig::from_config(&config, invocation.log()))?;

    let mut stdout = std::io::stdout();
    print_versions(&client_version(), &client, &mut stdout).await
}

/// Print the local row, then ask the server for its version.
pub async fn print_versions<V, W>(local: &Version, live: &V, out: &mut W) -> Result<()>
where
    V: VersionApi + ?Sized,
    W: Write,
{
    let table = VersionTable::new(&["COMPONENT", CLIENT_COMPONENT, PACHD_COMPONENT]);

    writeln!(out, "{}", table.row("COMPONENT", "VERSION"))?;
    writeln!(out, "{}", table.row(CLIENT_COMPONENT, &local.to_string()))?;
    out.flush()?;

    match live.get_version(VERSION_QUERY_TIMEOUT).await {
        Ok(remote) => {
            writeln!(out, "{}", table.row(PACHD_COMPONENT, &remote.to_string()))?;
            Ok(())
        }
        Err(err) => {
            debug!("Version query failed: {:?}", err);
            bail!(
                "{}(version unknown) : error connecting to pachd server at address ({}): {}\n\nplease make sure pachd is up (`kubectl get all`) and portforwarding is enabled",
                table.cell(PACHD_COMPONENT),
                live.address(),
                err
            )
        }
    }
}
