use anyhow::{Result, bail};
use dotenv::dotenv;
use pachctl::commands::AdminCommands;
use pachctl::registry::{Invocation, Registry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let registry = Registry::build(vec![Box::new(AdminCommands)])?;
    let matches = registry.command().get_matches();
    let invocation = Invocation::from_matches(&matches)?;
    invocation.log().init();

    tokio::select! {
        result = registry.dispatch(&matches, &invocation) => result,
        _ = wait_for_shutdown_signal() => {
            // Dropping the command future kills its children and removes temp files
            info!("Received shutdown signal, cleaning up...");
            bail!("interrupted before the command finished")
        }
    }
}

async fn wait_for_shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
