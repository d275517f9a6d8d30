//! Logging configuration shared by the subscriber and the RPC client.
//!
//! The transport stack (tonic, h2, hyper, tower) is noisy at every level
//! below `error`. Unless the operator asks for verbose output those crates
//! are pinned to `error`, which is the closest thing `tracing` has to a
//! fatal-only logger.

use tracing_subscriber::{EnvFilter, fmt};

const TRANSPORT_CRATES: &[&str] = &["tonic", "h2", "hyper", "hyper_util", "tower"];

/// Logging settings for one command invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    verbose: bool,
}

impl LogConfig {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether protocol-level diagnostics from the RPC client should be emitted
    pub fn transport_logging(&self) -> bool {
        self.verbose
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn directives(&self) -> String {
        if self.verbose {
            return "debug".to_string();
        }

        let mut directives = vec!["warn".to_string()];
        directives.extend(TRANSPORT_CRATES.iter().map(|c| format!("{}=error", c)));
        directives.join(",")
    }

    pub fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.directives())
        }
    }

    /// Install the process-wide subscriber. Call once, before any command runs.
    pub fn init(&self) {
        fmt()
            .with_env_filter(self.env_filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
