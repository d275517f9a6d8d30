use crate::config::{merge::Merge, types::*};
use anyhow::{Result, anyhow};

/// Environment variable naming the pachd address
pub const ADDRESS_ENV: &str = "ADDRESS";
/// Environment variable that disables usage metrics when set to a truthy value
pub const NO_METRICS_ENV: &str = "PACH_NO_METRICS";

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    /// Layer the process environment over whatever has been merged so far
    pub fn with_env(self) -> Self {
        self.with_env_vars(std::env::vars())
    }

    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut env_input = ConfigInput::default();
        for (key, value) in vars {
            match key.as_ref() {
                ADDRESS_ENV if !value.as_ref().is_empty() => {
                    env_input.address = Some(value.as_ref().to_string());
                }
                NO_METRICS_ENV => {
                    env_input.metrics = Some(!is_truthy(value.as_ref()));
                }
                _ => {}
            }
        }
        self.config_input = self.config_input.merge(env_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            cluster: self.resolve_cluster(&defaults.cluster)?,
            kubectl: self.resolve_kubectl(),
            migration: self.resolve_migration(&defaults.migration),
        })
    }

    fn resolve_cluster(&self, defaults: &Cluster) -> Result<Cluster> {
        let address = self
            .config_input
            .address
            .as_ref()
            .map(|a| a.trim().to_string())
            .unwrap_or_else(|| defaults.address.clone());

        if address.is_empty() {
            return Err(anyhow!(
                "pachd address is empty. Set ADDRESS=<host>:<port> or 'address' in the config file"
            ));
        }

        Ok(Cluster {
            address,
            metrics: self.config_input.metrics.unwrap_or(defaults.metrics),
        })
    }

    fn resolve_kubectl(&self) -> Kubectl {
        let flags = self
            .config_input
            .kubectl
            .as_ref()
            .and_then(|k| k.flags.as_deref())
            .map(|f| f.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Kubectl { flags }
    }

    fn resolve_migration(&self, defaults: &Migration) -> Migration {
        let mig_input = self.config_input.migration.as_ref();

        Migration {
            namespace: mig_input
                .and_then(|m| m.namespace.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.namespace.clone()),
            image_registry: mig_input
                .and_then(|m| m.image_registry.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.image_registry.clone()),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
