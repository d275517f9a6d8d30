use anyhow::Result;
use pachctl::config::{ConfigBuilder, ConfigInput, KubectlInput, MigrationInput, load_config};
use std::fs;
use tempfile::TempDir;

/// Layering of config file, environment and command-line input
mod config_precedence_tests {
    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> Result<String> {
        let path = dir.path().join("pachctl.yaml");
        fs::write(&path, contents)?;
        Ok(path.to_string_lossy().into_owned())
    }

    #[test]
    fn test_full_config_file_loads() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(
            &dir,
            r#"
address: 10.1.2.3:30650
metrics: false
kubectl:
  flags: "--context prod --kubeconfig /etc/kube/config"
migration:
  namespace: pachyderm
  image_registry: registry.local/pachyderm
"#,
        )?;

        let config = ConfigBuilder::new()
            .with_file(load_config(&path)?)
            .resolve()?;

        assert_eq!(config.cluster.address, "10.1.2.3:30650");
        assert!(!config.cluster.metrics);
        assert_eq!(
            config.kubectl.flags,
            vec!["--context", "prod", "--kubeconfig", "/etc/kube/config"]
        );
        assert_eq!(config.migration.namespace, "pachyderm");
        assert_eq!(config.migration.image_registry, "registry.local/pachyderm");
        Ok(())
    }

    #[test]
    fn test_missing_file_yields_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("absent.yaml");

        let input = load_config(&path.to_string_lossy())?;
        assert_eq!(input, ConfigInput::default());

        let config = ConfigBuilder::new().with_file(input).resolve()?;
        assert_eq!(config.cluster.address, "0.0.0.0:30650");
        assert!(config.cluster.metrics);
        assert!(config.kubectl.flags.is_empty());
        assert_eq!(config.migration.namespace, "default");
        assert_eq!(config.migration.image_registry, "pachyderm");
        Ok(())
    }

    #[test]
    fn test_env_over_file_and_cli_over_env() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(
            &dir,
            "address: 10.0.0.1:30650\nkubectl:\n  flags: --context file\n",
        )?;

        let config = ConfigBuilder::new()
            .with_file(load_config(&path)?)
            .with_env_vars([("ADDRESS", "10.0.0.2:30650"), ("PACH_NO_METRICS", "true")])
            .with_cli_args(ConfigInput {
                kubectl: Some(KubectlInput {
                    flags: Some("--context cli".to_string()),
                }),
                migration: Some(MigrationInput {
                    namespace: Some("from-cli".to_string()),
                    image_registry: None,
                }),
                ..Default::default()
            })
            .resolve()?;

        assert_eq!(config.cluster.address, "10.0.0.2:30650");
        assert!(!config.cluster.metrics);
        assert_eq!(config.kubectl.flags, vec!["--context", "cli"]);
        assert_eq!(config.migration.namespace, "from-cli");
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "migration: [not, a, map]\n")?;

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }
}
