//! Config file discovery and precedence as seen from the binary

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_address_from_config_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("address: 127.0.0.1:2\n")?;

    helper
        .command()
        .env_remove("ADDRESS")
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at address (127.0.0.1:2)"));

    Ok(())
}

#[test]
fn test_env_address_overrides_config_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("address: 127.0.0.1:2\n")?;

    helper
        .command()
        .env("ADDRESS", "127.0.0.1:3")
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at address (127.0.0.1:3)"));

    Ok(())
}

#[test]
fn test_explicit_config_file_path() -> Result<()> {
    let helper = CliTestHelper::new();
    let path = helper.project_root.join("cluster-b.yaml");
    std::fs::write(&path, "address: 127.0.0.1:4\n")?;

    helper
        .command()
        .env_remove("ADDRESS")
        .args(["version", "--config-file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at address (127.0.0.1:4)"));

    Ok(())
}

#[test]
fn test_invalid_config_yaml_fails() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("address: [unbalanced\n")?;

    helper
        .command()
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));

    Ok(())
}

#[test]
fn test_blank_address_is_rejected() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("address: \"   \"\n")?;

    helper
        .command()
        .env_remove("ADDRESS")
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pachd address is empty"));

    Ok(())
}
