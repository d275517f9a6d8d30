//! The root command: help, version flag and global flags

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_help_lists_admin_commands() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("version")
                .and(predicate::str::contains("delete-all"))
                .and(predicate::str::contains("port-forward"))
                .and(predicate::str::contains("garbage-collect"))
                .and(predicate::str::contains("migrate")),
        )
        .stdout(predicate::str::contains("ADDRESS=<host>:<port>"))
        .stdout(predicate::str::contains("--no-metrics"));

    Ok(())
}

#[test]
fn test_no_arguments_prints_usage_and_fails() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn test_version_flag_prints_client_version() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn test_unknown_command_fails() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("list-repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("list-repo"));

    Ok(())
}

#[test]
fn test_global_flags_accepted_after_subcommand() -> Result<()> {
    let helper = CliTestHelper::new();

    // Fails on connectivity, not on argument parsing
    helper
        .command()
        .args(["version", "--verbose", "--no-metrics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error connecting to pachd server"));

    Ok(())
}
