//! Admin commands against a cluster that is not there

use crate::helpers::cli::{CliTestHelper, UNREACHABLE_ADDRESS};
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_version_without_pachd_prints_local_row_then_fails() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("version")
        .assert()
        .failure()
        .stdout(predicate::str::contains("COMPONENT"))
        .stdout(predicate::str::contains("VERSION"))
        .stdout(predicate::str::contains("pachctl"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::contains(format!(
            "error connecting to pachd server at address ({})",
            UNREACHABLE_ADDRESS
        )))
        .stderr(predicate::str::contains("portforwarding is enabled"))
        .stderr(predicate::str::is_match("(?i)connection refused")?);

    Ok(())
}

#[test]
fn test_delete_all_declined_succeeds_without_contacting_pachd() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("delete-all")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete all repos, commits, files, pipelines and jobs? yN",
        ));

    Ok(())
}

#[test]
fn test_delete_all_confirmed_reports_unreachable_pachd() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("delete-all")
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(UNREACHABLE_ADDRESS));

    Ok(())
}

#[test]
fn test_delete_all_with_closed_stdin_fails() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("delete-all")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no confirmation received"));

    Ok(())
}

#[test]
fn test_garbage_collect_reports_unreachable_pachd() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("garbage-collect")
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "garbage collection failed on pachd at {}",
            UNREACHABLE_ADDRESS
        )));

    Ok(())
}

#[test]
fn test_migrate_without_from_requires_flag_when_cluster_unreachable() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to discover cluster version"))
        .stderr(predicate::str::contains("please provide the --from flag"));

    Ok(())
}

#[test]
fn test_migrate_without_kubectl_fails_at_submission() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .env("PATH", helper.empty_path()?)
        .args(["migrate", "--from", "1.4.8", "--namespace", "pach"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run job submission"))
        .stdout(predicate::str::contains("Successfully launched").not());

    Ok(())
}

#[test]
fn test_port_forward_without_kubectl_fails_on_required_task() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .env("PATH", helper.empty_path()?)
        .args(["port-forward", "--ui-port", "39080"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Pachd port forwarded"))
        .stdout(predicate::str::contains("navigate to localhost:39080"))
        .stderr(predicate::str::contains("port forwarding for pachd failed"));

    Ok(())
}
