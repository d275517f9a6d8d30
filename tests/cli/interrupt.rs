//! Signals delivered while a command is still running

use crate::helpers::cli::{CliTestHelper, UNREACHABLE_ADDRESS};
use anyhow::Result;

#[cfg(unix)]
#[test]
fn test_sigterm_during_port_forward_exits_non_zero() -> Result<()> {
    use std::process::{Command, Stdio};
    use std::thread::sleep;
    use std::time::Duration;

    let helper = CliTestHelper::new();
    // Pod discovery never returns, so the command blocks until signalled
    let path = helper.stub_kubectl("exec sleep 30")?;

    let child = Command::new(assert_cmd::cargo::cargo_bin("pachctl"))
        .current_dir(&helper.project_root)
        .env("PATH", path)
        .env("ADDRESS", UNREACHABLE_ADDRESS)
        .env_remove("RUST_LOG")
        .arg("port-forward")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    sleep(Duration::from_millis(1500));
    let killed = Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()?;
    assert!(killed.success());

    let output = child.wait_with_output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "interrupted run reported success");
    assert!(stderr.contains("interrupted"), "unexpected stderr: {}", stderr);
    Ok(())
}
