use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Nothing listens on port 1, so RPCs fail fast with connection refused
pub const UNREACHABLE_ADDRESS: &str = "127.0.0.1:1";

/// Runs the pachctl binary from an empty temporary working directory with a
/// controlled environment
pub struct CliTestHelper {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
}

impl CliTestHelper {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let project_root = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            project_root,
        }
    }

    /// A command pointed at an address where pachd is guaranteed absent
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pachctl").unwrap();
        cmd.current_dir(&self.project_root)
            .env("ADDRESS", UNREACHABLE_ADDRESS)
            .env_remove("PACH_NO_METRICS")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `pachctl.yaml` into the working directory
    pub fn write_config(&self, contents: &str) -> Result<()> {
        fs::write(self.project_root.join("pachctl.yaml"), contents)?;
        Ok(())
    }

    /// A directory with no executables, for use as PATH when kubectl must be missing
    pub fn empty_path(&self) -> Result<PathBuf> {
        let dir = self.project_root.join("empty-bin");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

impl CliTestHelper {
    /// Put an executable `kubectl` shell script on a fresh directory and
    /// return a PATH value with that directory in front
    #[cfg(unix)]
    pub fn stub_kubectl(&self, body: &str) -> Result<std::ffi::OsString> {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.project_root.join("stub-bin");
        fs::create_dir_all(&dir)?;
        let script = dir.join("kubectl");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

        let mut paths = vec![dir];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        Ok(std::env::join_paths(paths)?)
    }
}

impl Default for CliTestHelper {
    fn default() -> Self {
        Self::new()
    }
}
