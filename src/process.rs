//! External process execution.
//!
//! Commands are described as data ([`CommandLine`]) and executed through a
//! [`ProcessRunner`], so callers can be exercised against a fake runner.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tracing::debug;

/// A program, its arguments and optional text fed to its standard input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Where a child's output stream goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Shared with this process's terminal
    Inherit,
    Discard,
}

impl From<Sink> for Stdio {
    fn from(sink: Sink) -> Self {
        match sink {
            Sink::Inherit => Stdio::inherit(),
            Sink::Discard => Stdio::null(),
        }
    }
}

/// How a child process finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
}

impl ProcessStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Terminated by a signal
    pub fn killed() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Output of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: ProcessStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run to completion, streaming output to the given sinks
    async fn run(&self, command: &CommandLine, stdout: Sink, stderr: Sink)
    -> Result<ProcessStatus>;

    /// Run to completion, capturing stdout and stderr
    async fn output(&self, command: &CommandLine) -> Result<CapturedOutput>;
}

/// Runs commands as real child processes.
///
/// Children are killed when their future is dropped, so interrupting a
/// command tears its subprocesses down with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(command: &CommandLine) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).kill_on_drop(true);
        if command.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        } else {
            cmd.stdin(Stdio::null());
        }
        cmd
    }

    fn spawn(mut cmd: Command, command: &CommandLine) -> Result<Child> {
        debug!("Spawning: {}", command);
        cmd.spawn()
            .with_context(|| format!("failed to start '{}'", command.program))
    }

    async fn feed_stdin(child: &mut Child, command: &CommandLine) -> Result<()> {
        if let (Some(input), Some(mut stdin)) = (&command.stdin, child.stdin.take()) {
            stdin
                .write_all(input.as_bytes())
                .await
                .with_context(|| format!("failed to write stdin of '{}'", command.program))?;
            // stdin is closed when the handle drops here
        }
        Ok(())
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        command: &CommandLine,
        stdout: Sink,
        stderr: Sink,
    ) -> Result<ProcessStatus> {
        let mut cmd = Self::command(command);
        cmd.stdout(stdout).stderr(stderr);

        let mut child = Self::spawn(cmd, command)?;
        Self::feed_stdin(&mut child, command).await?;

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed to wait for '{}'", command.program))?;
        Ok(status.into())
    }

    async fn output(&self, command: &CommandLine) -> Result<CapturedOutput> {
        let mut cmd = Self::command(command);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = Self::spawn(cmd, command)?;
        Self::feed_stdin(&mut child, command).await?;

        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("failed to wait for '{}'", command.program))?;

        Ok(CapturedOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
