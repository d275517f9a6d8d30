//! Interactive confirmation in front of irreversible actions.

use anyhow::Result;
use std::future::Future;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfirmError {
    #[error("failed to read confirmation: {0}")]
    Read(#[from] std::io::Error),

    #[error("no confirmation received: input was closed")]
    NoInput,
}

/// Asks the operator a yes/no question
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfirmError>;
}

/// Prints the prompt and reads one line; only an answer starting with
/// `y` or `Y` counts as yes.
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirmer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfirmError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConfirmError::NoInput);
        }

        Ok(matches!(line.first(), Some(b'y' | b'Y')))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Performed,
    Declined,
}

/// Run `action` only after the operator confirms. Declining is not an
/// error; failing to read an answer is.
pub async fn guard_destructive<C, F, Fut>(
    confirmer: &mut C,
    prompt: &str,
    action: F,
) -> Result<GuardOutcome>
where
    C: Confirmer + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if !confirmer.confirm(prompt)? {
        debug!("Operator declined: {}", prompt);
        return Ok(GuardOutcome::Declined);
    }

    action().await?;
    Ok(GuardOutcome::Performed)
}
