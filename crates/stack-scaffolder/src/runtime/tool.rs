//! External command execution
//!
//! Install and git steps shell out through the [`CommandRunner`] seam so the
//! installer can be driven by a fake runner in tests.

use super::interrupt::Interrupt;
use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Dependency installs on a cold cache can take a while
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Runs an external program to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` inside `cwd`, failing on a non-zero exit.
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs commands on the host with all output suppressed
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
    interrupt: Option<Interrupt>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interrupt: None,
        }
    }

    /// Override the per-command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Let Ctrl+C cancel the running command instead of the whole process
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = Some(interrupt);
        self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a command line for messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = display_command(program, args);
        tracing::debug!(%command, cwd = %cwd.display(), "running command");

        let mut child = TokioCommand::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ScaffoldError::Command {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        let armed = self.interrupt.as_ref().map(Interrupt::arm);
        let interrupted = async {
            match &armed {
                Some(armed) => armed.cancelled().await,
                None => std::future::pending().await,
            }
        };

        let waited = tokio::select! {
            result = timeout(self.timeout, child.wait()) => Some(result),
            _ = interrupted => None,
        };
        drop(armed);

        let Some(waited) = waited else {
            let _ = child.kill().await;
            return Err(ScaffoldError::Command {
                command,
                reason: "interrupted".to_string(),
            });
        };

        match waited {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(ScaffoldError::Command {
                command,
                reason: match status.code() {
                    Some(code) => format!("exited with code {}", code),
                    None => "terminated by signal".to_string(),
                },
            }),
            Ok(Err(e)) => Err(ScaffoldError::Command {
                command,
                reason: e.to_string(),
            }),
            Err(_) => {
                let _ = child.kill().await;
                Err(ScaffoldError::Command {
                    command,
                    reason: format!("timed out after {} seconds", self.timeout.as_secs()),
                })
            }
        }
    }
}
