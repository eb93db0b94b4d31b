use std::{
    future::Future,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use tokio::{process::Child, time};
use tracing::warn;

use crate::{
    launcher::config::RuntimeSection,
    lib::{
        bun::{build_launch_command, LaunchCommand},
        errors::LaunchError,
        telemetry::LaunchSpan,
    },
};

use super::interrupt::InterruptListener;

/// How a launch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The server exited on its own with this status.
    Exited(ExitStatus),
    /// The operator interrupted the wait. `child_killed` is set when the server
    /// outlived the grace period.
    Interrupted { child_killed: bool },
}

/// Runs the server script under the configured runtime from a fixed root.
#[derive(Debug, Clone)]
pub struct Launcher {
    root: PathBuf,
    runtime: RuntimeSection,
}

impl Launcher {
    pub fn new(root: PathBuf, runtime: RuntimeSection) -> Self {
        Self { root, runtime }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_command(&self, dev: bool) -> LaunchCommand {
        build_launch_command(&self.runtime.executable, &self.root, dev)
    }

    /// Spawn `command` and block until it exits or the operator interrupts.
    pub async fn run(&self, command: &LaunchCommand) -> Result<LaunchOutcome, LaunchError> {
        let listener =
            InterruptListener::arm().map_err(|source| LaunchError::InterruptListener { source })?;
        self.run_until(command, listener.triggered()).await
    }

    /// Like [`Launcher::run`], with `interrupt` standing in for the operator signal.
    pub async fn run_until<F>(
        &self,
        command: &LaunchCommand,
        interrupt: F,
    ) -> Result<LaunchOutcome, LaunchError>
    where
        F: Future<Output = ()>,
    {
        let span = LaunchSpan::start(command);
        let mut child = command
            .to_command()
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        tokio::pin!(interrupt);
        let waited = tokio::select! {
            status = child.wait() => Some(status),
            () = &mut interrupt => None,
        };

        match waited {
            Some(status) => {
                let status = status.map_err(|source| LaunchError::Wait {
                    program: command.program().to_string(),
                    source,
                })?;
                if stopped_by_interrupt(&status) {
                    span.interrupted(false);
                    return Ok(LaunchOutcome::Interrupted {
                        child_killed: false,
                    });
                }
                span.exited(status);
                Ok(LaunchOutcome::Exited(status))
            }
            None => {
                let child_killed = self.settle_after_interrupt(&mut child).await;
                span.interrupted(child_killed);
                Ok(LaunchOutcome::Interrupted { child_killed })
            }
        }
    }

    /// Give the server the grace period to exit on its own, then kill it.
    async fn settle_after_interrupt(&self, child: &mut Child) -> bool {
        match time::timeout(self.runtime.interrupt_grace, child.wait()).await {
            Ok(Ok(_)) => false,
            Ok(Err(err)) => {
                warn!(
                    target: "claudesk::launcher",
                    error = %err,
                    "Failed to reap interrupted server"
                );
                false
            }
            Err(_) => {
                if let Err(err) = child.kill().await {
                    warn!(
                        target: "claudesk::launcher",
                        error = %err,
                        "Failed to kill interrupted server"
                    );
                }
                true
            }
        }
    }
}

/// A terminal Ctrl-C reaches the whole process group, so the server often dies
/// from SIGINT (or exits 128 + SIGINT) before the launcher's own handler fires.
#[cfg(unix)]
fn stopped_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;

    status.signal() == Some(libc::SIGINT) || status.code() == Some(128 + libc::SIGINT)
}

#[cfg(not(unix))]
fn stopped_by_interrupt(_status: &ExitStatus) -> bool {
    false
}
