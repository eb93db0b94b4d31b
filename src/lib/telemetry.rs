//! Telemetry initialization and launch span helpers.

use std::{process::ExitStatus, time::Instant};

use anyhow::Result;
use tracing::{debug, debug_span, warn, Span};
use tracing_subscriber::{fmt, EnvFilter};

use crate::lib::bun::LaunchCommand;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the server keeps stdout to itself. Without `RUST_LOG`
/// only warnings and errors are shown; launch progress is logged at `debug`.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of the server process.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    program: String,
}

impl LaunchSpan {
    /// Start a span and log the full invocation.
    pub fn start(command: &LaunchCommand) -> Self {
        let span = debug_span!(
            target: "claudesk::launcher",
            "server_process",
            program = command.program(),
            watch = command.is_watch()
        );
        {
            let _entered = span.enter();
            debug!(
                target: "claudesk::launcher",
                argv = ?command.argv(),
                cwd = %command.working_dir().display(),
                "Starting server"
            );
        }
        Self {
            span,
            started_at: Instant::now(),
            program: command.program().to_string(),
        }
    }

    /// Record the child's own exit.
    pub fn exited(self, status: ExitStatus) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        if status.success() {
            debug!(
                target: "claudesk::launcher",
                program = %self.program,
                exit_code = status.code(),
                elapsed_ms = elapsed_ms,
                "Server exited"
            );
        } else {
            warn!(
                target: "claudesk::launcher",
                program = %self.program,
                exit_code = status.code(),
                status = %status,
                elapsed_ms = elapsed_ms,
                "Server exited abnormally"
            );
        }
    }

    /// Record an operator interrupt and whether the child had to be killed.
    pub fn interrupted(self, child_killed: bool) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        debug!(
            target: "claudesk::launcher",
            program = %self.program,
            child_killed = child_killed,
            elapsed_ms = elapsed_ms,
            "Interrupted; server stopped"
        );
    }
}

/// Payload for logging the resolved launch profile as structured telemetry.
#[derive(Debug)]
pub struct LaunchProfileTelemetry<'a> {
    pub root: &'a str,
    pub dev: bool,
    pub config_source: &'a str,
    pub executable: &'a str,
    pub launch_args: &'a [String],
}

/// Emit the launch profile to `tracing`.
pub fn emit_launch_profile(telemetry: &LaunchProfileTelemetry<'_>) {
    debug!(
        target: "claudesk::launcher",
        root = telemetry.root,
        dev = telemetry.dev,
        config_source = telemetry.config_source,
        executable = telemetry.executable,
        launch_args = ?telemetry.launch_args,
        "Launching claudesk"
    );
}
