use std::process::ExitCode;

use anyhow::Error;

use crate::{
    cli::LaunchProfile,
    launcher::{
        config::LauncherConfig,
        runtime::{Launcher, LaunchOutcome},
    },
    lib::{
        errors::LaunchError,
        telemetry::{emit_launch_profile, LaunchProfileTelemetry},
    },
};

/// Bundles a launcher error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Spawn failures get a hint when the runtime is simply not installed.
    pub fn from_launch_error(err: LaunchError) -> Self {
        let hint = err.is_executable_missing().then_some(
            "hint: install bun (https://bun.sh) or set [runtime].executable in claudesk.toml",
        );
        let mut exit = Self::from_error(err);
        if let Some(hint) = hint {
            exit.message = format!("{}\n{hint}", exit.message);
        }
        exit
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Run the server described by `profile` and `config` to completion.
///
/// The server's own exit status is logged but never becomes the launcher's.
pub async fn run_launcher(
    profile: LaunchProfile,
    config: LauncherConfig,
) -> Result<LaunchOutcome, RuntimeExit> {
    emit_launch_profile(&LaunchProfileTelemetry {
        root: profile.root.to_string_lossy().as_ref(),
        dev: profile.dev,
        config_source: config.source.as_str(),
        executable: &config.runtime.executable,
        launch_args: &profile.launch_args,
    });

    let launcher = Launcher::new(profile.root, config.runtime);
    let command = launcher.build_command(profile.dev);
    launcher
        .run(&command)
        .await
        .map_err(RuntimeExit::from_launch_error)
}
