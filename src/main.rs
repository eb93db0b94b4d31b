//! Entry point for the claudesk launcher.
use std::{env, process::ExitCode};

use claudesk::{
    cli::LauncherArgs,
    launcher::{
        config::LauncherConfig,
        runtime::{self, RuntimeExit},
    },
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse_or_scan(env::args_os());
    let profile = args.build().map_err(RuntimeExit::from_error)?;
    let config =
        LauncherConfig::load(profile.config_source.clone()).map_err(RuntimeExit::from_error)?;

    // The server's exit status is not forwarded.
    runtime::run_launcher(profile, config).await?;
    Ok(())
}
