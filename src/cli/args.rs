//! CLI argument definitions and `LaunchProfile` construction.
use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use super::{build_launch_args, resolve_config_source, LaunchProfile};
use crate::lib::paths::resolve_root;

/// The single token that switches the server into watch mode.
pub const DEV_FLAG: &str = "--dev";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    about = "Start the claudesk server (bun run src/server.ts)",
    long_about = None,
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Run in file-watching dev mode (`bun run --watch`).
    #[arg(long, default_value_t = false)]
    pub dev: bool,
    /// Any other arguments are accepted and ignored.
    #[arg(
        value_name = "ARGS",
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}

impl LauncherArgs {
    /// Parse process arguments. Never exits: `-h`/`--help`/`-V`/`--version` are plain
    /// ignored tokens, and any parse failure falls back to a token scan.
    pub fn parse_or_scan<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.iter().cloned()) {
            Ok(parsed) => parsed,
            Err(_) => Self::scan(args.iter().skip(1)),
        }
    }

    /// Recognize `--dev` anywhere in `tokens` and ignore everything else.
    pub fn scan<'a>(tokens: impl IntoIterator<Item = &'a OsString>) -> Self {
        let ignored: Vec<String> = tokens
            .into_iter()
            .map(|token| token.to_string_lossy().into_owned())
            .collect();
        Self {
            dev: false,
            ignored,
        }
    }

    /// True when `--dev` was given as a flag or appears among the ignored tokens.
    pub fn dev_requested(&self) -> bool {
        self.dev || self.ignored.iter().any(|token| token == DEV_FLAG)
    }

    /// Build a `LaunchProfile` from CLI args, the resolved root, and the environment.
    pub fn build(self) -> Result<LaunchProfile> {
        let dev = self.dev_requested();
        let root = resolve_root()?;
        let config_source = resolve_config_source(&root);
        let launch_args = build_launch_args(dev);

        Ok(LaunchProfile {
            root,
            dev,
            config_source,
            launch_args,
        })
    }
}
