//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::{LauncherArgs, DEV_FLAG};
pub use profile::{
    build_launch_args, resolve_config_source, resolve_config_source_with, ConfigSource,
    LaunchProfile, CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE,
};
