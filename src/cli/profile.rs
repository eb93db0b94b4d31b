//! LaunchProfile and config location resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use super::DEV_FLAG;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_KEY: &str = "CLAUDESK_CONFIG_PATH";
/// Config file picked up from the project root when present.
pub const DEFAULT_CONFIG_FILE: &str = "claudesk.toml";

/// Where launcher settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given through `CLAUDESK_CONFIG_PATH`; must exist.
    Env(PathBuf),
    /// `claudesk.toml` found in the project root.
    Root(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Env(path) | ConfigSource::Root(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Env(_) => "env",
            ConfigSource::Root(_) => "root",
            ConfigSource::Defaults => "defaults",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub root: PathBuf,
    pub dev: bool,
    pub config_source: ConfigSource,
    pub launch_args: Vec<String>,
}

/// Resolve the config source in the order: env var → `<root>/claudesk.toml` → defaults.
pub fn resolve_config_source(root: &Path) -> ConfigSource {
    resolve_config_source_with(root, env::var_os(CONFIG_ENV_KEY))
}

pub fn resolve_config_source_with(root: &Path, env_value: Option<OsString>) -> ConfigSource {
    if let Some(value) = env_value.filter(|value| !value.to_string_lossy().trim().is_empty()) {
        return ConfigSource::Env(PathBuf::from(value));
    }

    let candidate = root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        return ConfigSource::Root(candidate);
    }

    ConfigSource::Defaults
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(dev: bool) -> Vec<String> {
    if dev {
        vec![DEV_FLAG.to_string()]
    } else {
        Vec::new()
    }
}
