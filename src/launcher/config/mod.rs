//! Load and validate launcher configuration.
use std::path::Path;

use serde::Deserialize;
use tracing::error;

use crate::{cli::ConfigSource, lib::errors::ConfigError};

pub mod runtime;
pub mod telemetry;

pub use runtime::{
    parse_runtime_section, RawRuntimeSection, RuntimeSection, DEFAULT_INTERRUPT_GRACE_MS,
    MAX_INTERRUPT_GRACE_MS,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub runtime: RuntimeSection,
    pub source: ConfigSource,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeSection::default(),
            source: ConfigSource::Defaults,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    runtime: Option<RawRuntimeSection>,
}

impl LauncherConfig {
    /// Load from the resolved source; `Defaults` never touches the filesystem.
    pub fn load(source: ConfigSource) -> Result<Self, ConfigError> {
        telemetry::log_source(&source);
        let runtime = match source.path() {
            Some(path) => Self::read_runtime(path)?,
            None => RuntimeSection::default(),
        };

        let config = Self { runtime, source };
        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn read_runtime(path: &Path) -> Result<RuntimeSection, ConfigError> {
        let builder = config::Config::builder().add_source(
            config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.to_path_buf(), err);
            error!(
                target: "claudesk::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.to_path_buf(), err);
            error!(
                target: "claudesk::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        parse_runtime_section(raw.runtime, path).map_err(|err| {
            error!(
                target: "claudesk::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })
    }
}
