use tracing::debug;

use crate::cli::{ConfigSource, CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE};

use super::LauncherConfig;

pub fn log_source(source: &ConfigSource) {
    match source {
        ConfigSource::Env(path) => debug!(
            target: "claudesk::config",
            path = %path.display(),
            "Loading configuration using CLAUDESK_CONFIG_PATH environment variable"
        ),
        ConfigSource::Root(path) => debug!(
            target: "claudesk::config",
            path = %path.display(),
            "Loading configuration from project root"
        ),
        ConfigSource::Defaults => debug!(
            target: "claudesk::config",
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_FILE,
            "No configuration file found; using built-in defaults"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    debug!(
        target: "claudesk::config",
        source = config.source.as_str(),
        executable = %config.runtime.executable,
        interrupt_grace_ms = config.runtime.interrupt_grace.as_millis() as u64,
        "Configuration resolved"
    );
}
