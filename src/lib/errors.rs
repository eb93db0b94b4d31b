use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// The project root could not be derived from the launcher's own location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RootError {
    #[error("Launcher source location {path} is not an absolute path")]
    NotAbsolute { path: PathBuf },
    #[error("Launcher source location {path} has no ancestor {depth} levels up")]
    TooShallow { path: PathBuf, depth: usize },
}

/// Failures while running the server process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to install interrupt handler: {source}")]
    InterruptListener {
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// True when the runtime executable itself could not be found on `PATH`.
    pub fn is_executable_missing(&self) -> bool {
        matches!(
            self,
            LaunchError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
