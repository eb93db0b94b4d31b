use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::lib::{bun::DEFAULT_RUNTIME, errors::ConfigError};

pub const DEFAULT_INTERRUPT_GRACE_MS: u64 = 250;
pub const MAX_INTERRUPT_GRACE_MS: u64 = 10_000;

/// How the server runtime is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSection {
    pub executable: String,
    /// How long an interrupted server may take to exit before it is killed.
    pub interrupt_grace: Duration,
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            executable: DEFAULT_RUNTIME.to_string(),
            interrupt_grace: Duration::from_millis(DEFAULT_INTERRUPT_GRACE_MS),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRuntimeSection {
    pub executable: Option<String>,
    pub interrupt_grace_ms: Option<u64>,
}

pub fn parse_runtime_section(
    raw: Option<RawRuntimeSection>,
    path: &Path,
) -> Result<RuntimeSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let executable = raw
        .executable
        .unwrap_or_else(|| DEFAULT_RUNTIME.to_string());
    validate_executable(&executable, path)?;

    let grace_ms = raw
        .interrupt_grace_ms
        .unwrap_or(DEFAULT_INTERRUPT_GRACE_MS);
    validate_grace(grace_ms, path)?;

    Ok(RuntimeSection {
        executable,
        interrupt_grace: Duration::from_millis(grace_ms),
    })
}

fn validate_executable(executable: &str, path: &Path) -> Result<(), ConfigError> {
    let message = if executable.is_empty() {
        "must not be empty"
    } else if executable.trim() != executable {
        "must not have leading or trailing whitespace"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "runtime.executable",
        message: message.into(),
    })
}

fn validate_grace(grace_ms: u64, path: &Path) -> Result<(), ConfigError> {
    if grace_ms <= MAX_INTERRUPT_GRACE_MS {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "runtime.interrupt_grace_ms",
        message: format!("Use a value in the range 0-{MAX_INTERRUPT_GRACE_MS}"),
    })
}
