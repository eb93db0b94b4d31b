//! Project root discovery relative to the launcher's own source location.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::lib::errors::RootError;

/// Entry source file of the launcher binary, fixed at compile time.
pub const ENTRY_SOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs");
/// Number of parent directories between [`ENTRY_SOURCE`] and the project root.
pub const ROOT_DEPTH: usize = 2;
/// Server script location, relative to the project root.
pub const SERVER_SCRIPT: [&str; 2] = ["src", "server.ts"];

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve the project root from [`ENTRY_SOURCE`].
pub fn resolve_root() -> Result<PathBuf, RootError> {
    resolve_root_from(Path::new(ENTRY_SOURCE))
}

/// Resolve the directory [`ROOT_DEPTH`] levels above `source`.
///
/// Symlinks are followed when `source` exists on disk; otherwise the path is taken
/// as given. The caller's working directory never participates.
pub fn resolve_root_from(source: &Path) -> Result<PathBuf, RootError> {
    if !is_nonempty_absolute(source) {
        return Err(RootError::NotAbsolute {
            path: source.to_path_buf(),
        });
    }

    let resolved = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    resolved
        .ancestors()
        .nth(ROOT_DEPTH)
        .map(Path::to_path_buf)
        .ok_or_else(|| RootError::TooShallow {
            path: resolved.clone(),
            depth: ROOT_DEPTH,
        })
}

/// Absolute path of the server script beneath `root`.
pub fn server_script_path(root: &Path) -> PathBuf {
    SERVER_SCRIPT
        .iter()
        .fold(root.to_path_buf(), |path, part| path.join(part))
}
