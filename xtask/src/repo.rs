use std::path::{Path, PathBuf};

/// Workspace root: the directory holding the `xtask` member, which is also the
/// project root the launcher resolves at runtime.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .parent()
        .ok_or_else(|| anyhow::anyhow!("xtask manifest has no parent directory"))?;
    if !root.join("Cargo.toml").is_file() {
        anyhow::bail!("no workspace Cargo.toml in {}", root.display());
    }
    Ok(root.to_path_buf())
}

pub fn rel_from<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
