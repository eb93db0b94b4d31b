use crate::repo;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// `cargo` invocations that make up the quality gate, in order.
const STEPS: &[&[&str]] = &[
    &["fetch"],
    &["check", "--workspace", "--all-targets"],
    &["test", "--workspace"],
    &["fmt", "--all", "--", "--check"],
    &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    &["build", "--release", "--bin", "claudesk"],
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for args in STEPS {
        run_cargo(&root, args)?;
    }
    eprintln!("preflight passed ({} steps)", STEPS.len());
    Ok(())
}

fn run_cargo(root: &Path, args: &[&str]) -> Result<()> {
    let label = format!("cargo {}", args.join(" "));
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
