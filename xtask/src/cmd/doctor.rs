use crate::repo;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Script the launcher hands to the runtime, relative to the project root.
const SERVER_SCRIPT: &str = "src/server.ts";

pub fn run(root: Option<PathBuf>, runtime: &str) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => repo::repo_root()?,
    };

    let mut failures = 0usize;

    let script = root.join(SERVER_SCRIPT);
    if script.is_file() {
        println!("ok: {} present", repo::rel_from(&root, &script).display());
    } else {
        eprintln!(
            "FAIL: {} missing under {}",
            SERVER_SCRIPT,
            root.display()
        );
        failures += 1;
    }

    match runtime_version(runtime, &root) {
        Ok(version) => println!("ok: {runtime} {version}"),
        Err(err) => {
            eprintln!("FAIL: {runtime}: {err}");
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("doctor found {failures} problem(s)");
    }
    Ok(())
}

/// First line of `<runtime> --version`, run from the project root.
fn runtime_version(runtime: &str, root: &Path) -> Result<String> {
    let output = Command::new(runtime)
        .arg("--version")
        .current_dir(root)
        .stdin(Stdio::null())
        .output()
        .map_err(|err| anyhow::anyhow!("cannot run `{runtime} --version`: {err}"))?;
    if !output.status.success() {
        anyhow::bail!("`{runtime} --version` exited with {}", output.status);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
}
