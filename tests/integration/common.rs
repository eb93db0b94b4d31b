use std::{
    fs,
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Output, Stdio},
    thread,
    time::{Duration, Instant},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_claudesk");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Root the launcher is expected to resolve: the crate directory itself.
pub fn expected_root() -> PathBuf {
    fs::canonicalize(env!("CARGO_MANIFEST_DIR")).expect("manifest dir canonicalizes")
}

/// Scratch directory with a config that points the launcher at the fake runtime.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn with_fake_runtime() -> Self {
        let executable = fixture("tests/fixtures/fake-bun.sh");
        Self::with_executable(&executable.to_string_lossy())
    }

    pub fn with_executable(executable: &str) -> Self {
        Self::with_config(&format!(
            "[runtime]\nexecutable = \"{executable}\"\ninterrupt_grace_ms = 200\n"
        ))
    }

    pub fn with_config(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("can create temporary directory");
        fs::write(dir.path().join("claudesk.toml"), contents).expect("can write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Launcher command run from the sandbox, not from the crate root.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .args(args)
            .current_dir(self.path())
            .env("CLAUDESK_CONFIG_PATH", self.path().join("claudesk.toml"))
            .env("FAKE_BUN_RECORD_DIR", self.path())
            .env("RUST_LOG", "info")
            .stdin(Stdio::null());
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("claudesk binary should start")
    }

    pub fn recorded_argv(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("argv.txt"))
            .expect("fake runtime should record argv")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn recorded_cwd(&self) -> PathBuf {
        let cwd = fs::read_to_string(self.path().join("cwd.txt"))
            .expect("fake runtime should record cwd");
        fs::canonicalize(cwd.trim()).expect("recorded cwd canonicalizes")
    }
}

pub fn wait_for_file(path: &Path, limit: Duration) -> bool {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    path.exists()
}

pub fn wait_with_timeout(child: &mut Child, limit: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().expect("can poll child") {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(20));
    }
    None
}
