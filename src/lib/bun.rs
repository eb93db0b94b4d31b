//! Shared helpers for building `bun run` commands.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::lib::paths::server_script_path;

/// Runtime executable used when no configuration overrides it.
pub const DEFAULT_RUNTIME: &str = "bun";
pub const RUN_SUBCOMMAND: &str = "run";
pub const WATCH_FLAG: &str = "--watch";

/// Fully resolved invocation of the server script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: String,
    watch: bool,
    script: PathBuf,
    working_dir: PathBuf,
}

/// Build the `<runtime> run [--watch] <root>/src/server.ts` invocation.
pub fn build_launch_command(runtime: &str, root: &Path, watch: bool) -> LaunchCommand {
    LaunchCommand {
        program: runtime.to_string(),
        watch,
        script: server_script_path(root),
        working_dir: root.to_path_buf(),
    }
}

impl LaunchCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn is_watch(&self) -> bool {
        self.watch
    }

    /// The ordered argument sequence, program first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program.clone(), RUN_SUBCOMMAND.to_string()];
        if self.watch {
            argv.push(WATCH_FLAG.to_string());
        }
        argv.push(self.script.to_string_lossy().into_owned());
        argv
    }

    /// Build the child process command. Stdio and environment are inherited.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.kill_on_drop(true);
        command.current_dir(&self.working_dir);
        command.arg(RUN_SUBCOMMAND);
        if self.watch {
            command.arg(WATCH_FLAG);
        }
        command.arg(&self.script);
        command
    }
}
