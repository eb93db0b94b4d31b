mod cmd;
mod repo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/release build).
    Preflight,
    /// Check that the launcher can start the server: script present, runtime runnable.
    Doctor {
        /// Project root to inspect (defaults to the workspace root).
        #[arg(long)]
        root: Option<PathBuf>,
        /// Runtime executable to run with `--version`.
        #[arg(long, default_value = "bun")]
        runtime: String,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => cmd::preflight::run()?,
        Command::Doctor { root, runtime } => cmd::doctor::run(root, &runtime)?,
    }
    Ok(())
}
