use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_ore-launcher");
pub const PRIMARY_RPC: &str = "https://m.example";
pub const SECONDARY_RPC: &str = "https://a.example";

/// Launcher command isolated from the caller's environment and working directory.
pub fn launcher_command(workdir: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(workdir)
        .env_remove("MAINNET")
        .env_remove("ALCHEMY")
        .env_remove("ORE_LAUNCHER_CONFIG")
        .env("RUST_LOG", "warn");
    command
}

pub fn run_launcher(command: &mut Command) -> Result<Output> {
    command.output().context("failed to run launcher binary")
}

/// Write a settings file whose mine command is a shell snippet.
pub fn write_settings(dir: &Path, mine_command: &[&str]) -> Result<PathBuf> {
    let quoted = mine_command
        .iter()
        .map(|part| format!("{part:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let path = dir.join("launcher.toml");
    fs::write(
        &path,
        format!("[launcher]\nbase_dir = \"/srv/ore\"\n\n[commands]\nmine = [{quoted}]\n"),
    )
    .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
