//! LaunchProfile and env file resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::launcher::{Mode, PositionalArgs};

const DEFAULT_ENV_FILE: &str = ".env";

/// Whether resolved values are checked before launching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    Strict,
    Permissive,
}

/// Env file to load before reading RPC variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    pub path: PathBuf,
    /// Explicit files must exist; the default `.env` may be absent.
    pub required: bool,
}

/// Outcome of loading an env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded,
    Absent,
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub mode: Mode,
    pub positional: PositionalArgs,
    pub config_override: Option<PathBuf>,
    pub env_file: EnvFile,
    pub validation: ValidationPolicy,
    pub dry_run: bool,
}

/// Resolve the env file: CLI override, otherwise `.env` in the working directory.
pub fn resolve_env_file(override_path: Option<PathBuf>) -> Result<EnvFile> {
    let (path, required) = match override_path {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_ENV_FILE), false),
    };

    if path.is_absolute() {
        return Ok(EnvFile { path, required });
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(EnvFile {
        path: cwd.join(path),
        required,
    })
}

/// Load variables from the env file into the process environment.
///
/// Variables already set in the environment are kept.
pub fn load_env_file(env_file: &EnvFile) -> Result<EnvFileStatus> {
    if !env_file.required && !env_file.path.exists() {
        debug!(
            target: "ore_launcher::config",
            path = %env_file.path.display(),
            "No env file found; using process environment only"
        );
        return Ok(EnvFileStatus::Absent);
    }

    load_from(&env_file.path)?;
    info!(
        target: "ore_launcher::config",
        path = %env_file.path.display(),
        "Loaded env file"
    );
    Ok(EnvFileStatus::Loaded)
}

fn load_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load env file {}", path.display()))
}
