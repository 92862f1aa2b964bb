//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::launcher::{Mode, PositionalArgs};

use super::{resolve_env_file, LaunchProfile, ValidationPolicy};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launch the ORE mining or claim client for one worker",
    long_about = None
)]
pub struct LaunchArgs {
    /// Worker index; selects `<base_dir>/ids/id<WORKER_INDEX>.json`.
    pub worker_index: String,
    /// Thread or core count, depending on the mode.
    pub concurrency: String,
    /// Which client invocation to run.
    #[arg(long, value_enum, default_value_t = Mode::MineA)]
    pub mode: Mode,
    /// Path to launcher.toml (overrides ORE_LAUNCHER_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Env file holding RPC endpoints (default: `.env` when present).
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,
    /// Forward missing or malformed values to the client instead of failing.
    #[arg(long, default_value_t = false)]
    pub permissive: bool,
    /// Print the resolved invocation as JSON without starting the client.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let env_file = resolve_env_file(self.env_file)?;
        let validation = if self.permissive {
            ValidationPolicy::Permissive
        } else {
            ValidationPolicy::Strict
        };

        Ok(LaunchProfile {
            mode: self.mode,
            positional: PositionalArgs {
                worker_index: self.worker_index,
                concurrency: self.concurrency,
            },
            config_override: self.config_override,
            env_file,
            validation,
            dry_run: self.dry_run,
        })
    }
}
