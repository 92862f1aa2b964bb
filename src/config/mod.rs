//! Load and validate launcher settings.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod commands;
pub mod fees;
pub mod launcher;
pub mod telemetry;

pub use commands::{
    parse_commands_section, CommandsSection, RawCommandsSection, DEFAULT_CLAIM_COMMAND,
    DEFAULT_MINE_COMMAND,
};
pub use fees::{parse_fees_section, FeesSection, RawFeesSection};
pub use launcher::{
    parse_env_section, parse_launcher_section, EnvSection, LauncherSection, RawEnvSection,
    RawLauncherSection, DEFAULT_PRIMARY_ENV, DEFAULT_SECONDARY_ENV,
};

pub const CONFIG_ENV_KEY: &str = "ORE_LAUNCHER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "launcher.toml";

/// Top-level settings container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherSettings {
    pub launcher: LauncherSection,
    pub env: EnvSection,
    pub commands: CommandsSection,
    pub fees: FeesSection,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherSettings {
    launcher: Option<RawLauncherSection>,
    env: Option<RawEnvSection>,
    commands: Option<RawCommandsSection>,
    fees: Option<RawFeesSection>,
}

impl LauncherSettings {
    /// Resolve settings in the order: CLI override → `ORE_LAUNCHER_CONFIG` → `launcher.toml`.
    ///
    /// Only the default path may be absent; explicit paths must exist.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::resolve_from(override_path, env::var_os(CONFIG_ENV_KEY))
    }

    fn resolve_from(
        override_path: Option<PathBuf>,
        env_path: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            return Self::load_from_path(path);
        }

        match env_path {
            Some(value) if !value.is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path, true);
                Self::load_from_path(path)
            }
            _ => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                telemetry::log_env_source(&path, false);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    telemetry::log_defaults(&path);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load settings from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "ore_launcher::config",
            path = %path.display(),
            "Starting settings load"
        );

        let builder = ::config::Config::builder().add_source(::config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "ore_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawLauncherSettings = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "ore_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = Self::from_raw(raw, &path).map_err(|err| {
            error!(
                target: "ore_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(raw: RawLauncherSettings, path: &Path) -> Result<Self, ConfigError> {
        let launcher = parse_launcher_section(raw.launcher, path)?;
        let env = parse_env_section(raw.env, path)?;
        let commands = parse_commands_section(raw.commands, path)?;
        let fees = parse_fees_section(raw.fees);

        Ok(Self {
            launcher,
            env,
            commands,
            fees,
            source_path: Some(path.to_path_buf()),
        })
    }
}
