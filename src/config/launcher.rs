use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths};

pub const DEFAULT_PRIMARY_ENV: &str = "MAINNET";
pub const DEFAULT_SECONDARY_ENV: &str = "ALCHEMY";

/// Where keypairs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSection {
    pub base_dir: PathBuf,
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(paths::DEFAULT_BASE_DIR),
        }
    }
}

/// Names of the environment variables holding RPC endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSection {
    pub primary: String,
    pub secondary: String,
}

impl Default for EnvSection {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_ENV.to_string(),
            secondary: DEFAULT_SECONDARY_ENV.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawEnvSection {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LauncherSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let base_dir = raw
        .base_dir
        .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_BASE_DIR));
    if !paths::is_nonempty_absolute(&base_dir) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.base_dir",
            message: "Use an absolute directory path".into(),
        });
    }
    Ok(LauncherSection { base_dir })
}

pub fn parse_env_section(
    raw: Option<RawEnvSection>,
    path: &Path,
) -> Result<EnvSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let primary = raw
        .primary
        .unwrap_or_else(|| DEFAULT_PRIMARY_ENV.to_string());
    validate_env_name(&primary, "env.primary", path)?;
    let secondary = raw
        .secondary
        .unwrap_or_else(|| DEFAULT_SECONDARY_ENV.to_string());
    validate_env_name(&secondary, "env.secondary", path)?;
    Ok(EnvSection { primary, secondary })
}

fn validate_env_name(name: &str, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if name.trim().is_empty() || name.contains('=') {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Use a non-empty variable name without `=`".into(),
        });
    }
    Ok(())
}
