use std::{io, path::PathBuf};

use ::config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Settings file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised while resolving or running a launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Environment variable `{name}` is unset or empty")]
    MissingEnvVar { name: String },
    #[error("Invalid {name} `{value}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("Command line for the external client is empty")]
    EmptyCommand,
    #[error("Executable `{program}` was not found")]
    ExecutableNotFound { program: String },
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit code reported by the launcher when this error ends the run.
    pub const fn exit_code(&self) -> u8 {
        match self {
            LaunchError::ExecutableNotFound { .. } => 127,
            LaunchError::MissingEnvVar { .. }
            | LaunchError::InvalidArgument { .. }
            | LaunchError::EmptyCommand => 2,
            LaunchError::Spawn { .. } | LaunchError::Wait { .. } => 1,
        }
    }
}
