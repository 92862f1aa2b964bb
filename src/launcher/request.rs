//! Immutable launch configuration built once per invocation.
use std::{env, path::PathBuf};

use crate::{
    config::{EnvSection, LauncherSettings},
    launcher::mode::{Mode, ProgramKind},
    lib::{errors::LaunchError, paths},
};

/// RPC endpoint values captured from the environment in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub primary_name: String,
    pub secondary_name: String,
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl EnvSnapshot {
    /// Read the configured variables from the process environment.
    pub fn capture(names: &EnvSection) -> Self {
        Self::from_lookup(names, |name| env::var(name).ok())
    }

    /// Build a snapshot from an arbitrary lookup (testable helper).
    pub fn from_lookup(names: &EnvSection, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            primary_name: names.primary.clone(),
            secondary_name: names.secondary.clone(),
            primary: lookup(&names.primary),
            secondary: lookup(&names.secondary),
        }
    }
}

/// Positional arguments copied verbatim from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalArgs {
    pub worker_index: String,
    pub concurrency: String,
}

/// Everything needed to build the child's argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub mode: Mode,
    pub program: Vec<String>,
    pub primary_rpc_url: Option<String>,
    pub secondary_rpc_url: Option<String>,
    pub primary_env: String,
    pub secondary_env: String,
    pub worker_index: String,
    pub concurrency: String,
    pub keypair_path: PathBuf,
    pub priority_fee: u64,
    pub buffer_time: Option<u64>,
}

impl LaunchConfig {
    /// Combine mode, positional arguments, environment and settings.
    ///
    /// Single-RPC modes never carry a primary endpoint.
    pub fn resolve(
        mode: Mode,
        args: PositionalArgs,
        env: EnvSnapshot,
        settings: &LauncherSettings,
    ) -> Self {
        let program = match mode.template().program {
            ProgramKind::Claim => settings.commands.claim.clone(),
            ProgramKind::Mine => settings.commands.mine.clone(),
        };
        let primary_rpc_url = if mode.uses_primary_rpc() {
            env.primary
        } else {
            None
        };
        let keypair_path = paths::keypair_path(&settings.launcher.base_dir, &args.worker_index);

        Self {
            mode,
            program,
            primary_rpc_url,
            secondary_rpc_url: env.secondary,
            primary_env: env.primary_name,
            secondary_env: env.secondary_name,
            worker_index: args.worker_index,
            concurrency: args.concurrency,
            keypair_path,
            priority_fee: settings.fees.priority_fee(mode),
            buffer_time: settings.fees.buffer_time(mode),
        }
    }

    /// RPC endpoints this mode passes to the client, keyed by variable name.
    pub fn rpc_endpoints(&self) -> Vec<(&str, Option<&str>)> {
        let mut endpoints = Vec::with_capacity(2);
        if self.mode.uses_primary_rpc() {
            endpoints.push((self.primary_env.as_str(), self.primary_rpc_url.as_deref()));
        }
        endpoints.push((self.secondary_env.as_str(), self.secondary_rpc_url.as_deref()));
        endpoints
    }

    /// Reject missing endpoints and non-numeric positional arguments.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.mode.uses_primary_rpc() && is_blank(self.primary_rpc_url.as_deref()) {
            return Err(LaunchError::MissingEnvVar {
                name: self.primary_env.clone(),
            });
        }
        if is_blank(self.secondary_rpc_url.as_deref()) {
            return Err(LaunchError::MissingEnvVar {
                name: self.secondary_env.clone(),
            });
        }
        validate_count("worker index", &self.worker_index)?;
        if self.mode.uses_concurrency() {
            validate_count("concurrency", &self.concurrency)?;
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn validate_count(name: &'static str, value: &str) -> Result<(), LaunchError> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|err| LaunchError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: err.to_string(),
        })
}
