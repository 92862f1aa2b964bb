use std::process::ExitCode;

use anyhow::{Error, Result};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    cli::{load_env_file, LaunchProfile, ValidationPolicy},
    config::LauncherSettings,
    launcher::{self, build_argv, EnvSnapshot, LaunchConfig},
    lib::{errors::LaunchError, telemetry},
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: 1,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        Self {
            exit_code: err.exit_code(),
            message: err.to_string(),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Resolve settings and environment, then run (or describe) the external client.
///
/// Returns the child's exit code when it ran.
pub async fn run_launcher(profile: LaunchProfile) -> Result<ExitCode, RuntimeExit> {
    load_env_file(&profile.env_file).map_err(RuntimeExit::from_error)?;
    let settings =
        LauncherSettings::resolve(profile.config_override.clone()).map_err(RuntimeExit::from_error)?;
    let config = resolve_launch_config(&profile, &settings)?;
    let argv = build_argv(&config);

    if profile.dry_run {
        let payload = dry_run_payload(&config, &argv).map_err(RuntimeExit::from_error)?;
        println!("{payload}");
        return Ok(ExitCode::SUCCESS);
    }

    telemetry::emit_resolved_rpcs(&config.rpc_endpoints());
    let span = telemetry::LaunchSpan::start(config.mode.as_str(), &config.worker_index);
    let outcome = launcher::run(&argv, span)
        .await
        .map_err(RuntimeExit::from_launch_error)?;

    if !outcome.success() {
        warn!(
            target: "ore_launcher::launch",
            exit_code = outcome.code,
            signal = outcome.signal,
            "External client reported failure"
        );
    }
    Ok(ExitCode::from(outcome.launcher_code()))
}

fn resolve_launch_config(
    profile: &LaunchProfile,
    settings: &LauncherSettings,
) -> Result<LaunchConfig, RuntimeExit> {
    let env = EnvSnapshot::capture(&settings.env);
    let config = LaunchConfig::resolve(profile.mode, profile.positional.clone(), env, settings);

    match profile.validation {
        ValidationPolicy::Strict => config
            .validate()
            .map_err(RuntimeExit::from_launch_error)?,
        ValidationPolicy::Permissive => {
            if let Err(err) = config.validate() {
                info!(
                    target: "ore_launcher::launch",
                    reason = %err,
                    "Forwarding unvalidated values to the external client"
                );
            }
        }
    }
    Ok(config)
}

/// JSON description of the invocation printed by `--dry-run`.
fn dry_run_payload(config: &LaunchConfig, argv: &[String]) -> Result<String> {
    let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
    let payload = json!({
        "mode": config.mode.as_str(),
        "program": program,
        "args": args,
        "keypair_path": config.keypair_path.to_string_lossy(),
        "priority_fee": config.priority_fee,
        "buffer_time": config.buffer_time,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}
