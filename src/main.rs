//! Entry point for the ORE launcher.
use std::process::ExitCode;

use clap::Parser;
use ore_launcher::{
    cli::LaunchArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();
    let profile = args.into_profile().map_err(RuntimeExit::from_error)?;
    runtime::run_launcher(profile).await
}
