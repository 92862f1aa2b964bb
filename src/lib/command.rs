//! Shared helper for turning an argument vector into a child command.

use std::process::Stdio;

use tokio::process::Command;

use crate::lib::errors::LaunchError;

/// Build a command that inherits the launcher's standard streams.
pub fn build_inherited_command(argv: &[String]) -> Result<Command, LaunchError> {
    let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
    if program.trim().is_empty() {
        return Err(LaunchError::EmptyCommand);
    }

    let mut command = Command::new(program);
    command.args(args);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    Ok(command)
}
