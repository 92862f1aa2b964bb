//! Mode table, launch configuration, argument vector and child execution.
mod argv;
mod executor;
mod mode;
mod request;

pub use argv::build_argv;
pub use executor::{run, ExitOutcome};
pub use mode::{Mode, ModeTemplate, ProgramKind, RpcLayout};
pub use request::{EnvSnapshot, LaunchConfig, PositionalArgs};
