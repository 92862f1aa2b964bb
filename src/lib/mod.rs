//! Shared library modules providing error types, path helpers, command construction, and telemetry initialization.

pub mod command;
pub mod errors;
pub mod paths;
pub mod telemetry;
