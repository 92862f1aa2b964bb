//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{
    load_env_file, resolve_env_file, EnvFile, EnvFileStatus, LaunchProfile, ValidationPolicy,
};
