//! Argument vector construction for the external client.
use crate::launcher::{
    mode::RpcLayout,
    request::LaunchConfig,
};

/// Build the child's argument vector: command prefix, then the mode's flags.
///
/// Missing RPC values become empty strings in their slot.
pub fn build_argv(config: &LaunchConfig) -> Vec<String> {
    let template = config.mode.template();
    let mut argv = config.program.clone();
    argv.push(template.subcommand.to_string());

    let primary = config.primary_rpc_url.clone().unwrap_or_default();
    let secondary = config.secondary_rpc_url.clone().unwrap_or_default();
    match template.rpc {
        RpcLayout::Single => {
            argv.push("--rpc".into());
            argv.push(secondary);
        }
        RpcLayout::Dual => {
            argv.push("--rpc".into());
            argv.push(primary);
            argv.push("--rpc2".into());
            argv.push(secondary);
        }
    }

    argv.push("--keypair".into());
    argv.push(config.keypair_path.to_string_lossy().into_owned());

    if let Some(flag) = template.concurrency_flag {
        argv.push(flag.into());
        argv.push(config.concurrency.clone());
    }

    argv.push("--priority-fee".into());
    argv.push(config.priority_fee.to_string());

    if let Some(buffer_time) = config.buffer_time {
        argv.push("--buffer-time".into());
        argv.push(buffer_time.to_string());
    }

    argv
}
