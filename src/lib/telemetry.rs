//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Placeholder printed for an RPC endpoint that did not resolve.
pub const UNSET_MARKER: &str = "<unset>";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a child process run.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(mode: &'static str, worker_index: &str) -> Self {
        let span = info_span!(
            target: "ore_launcher::launch",
            "launch",
            mode,
            worker_index
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording the child's exit.
    pub fn finish(self, exit_code: Option<i32>, signal: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "ore_launcher::launch",
            exit_code = exit_code,
            signal = signal,
            elapsed_ms = elapsed_ms,
            "External client exited"
        );
    }
}

/// Print resolved RPC endpoints to stdout and mirror them into `tracing`.
///
/// Each entry is `(variable name, value)`; one value is printed per line.
pub fn emit_resolved_rpcs(endpoints: &[(&str, Option<&str>)]) {
    for (name, value) in endpoints {
        let value = value.unwrap_or(UNSET_MARKER);
        println!("{value}");
        info!(
            target: "ore_launcher::launch",
            env = *name,
            rpc = value,
            "Resolved RPC endpoint"
        );
    }
}
