use std::{io, process::ExitStatus};

use tracing::{info, warn, Instrument};

use crate::lib::{command::build_inherited_command, errors::LaunchError, telemetry::LaunchSpan};

/// How the external client ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitOutcome {
    fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            signal: exit_signal(&status),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code for the launcher itself, using the shell's `128 + signal` convention.
    pub fn launcher_code(&self) -> u8 {
        match (self.code, self.signal) {
            (Some(code), _) => u8::try_from(code).unwrap_or(1),
            (None, Some(signal)) => u8::try_from(128 + signal).unwrap_or(1),
            (None, None) => 1,
        }
    }
}

/// Start the external client, wait for it and return how it exited.
///
/// Standard streams are inherited. There is no timeout and no retry.
pub async fn run(argv: &[String], span: LaunchSpan) -> Result<ExitOutcome, LaunchError> {
    let outcome = async {
        let mut command = build_inherited_command(argv)?;
        let program = argv[0].clone();
        info!(
            target: "ore_launcher::launch",
            program = %program,
            args = ?&argv[1..],
            "Starting external client"
        );

        // Listen before spawning so a signal in between still reaches the child.
        let mut signals = SignalForwarder::install().map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;

        let mut child = command.spawn().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LaunchError::ExecutableNotFound {
                    program: program.clone(),
                }
            } else {
                LaunchError::Spawn {
                    program: program.clone(),
                    source,
                }
            }
        })?;

        let status = signals
            .wait(&mut child)
            .await
            .map_err(|source| LaunchError::Wait {
                program: program.clone(),
                source,
            })?;
        Ok::<_, LaunchError>(ExitOutcome::from_status(status))
    }
    .instrument(span.span().clone())
    .await;

    match &outcome {
        Ok(exit) => span.finish(exit.code, exit.signal),
        Err(err) => {
            warn!(target: "ore_launcher::launch", reason = %err, "External client did not run");
            span.finish(None, None);
        }
    }
    outcome
}

/// Termination signals relayed from the launcher to the running client.
#[cfg(unix)]
struct SignalForwarder {
    terminate: tokio::signal::unix::Signal,
    hangup: tokio::signal::unix::Signal,
    interrupt: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalForwarder {
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    async fn wait(&mut self, child: &mut tokio::process::Child) -> io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                _ = self.terminate.recv() => forward_signal(child, libc::SIGTERM),
                _ = self.hangup.recv() => forward_signal(child, libc::SIGHUP),
                _ = self.interrupt.recv() => {
                    if owns_foreground_terminal() {
                        // Ctrl-C on the terminal already reached the child's process group.
                        info!(target: "ore_launcher::launch", "Interrupt received; waiting for external client");
                    } else {
                        forward_signal(child, libc::SIGINT);
                    }
                }
            }
        }
    }
}

#[cfg(not(unix))]
struct SignalForwarder;

#[cfg(not(unix))]
impl SignalForwarder {
    fn install() -> io::Result<Self> {
        Ok(Self)
    }

    async fn wait(&mut self, child: &mut tokio::process::Child) -> io::Result<ExitStatus> {
        child.wait().await
    }
}

/// True when the launcher's process group is the foreground group of the terminal on stdin.
#[cfg(unix)]
fn owns_foreground_terminal() -> bool {
    // SAFETY: both calls only query process state; `tcgetpgrp` returns -1 when stdin is not a terminal.
    let (foreground, own) = unsafe { (libc::tcgetpgrp(libc::STDIN_FILENO), libc::getpgrp()) };
    foreground != -1 && foreground == own
}

#[cfg(unix)]
fn forward_signal(child: &tokio::process::Child, signal: libc::c_int) {
    let Some(pid) = child.id() else {
        return;
    };
    info!(target: "ore_launcher::launch", pid, signal, "Forwarding signal to external client");
    // SAFETY: `pid` belongs to a child we spawned and have not reaped yet.
    let result = unsafe { libc::kill(pid as libc::pid_t, signal) };
    if result != 0 {
        warn!(
            target: "ore_launcher::launch",
            pid,
            signal,
            reason = %io::Error::last_os_error(),
            "Failed to forward signal"
        );
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
