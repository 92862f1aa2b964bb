#![cfg(unix)]

use std::{
    path::Path,
    process::{ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use tempfile::tempdir;

use crate::common::{launcher_command, write_settings, SECONDARY_RPC};

const READY_ENV: &str = "ORE_LAUNCHER_READY";

/// Run the launcher with a mine command that traps `signal` and exits with `code`,
/// then send `signal` to the launcher once the client is waiting.
fn signal_launcher(trap: &str, code: i32, signal: libc::c_int) -> Result<(ExitStatus, Duration)> {
    let temp = tempdir()?;
    let ready = temp.path().join("ready");
    let script = format!("trap 'exit {code}' {trap}; touch \"${READY_ENV}\"; sleep 5 & wait");
    let settings = write_settings(temp.path(), &["sh", "-c", &script, "ore"])?;

    let mut child = launcher_command(temp.path())
        .env("ALCHEMY", SECONDARY_RPC)
        .env(READY_ENV, &ready)
        .arg("--config")
        .arg(&settings)
        .args(["--mode", "mine-a", "3", "2"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .spawn()
        .context("failed to spawn launcher binary")?;

    if !wait_for_file(&ready, Duration::from_secs(5)) {
        child.kill().ok();
        bail!("external client never became ready");
    }

    let sent_at = Instant::now();
    // SAFETY: the pid is our own unreaped child.
    let result = unsafe { libc::kill(child.id() as libc::pid_t, signal) };
    assert_eq!(result, 0, "kill should reach the launcher");
    let status = child.wait().context("failed to wait for launcher")?;
    Ok((status, sent_at.elapsed()))
}

fn wait_for_file(path: &Path, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    false
}

#[test]
fn sigterm_is_forwarded_to_client() -> Result<()> {
    let (status, elapsed) = signal_launcher("TERM", 9, libc::SIGTERM)?;

    assert_eq!(status.code(), Some(9));
    assert!(elapsed < Duration::from_secs(4), "took {elapsed:?}");
    Ok(())
}

#[test]
fn sighup_is_forwarded_to_client() -> Result<()> {
    let (status, elapsed) = signal_launcher("HUP", 10, libc::SIGHUP)?;

    assert_eq!(status.code(), Some(10));
    assert!(elapsed < Duration::from_secs(4), "took {elapsed:?}");
    Ok(())
}

#[test]
fn sigint_to_launcher_pid_reaches_client() -> Result<()> {
    let (status, elapsed) = signal_launcher("INT", 8, libc::SIGINT)?;

    assert_eq!(status.code(), Some(8));
    assert!(elapsed < Duration::from_secs(4), "took {elapsed:?}");
    Ok(())
}

#[test]
fn signal_sent_right_after_spawn_is_not_lost() -> Result<()> {
    let temp = tempdir()?;
    let settings = write_settings(
        temp.path(),
        &[
            "sh",
            "-c",
            "trap 'exit 9' TERM; kill -TERM $PPID; sleep 5 & wait",
            "ore",
        ],
    )?;

    let status = launcher_command(temp.path())
        .env("ALCHEMY", SECONDARY_RPC)
        .arg("--config")
        .arg(&settings)
        .args(["--mode", "mine-a", "3", "2"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .context("failed to run launcher binary")?;

    assert_eq!(status.code(), Some(9));
    Ok(())
}
