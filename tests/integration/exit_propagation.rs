use anyhow::Result;
use tempfile::tempdir;

use crate::common::{launcher_command, run_launcher, write_settings, SECONDARY_RPC};

#[cfg(unix)]
#[test]
fn child_exit_code_becomes_launcher_exit_code() -> Result<()> {
    let temp = tempdir()?;
    let settings = write_settings(temp.path(), &["sh", "-c", "exit 7", "ore"])?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("ALCHEMY", SECONDARY_RPC)
            .arg("--config")
            .arg(&settings)
            .args(["--mode", "mine-a", "3", "2"]),
    )?;

    assert_eq!(output.status.code(), Some(7));
    Ok(())
}

#[cfg(unix)]
#[test]
fn child_receives_argv_and_rpcs_are_printed() -> Result<()> {
    let temp = tempdir()?;
    let settings = write_settings(temp.path(), &["sh", "-c", "echo \"$@\"", "ore"])?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("ALCHEMY", SECONDARY_RPC)
            .arg("--config")
            .arg(&settings)
            .args(["--mode", "mine-a", "3", "2"]),
    )?;

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            SECONDARY_RPC,
            "mine --rpc https://a.example --keypair /srv/ore/ids/id3.json --threads 2 --priority-fee 100000",
        ]
    );
    Ok(())
}

#[test]
fn missing_executable_exits_127() -> Result<()> {
    let temp = tempdir()?;
    let settings = write_settings(temp.path(), &["ore-launcher-missing-client"])?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("ALCHEMY", SECONDARY_RPC)
            .arg("--config")
            .arg(&settings)
            .args(["--mode", "mine-a", "3", "2"]),
    )?;

    assert_eq!(output.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ore-launcher-missing-client"),
        "stderr: {stderr}"
    );
    Ok(())
}
