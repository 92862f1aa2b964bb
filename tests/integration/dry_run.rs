use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{launcher_command, run_launcher, PRIMARY_RPC, SECONDARY_RPC};

#[test]
fn mine_c_dry_run_prints_expected_argv() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("MAINNET", PRIMARY_RPC)
            .env("ALCHEMY", SECONDARY_RPC)
            .args(["--mode", "mine-c", "--dry-run", "7", "4"]),
    )?;

    assert!(output.status.success(), "status: {:?}", output.status);
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["program"], "ore");
    let args: Vec<&str> = payload["args"]
        .as_array()
        .expect("args should be an array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        args,
        [
            "mine",
            "--rpc",
            PRIMARY_RPC,
            "--rpc2",
            SECONDARY_RPC,
            "--keypair",
            "/root/orev2_setup/ids/id7.json",
            "--threads",
            "4",
            "--priority-fee",
            "500000",
        ]
    );
    Ok(())
}

#[test]
fn env_file_supplies_rpc_endpoints() -> Result<()> {
    let temp = tempdir()?;
    std::fs::write(
        temp.path().join(".env"),
        format!("ALCHEMY={SECONDARY_RPC}\n"),
    )?;
    let output = run_launcher(
        launcher_command(temp.path()).args(["--mode", "mine-a", "--dry-run", "2", "8"]),
    )?;

    assert!(output.status.success(), "status: {:?}", output.status);
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["args"][2], SECONDARY_RPC);
    assert_eq!(payload["priority_fee"], 100000);
    Ok(())
}

#[test]
fn missing_mainnet_fails_in_strict_mode() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("ALCHEMY", SECONDARY_RPC)
            .args(["--mode", "mine-b", "--dry-run", "1", "4"]),
    )?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MAINNET"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_mainnet_is_forwarded_when_permissive() -> Result<()> {
    let temp = tempdir()?;
    let output = run_launcher(
        launcher_command(temp.path())
            .env("ALCHEMY", SECONDARY_RPC)
            .args(["--mode", "mine-b", "--permissive", "--dry-run", "1", "4"]),
    )?;

    assert!(output.status.success(), "status: {:?}", output.status);
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["args"][1], "--rpc");
    assert_eq!(payload["args"][2], "");
    assert_eq!(payload["buffer_time"], 2);
    Ok(())
}
