//! CLI Smoke Test
//!
//! Runs the built `sol-inspect` binary and verifies the documented exit
//! codes end to end: 2 for invalid input (reported before any network
//! call), 1 for RPC failure after every endpoint is exhausted.

use std::process::Command;

fn sol_inspect() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sol-inspect"))
}

#[test]
fn test_invalid_address_exits_2() {
    // 0 and O are not in the base58 alphabet
    let output = sol_inspect()
        .arg("O0O0O0")
        .output()
        .expect("run sol-inspect");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid"), "stderr was: {}", stderr);
}

#[test]
fn test_short_address_exits_2() {
    // Valid base58 but decodes to far fewer than 32 bytes
    let output = sol_inspect().arg("abc").output().expect("run sol-inspect");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("32"), "stderr was: {}", stderr);
}

#[test]
fn test_unreachable_endpoints_exit_1() {
    // Port 1 refuses connections immediately; tight retry settings via the
    // environment keep the failover loop fast
    let output = sol_inspect()
        .arg("11111111111111111111111111111111")
        .args(["--rpc", "http://127.0.0.1:1"])
        .env("SOL_INSPECT_RPC__MAX_RETRIES", "1")
        .env("SOL_INSPECT_RPC__INITIAL_BACKOFF_MS", "1")
        .output()
        .expect("run sol-inspect");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("All RPC endpoints failed"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_unknown_flag_exits_2() {
    let output = sol_inspect()
        .arg("11111111111111111111111111111111")
        .arg("--definitely-not-a-flag")
        .output()
        .expect("run sol-inspect");

    assert_eq!(output.status.code(), Some(2));
}
