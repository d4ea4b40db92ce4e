// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary and validate observable behavior.

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "ant_ecosystem";

const MEADOW: &str = r#"
width = 12
height = 12
tick_ms = 1

[[colonies]]
row = 6
col = 6
food = 30

[[food_piles]]
row = 2
col = 9
amount = 50

[[ant_eaters]]
row = 9
col = 2
"#;

fn scenario_file(content: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    write!(f, "{}", content)?;
    Ok(f)
}

#[test]
fn prints_summary() -> Result<(), Box<dyn std::error::Error>> {
    let f = scenario_file(MEADOW)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--scenario", f.path().to_str().unwrap(),
        "--ticks", "200",
        "--seed", "42",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("==="))
        .stdout(contains("Simulation Latency"))
        .stdout(contains("ticks=200"))
        .stdout(contains("colony 0"))
        .stdout(contains("ant-eater 0"));

    Ok(())
}

#[test]
fn replicas_run_in_parallel() -> Result<(), Box<dyn std::error::Error>> {
    let f = scenario_file(MEADOW)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "-s", f.path().to_str().unwrap(),
        "-t", "50",
        "--seed", "7",
        "--replicas", "4",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("(replicas=4)"))
        .stdout(contains("ticks=50"));

    Ok(())
}

#[test]
fn json_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let f = scenario_file(MEADOW)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "-s", f.path().to_str().unwrap(),
        "-t", "10",
        "--seed", "1",
        "--json",
        "--suppress-events",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let snapshot: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(snapshot["tick"], 10);
    assert_eq!(snapshot["width"], 12);
    assert!(snapshot["colonies"][0]["ants"].is_array());

    Ok(())
}

#[test]
fn single_cell_grid_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let f = scenario_file("width = 1\nheight = 1\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-s", f.path().to_str().unwrap()]);

    cmd.assert().failure().stderr(contains("Degenerate grid"));

    Ok(())
}

#[test]
fn missing_scenario_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["-s", "/definitely/not/here.toml"]);

    cmd.assert().failure().stderr(contains("IO error"));

    Ok(())
}
