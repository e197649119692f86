use std::{fs, process::Command};

use tempfile::TempDir;

fn ffsim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ffsim"))
}

fn write_script(dir: &TempDir, content: &str) -> anyhow::Result<String> {
    let path = dir.path().join("requests.txt");
    fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

#[test]
fn prints_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_script(&dir, "100\nREQUEST A 30\nREQUEST B 40\nRELEASE A\nREQUEST C 20\n")?;

    let output = ffsim().arg(&path).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!("Reading from: {}\n", path)));
    assert!(stdout.contains("REQUEST C 20 KB → SUCCESS\n"));
    assert!(stdout.contains("Block 1: [0-19]        C (20 KB) - ALLOCATED\n"));
    assert!(stdout.contains("Block 4: [70-99]        FREE (30 KB)\n"));
    assert!(stdout.contains("External Fragmentation: 25.00%\n"));
    assert!(stdout.contains("Successful Allocations: 3\n"));
    assert!(stdout.contains("Failed Allocations:     0\n"));

    Ok(())
}

#[test]
fn coalesce_flag() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_script(&dir, "100\nREQUEST A 30\nREQUEST B 40\nRELEASE A\nRELEASE B\n")?;

    let output = ffsim().arg("--coalesce").arg(&path).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Block 1: [0-99]        FREE (100 KB)\n"));
    assert!(stdout.contains("Number of Free Blocks:  1\n"));

    Ok(())
}

#[test]
fn missing_argument_prints_usage() -> anyhow::Result<()> {
    let output = ffsim().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Usage: ffsim"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn unreadable_file_fails_without_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nope.txt");

    let output = ffsim().arg(&path).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Error reading from file"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn malformed_script_fails_without_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_script(&dir, "100\nREQUEST A thirty\n")?;

    let output = ffsim().arg(&path).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("line 2"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn zero_capacity_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_script(&dir, "0\nREQUEST A 10\n")?;

    let output = ffsim().arg(&path).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("invalid capacity"));

    Ok(())
}

#[test]
fn failed_requests_stay_out_of_stderr() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_script(&dir, "100\nREQUEST A 200\nRELEASE Z\n")?;

    let output = ffsim().arg(&path).env_remove("RUST_LOG").output()?;
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("REQUEST A 200 KB → FAIL (insufficient memory)\n"));
    assert!(stdout.contains("RELEASE Z → FAIL (process not found)\n"));

    Ok(())
}
