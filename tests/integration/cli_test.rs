#[path = "../common/mod.rs"]
mod common;

use std::process::Command;

use anyhow::Result;
use common::statement_file;

const MSQL: &str = env!("CARGO_BIN_EXE_msql");

/// Test that a single statement is translated to stdout
#[test]
fn test_cli_query_command() -> Result<()> {
    let output = Command::new(MSQL)
        .args(["query", "SELECT * FROM `sales management` OFFSET 8 LIMIT 10"])
        .output()?;

    assert!(output.status.success(), "CLI query command failed");
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim(), "db['sales management'].find({}).skip(8).limit(10)");

    Ok(())
}

/// Test that a failing statement sets a non-zero exit code
#[test]
fn test_cli_query_error() -> Result<()> {
    let output = Command::new(MSQL)
        .args(["query", "SELECT * FROM table OFFSET -5"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("cannot be negative"), "unexpected stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_cli_database_and_ast_flags() -> Result<()> {
    let output = Command::new(MSQL)
        .args(["--database", "shop", "query", "SELECT a FROM t"])
        .output()?;
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "shop.t.find({}, {a: 1})");

    let output = Command::new(MSQL)
        .args(["--ast", "query", "SELECT a FROM t LIMIT 2"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\"limit\": 2"), "unexpected ast output: {}", stdout);

    Ok(())
}

/// Test batch translation of a statement file
#[test]
fn test_cli_file_command() -> Result<()> {
    let file = statement_file(&[
        "-- sample statements",
        "SELECT * FROM table",
        "",
        "SELECT X, Y, Z FROM T",
    ])?;

    let output = Command::new(MSQL)
        .arg("file")
        .arg(file.path())
        .output()?;

    assert!(output.status.success(), "CLI file command failed");
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "SELECT * FROM table -> db.table.find({})",
            "SELECT X, Y, Z FROM T -> db.T.find({}, {X: 1,Y: 1,Z: 1})",
        ]
    );

    Ok(())
}

#[test]
fn test_cli_file_command_reports_failures() -> Result<()> {
    let file = statement_file(&["SELECT * FROM t WHERE a = b", "SELECT * FROM t"])?;

    let output = Command::new(MSQL).arg("file").arg(file.path()).output()?;

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("SELECT * FROM t WHERE a = b -> error:"));
    assert!(stdout.contains("SELECT * FROM t -> db.t.find({})"));

    Ok(())
}
