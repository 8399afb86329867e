//! End-to-end tests running the `treport` binary on fragment dumps.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn treport_binary() -> String {
    env!("CARGO_BIN_EXE_treport").to_string()
}

/// Runs treport with an isolated home so no user config is picked up.
fn run_treport(home: &Path, args: &[&str]) -> Output {
    Command::new(treport_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run treport")
}

fn line(page: usize, x: f32, text: &str) -> String {
    serde_json::json!({ "page": page, "x": x, "text": text }).to_string()
}

/// A report page: header block, two rows, footer.
fn sample_dump() -> String {
    [
        line(1, 40.0, "Detailed Report"),
        line(1, 40.0, "Total 03:00:00"),
        line(1, 505.0, "TIME"),
        line(1, 35.0, "Sprint planning"),
        line(1, 35.0, "Backend"),
        line(1, 35.0, "Acme"),
        line(1, 230.0, "Client,"),
        line(1, 230.0, "Billable"),
        line(1, 420.0, "02:00:00"),
        line(1, 505.0, "09:00 AM"),
        line(1, 505.0, "- 11:00 AM"),
        line(1, 505.0, "01/08/2025"),
        line(1, 35.0, "Triage"),
        line(1, 35.0, "Backend"),
        line(1, 35.0, "Acme"),
        line(1, 230.0, "Ops"),
        line(1, 420.0, "01:00:00"),
        line(1, 505.0, "02:00 PM"),
        line(1, 505.0, "- 03:00 PM"),
        line(1, 505.0, "01/09/2025"),
        line(1, 30.0, "Created with toggl.com"),
    ]
    .join("\n")
}

fn write_input(temp: &TempDir, contents: &str) -> String {
    let path = temp.path().join("report.jsonl");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_summary_end_to_end() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, &sample_dump());

    let output = run_treport(temp.path(), &["summary", &input]);
    assert!(
        output.status.success(),
        "summary should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "S2 - Client, Billable: 2.00h\nS2 - Ops: 1.00h\n\nS2 - 3.00h\n\nClient, Billable - 2.00h\nOps - 1.00h\n"
    );
}

#[test]
fn test_rows_end_to_end() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, &sample_dump());

    let output = run_treport(temp.path(), &["rows", &input, "--hours-per-day", "8"]);
    assert!(
        output.status.success(),
        "rows should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one line per entry");
    assert_eq!(
        lines[1].split('\t').collect::<Vec<_>>(),
        vec![
            "Backend",
            "Sprint planning",
            "2025-01-08 09:00",
            "2025-01-08 11:00",
            "2",
            "1",
            "1",
            "2",
            "0.25",
            "Billable",
            "Client",
        ]
    );
}

#[test]
fn test_config_file_changes_layout() {
    let temp = TempDir::new().unwrap();
    // Move the tag column so the tag fragments fall into the dropped gap.
    let config_path = temp.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "[extract.columns.tag]\nstart = 240.0\nend = 328.0\n",
    )
    .unwrap();
    let input = write_input(&temp, &sample_dump());

    let output = run_treport(
        temp.path(),
        &["--config", &config_path.to_string_lossy(), "summary", &input],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("S2 - (untagged): 3.00h\n"), "got: {stdout}");
}

#[test]
fn test_bad_duration_fails_with_location() {
    let temp = TempDir::new().unwrap();
    let dump = [
        line(1, 35.0, "Backend"),
        line(1, 420.0, "two hours"),
        line(1, 505.0, "09:00 AM"),
        line(1, 505.0, "- 11:00 AM"),
        line(1, 505.0, "01/08/2025"),
    ]
    .join("\n");
    let input = write_input(&temp, &dump);

    let output = run_treport(temp.path(), &["summary", &input]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read duration column of row 0 on page 1"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("invalid duration: \"two hours\""), "stderr: {stderr}");
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();
    let output = run_treport(temp.path(), &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage:"));
}
