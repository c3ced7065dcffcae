use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../mockgen-core/tests/fixtures/catalog.schema.json")
}

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mockgen-cli-{label}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn mockgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mockgen"))
        .arg("--schema")
        .arg(fixture())
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run mockgen")
}

#[test]
fn prints_json_records_to_stdout() {
    let output = mockgen(&["--interface", "SimpleUser", "--count", "3", "--seed", "1"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let records = records.as_array().expect("array of records");
    assert_eq!(records.len(), 3);
    assert!(records[0].get("email").is_some());
}

#[test]
fn seeded_runs_with_pinned_clock_are_reproducible() {
    let dir = scratch_dir("seeded");
    let config = dir.join("mockgen.toml");
    std::fs::write(
        &config,
        "reference_time = \"2024-05-01T12:00:00Z\"\narray_max_len = 3\n",
    )
    .expect("write config");

    let args = [
        "--interface",
        "User",
        "--count",
        "5",
        "--seed",
        "42",
        "--output",
        "csv",
        "--config",
        config.to_str().expect("utf-8 path"),
    ];
    let first = mockgen(&args);
    let second = mockgen(&args);
    assert!(first.status.success(), "stderr: {}", String::from_utf8_lossy(&first.stderr));
    assert_eq!(first.stdout, second.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn writes_csv_and_report_files() {
    let dir = scratch_dir("files");
    let out = dir.join("users.csv");
    let report = dir.join("report.json");

    let output = mockgen(&[
        "--interface",
        "User",
        "--count",
        "4",
        "--output",
        "CSV",
        "--out-file",
        out.to_str().expect("utf-8 path"),
        "--report",
        report.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let csv = std::fs::read_to_string(&out).expect("read csv");
    let mut lines = csv.lines();
    assert!(lines.next().expect("header").starts_with("id,firstName,lastName"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).expect("read report"))
            .expect("parse report");
    assert_eq!(report["records_generated"], 4);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_interface_fails_with_names() {
    let output = mockgen(&["--interface", "Missing"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("type not found: 'Missing'"));
    assert!(stderr.contains("SimpleUser"));
}

#[test]
fn unsupported_format_fails_without_writing() {
    let dir = scratch_dir("format");
    let out = dir.join("users.xml");
    let output = mockgen(&[
        "--interface",
        "User",
        "--output",
        "xml",
        "--out-file",
        out.to_str().expect("utf-8 path"),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported format: 'xml'"));
    assert!(!out.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn negative_count_is_an_error() {
    let output = mockgen(&["--interface", "User", "--count", "-1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("record count must be >= 0"));
}
