use assert_cmd::Command;
use benchplot::chart::check_font_support;
use predicates::prelude::*;
use serde_json::json;
use std::{fs, path::Path};

const CHARTS: [&str; 4] = [
    "ns_per_op_comparison.png",
    "pct_change.png",
    "allocs_comparison.png",
    "category_summary.png",
];

fn benchplot() -> Command {
    Command::new(env!("CARGO_BIN_EXE_benchplot"))
}

fn write_report(dir: &Path, entries: serde_json::Value) -> std::path::PathBuf {
    let report = json!({
        "old_label": "go-1.25.5",
        "new_label": "go-1.26",
        "entries": entries,
        "summary": {
            "new_wins": 2,
            "old_wins": 1,
            "ties": 0,
            "avg_ns_per_op_change_pct": -4.25
        }
    });
    let path = dir.join("comparison.json");
    fs::write(&path, report.to_string()).unwrap();
    path
}

fn sample_entries() -> serde_json::Value {
    json!([
        {
            "name": "BenchmarkMatchesHookMessage", "category": "matching",
            "old_ns_per_op": 812.0, "new_ns_per_op": 701.5, "ns_per_op_change_pct": -13.6,
            "old_bytes_per_op": 320, "new_bytes_per_op": 288,
            "old_allocs_per_op": 6, "new_allocs_per_op": 5
        },
        {
            "name": "BenchmarkSaveAlert", "category": "storage",
            "old_ns_per_op": 15230.0, "new_ns_per_op": 15900.0, "ns_per_op_change_pct": 4.4,
            "old_bytes_per_op": 4096, "new_bytes_per_op": 4096,
            "old_allocs_per_op": 31, "new_allocs_per_op": 31
        },
        {
            "name": "BenchmarkGetAlerts", "category": "storage",
            "old_ns_per_op": 98000.0, "new_ns_per_op": 97500.0, "ns_per_op_change_pct": -0.5,
            "old_bytes_per_op": 65536, "new_bytes_per_op": 60000,
            "old_allocs_per_op": 210, "new_allocs_per_op": 198
        }
    ])
}

#[test]
fn test_cli_without_arguments_prints_usage() {
    benchplot()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("go run hack/benchanalyze/main.go"));
}

#[test]
fn test_cli_help_mentions_generator() {
    benchplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchanalyze"));
}

#[test]
fn test_cli_empty_entries_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(dir.path(), json!([]));

    benchplot()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No benchmark entries found"));

    assert!(!dir.path().join("charts").exists());
}

#[test]
fn test_cli_missing_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    benchplot()
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("report not found"));
    assert!(!dir.path().join("charts").exists());
}

#[test]
fn test_cli_malformed_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.json");
    fs::write(&path, r#"{"old_label": "a", "entries": []}"#).unwrap();

    benchplot()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed report"));
    assert!(!dir.path().join("charts").exists());
}

#[test]
fn test_cli_renders_charts_and_summary() {
    if let Err(err) = check_font_support() {
        eprintln!("skipping: {err}");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(dir.path(), sample_entries());

    let assert = benchplot().arg(&path).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert_eq!(stdout.matches("Saved: ").count(), 4, "{stdout}");
    assert!(stdout.contains("All charts saved to:"), "{stdout}");
    assert!(stdout.contains("go-1.26 wins:"), "{stdout}");
    assert!(stdout.contains("-4.25%"), "{stdout}");

    let charts = dir.path().join("charts");
    for name in CHARTS {
        let meta = fs::metadata(charts.join(name)).unwrap();
        assert!(meta.len() > 0, "{name} is empty");
    }
}

#[test]
fn test_cli_output_dir_override() {
    if check_font_support().is_err() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(dir.path(), sample_entries());
    let out = dir.path().join("elsewhere");

    benchplot()
        .arg(&path)
        .args(["--output-dir", out.to_str().unwrap(), "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries in 2 categories"))
        .stdout(predicate::str::contains("Rendering percent change"));

    assert!(CHARTS.iter().all(|name| out.join(name).is_file()));
    assert!(!dir.path().join("charts").exists());
}
