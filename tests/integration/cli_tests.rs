//! CLI integration tests
//!
//! These tests run the deadphp binary against temp-directory corpora and
//! check exit codes and report text.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn deadphp() -> Command {
    let mut cmd = Command::cargo_bin("deadphp").expect("binary builds");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_corpus(root: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

#[test]
fn test_cli_help() {
    deadphp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadphp"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--parallel"));
}

#[test]
fn test_cli_version() {
    deadphp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadphp"));
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    deadphp()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("usage")));
}

#[test]
fn test_nonexistent_directory_fails_before_scanning() {
    deadphp()
        .arg("/definitely/not/a/real/directory")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a readable directory"));
}

#[test]
fn test_file_argument_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("single.php");
    fs::write(&file, "<?php function foo() {}").unwrap();

    deadphp().arg(&file).assert().failure();
}

#[test]
fn test_empty_corpus_reports_no_files() {
    let dir = tempfile::tempdir().unwrap();

    deadphp()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No PHP files found."));
}

#[test]
fn test_unused_function_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("lib.php", "<?php\nfunction used()\n{\n}\nfunction orphan()\n{\n}\n"),
            ("main.php", "<?php\nused();\n"),
        ],
    );

    deadphp()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("'orphan' in"))
        .stdout(predicate::str::contains("on line 5"))
        .stdout(predicate::str::contains("Found 1 unused function."))
        .stdout(predicate::str::contains("'used'").not());
}

#[test]
fn test_plural_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[("lib.php", "<?php\nfunction one()\n{\n}\nfunction two()\n{\n}\n")],
    );

    deadphp()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 unused functions."));
}

#[test]
fn test_zero_unused_still_prints_summary_tail() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("lib.php", "<?php\nfunction helper()\n{\n}\n"),
            ("main.php", "<?php\nhelper();\n"),
        ],
    );

    deadphp()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused functions found."))
        .stdout(predicate::str::contains("Found 0 unused functions."));
}

#[test]
fn test_parallel_flag_produces_same_report() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("a.php", "<?php\nfunction dead()\n{\n}\nfunction live()\n{\n}\n"),
            ("b.php", "<?php\nlive();\n"),
        ],
    );

    deadphp()
        .arg(dir.path())
        .args(["--parallel", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'dead' in"))
        .stdout(predicate::str::contains("Found 1 unused function."));
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[("lib.php", "<?php\nfunction orphan()\n{\n}\n")],
    );

    let output = deadphp()
        .arg(dir.path())
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_unused"], 1);
    assert_eq!(json["functions"][0]["name"], "orphan");
    assert_eq!(json["functions"][0]["declarations"][0]["line"], 2);
}

#[test]
fn test_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[("lib.php", "<?php\nfunction orphan()\n{\n}\n")],
    );
    let report_path = dir.path().join("report.json");

    deadphp()
        .arg(dir.path())
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let contents = fs::read_to_string(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["total_unused"], 1);
}
