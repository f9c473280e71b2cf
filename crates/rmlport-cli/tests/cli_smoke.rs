use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture_suite() -> PathBuf {
    let dir = repo_root().join("fixtures").join("xhtml1");
    assert!(dir.is_dir(), "fixtures missing: {}", dir.display());
    dir
}

#[test]
fn cli_converts_fixture_suite() {
    let input = fixture_suite();
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    let assert = Command::new(exe)
        .env("RUST_LOG", "warn")
        .args([
            input.to_string_lossy().as_ref(),
            tmp.path().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(
        stdout,
        "Done!\n\n\
         Total test files: 6\n\
         Skipped test files: 3\n\
         Parsed test files: 3\n\n\
         Total reference files: 2\n\
         Skipped reference files: 0\n\
         Ignored alternate references: 1\n\
         Parsed reference files: 2\n"
    );

    let converted = fs::read_to_string(tmp.path().join("margin-collapse-001.rml")).expect("read rml");
    assert!(converted.starts_with("<rml>\n"));
    assert!(
        tmp.path()
            .join("reference")
            .join("margin-collapse-001-ref.rml")
            .is_file()
    );
}

#[test]
fn cli_prints_json_summary_with_match_filter() {
    let input = fixture_suite();
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    let assert = Command::new(exe)
        .env("RUST_LOG", "off")
        .args([
            "--json",
            "--match",
            "box-edge",
            "--stylesheet",
            "/style.rcss",
            input.to_string_lossy().as_ref(),
            tmp.path().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let summary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json summary");
    assert_eq!(summary["tests"]["total"], 1);
    assert_eq!(summary["tests"]["parsed"], 1);
    assert_eq!(summary["references"]["parsed"], 1);

    let converted = fs::read_to_string(tmp.path().join("box-edge-001.rml")).expect("read rml");
    assert!(converted.contains(r#"<link type="text/rcss" href="/style.rcss" />"#));
}

#[test]
fn cli_clean_removes_stale_outputs() {
    let input = fixture_suite();
    let tmp = tempfile::tempdir().expect("tempdir");
    let stale = tmp.path().join("stale-001.rml");
    fs::write(&stale, "<rml></rml>").expect("write stale");

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    Command::new(exe)
        .env("RUST_LOG", "off")
        .args([
            "--clean",
            "--match",
            "logical",
            input.to_string_lossy().as_ref(),
            tmp.path().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    assert!(!stale.exists());
    assert!(tmp.path().join("logical-flow-001.rml").is_file());
}

#[test]
fn cli_usage_errors_exit_with_2() {
    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    Command::new(exe).args(["only-one-dir"]).assert().code(2);

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    Command::new(exe).args(["--bogus", "a", "b"]).assert().code(2);

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    Command::new(exe).args(["a", "b", "--match"]).assert().code(2);
}

#[test]
fn cli_missing_input_dir_exits_with_1() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("missing");

    let exe = assert_cmd::cargo_bin!("rmlport-cli");
    let assert = Command::new(exe)
        .env("RUST_LOG", "off")
        .args([
            missing.to_string_lossy().as_ref(),
            tmp.path().join("out").to_string_lossy().as_ref(),
        ])
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("input directory does not exist"), "{stderr}");
    assert!(!tmp.path().join("out").exists());
}
