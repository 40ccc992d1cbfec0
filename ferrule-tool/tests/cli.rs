//! End-to-end tests for the ferrule binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ferrule(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ferrule").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("FERRULE_CONFIG")
        .env_remove("FERRULE_VERBOSE")
        .arg("--no-color");
    cmd
}

#[test]
fn hash_prints_keyword_and_symbol_codes() {
    let dir = TempDir::new().unwrap();
    ferrule(&dir)
        .args(["hash", ":cljs.core/none", "form", "&"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":cljs.core/none"))
        .stdout(predicate::str::contains("926646439"))
        .stdout(predicate::str::contains("16469056"))
        .stdout(predicate::str::contains("-2144855648"));
}

#[test]
fn hash_json_output() {
    let dir = TempDir::new().unwrap();
    let output = ferrule(&dir)
        .args(["hash", "--format", "json", ":ok", "a/b"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["kind"], "keyword");
    assert_eq!(reports[0]["hash"], 967785236);
    assert_eq!(reports[1]["kind"], "symbol");
    assert_eq!(reports[1]["namespace"], "a");
    assert_eq!(reports[1]["name"], "b");
    assert_eq!(reports[1]["hash"], -1172211204);
}

#[test]
fn hash_rejects_empty_keyword() {
    let dir = TempDir::new().unwrap();
    ferrule(&dir)
        .args(["hash", ":"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn config_file_sets_default_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ferrule.toml"), "format = \"json\"\n").unwrap();

    ferrule(&dir)
        .args(["hash", "tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hash\": 350170304"));
}

#[test]
fn config_file_verbose_enables_debug_logging() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ferrule.toml"), "verbose = true\n").unwrap();

    ferrule(&dir)
        .args(["hash", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("preloaded 40 core keywords"));
}

#[test]
fn debug_logging_is_off_by_default() {
    let dir = TempDir::new().unwrap();
    ferrule(&dir)
        .args(["hash", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn invalid_runtime_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[runtime]\nnamespace_hash_cache_limit = 0\n").unwrap();

    ferrule(&dir)
        .arg("--config")
        .arg(&path)
        .args(["hash", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("namespace_hash_cache_limit"));
}

#[test]
fn verify_builtin_constants() {
    let dir = TempDir::new().unwrap();
    ferrule(&dir)
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("172 constants verified"));
}

#[test]
fn verify_manifest_reports_mismatch() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("constants.toml");
    std::fs::write(
        &manifest,
        r#"
[[constant]]
kind = "keyword"
name = "ready"
hash = 1086465795

[[constant]]
kind = "symbol"
name = "tag"
hash = 42
"#,
    )
    .unwrap();

    ferrule(&dir)
        .arg("verify")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("expected 42 computed 350170304"))
        .stderr(predicate::str::contains("1 of 2 hash codes did not match"));
}

#[test]
fn verify_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    ferrule(&dir)
        .args(["verify", "missing.toml"])
        .assert()
        .failure();
}
