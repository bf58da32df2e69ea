mod common;

use common::{rw, rw_home};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_help_lists_options_and_commands() {
    rw().arg("--help")
        .assert()
        .success()
        .stdout(contains("--project"))
        .stdout(contains("--log-dir"))
        .stdout(contains("init"))
        .stdout(contains("config"))
        .stdout(contains("tick-ms").not());
}

#[test]
fn test_version() {
    rw().arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_writes_default_config() {
    let home = tempfile::tempdir().unwrap();

    rw_home(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("rworklog.conf"));

    let conf = fs::read_to_string(home.path().join(".rworklog").join("rworklog.conf")).unwrap();
    assert!(conf.contains("log_dir:"));
    assert!(conf.contains("~/Desktop/rohan/league-rohan"));
    assert!(conf.contains("default_project: League"));
    assert!(conf.contains("tick_millis: 1000"));
}

#[test]
fn test_init_keeps_existing_config_unless_forced() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".rworklog");
    fs::create_dir_all(&dir).unwrap();
    let conf = dir.join("rworklog.conf");
    fs::write(&conf, "default_project: Custom\n").unwrap();

    rw_home(home.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&conf).unwrap(), "default_project: Custom\n");

    rw_home(home.path()).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(&conf).unwrap().contains("default_project: League"));
}

#[test]
fn test_config_print_merges_defaults_and_overrides() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".rworklog");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("rworklog.conf"), "default_project: Custom\n").unwrap();

    rw_home(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_project: Custom"))
        .stdout(contains("tick_millis: 1000"));

    rw_home(home.path())
        .args(["--log-dir", "/tmp/elsewhere", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("log_dir:").and(contains("/tmp/elsewhere")));
}

#[test]
fn test_config_without_flags_warns() {
    let home = tempfile::tempdir().unwrap();

    rw_home(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_tracking_requires_a_terminal() {
    let home = tempfile::tempdir().unwrap();

    rw_home(home.path())
        .args(["--project", "League"])
        .write_stdin("q\nDesign\nyes\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("interactive terminal"));

    assert!(!home.path().join("Desktop").exists());
}
