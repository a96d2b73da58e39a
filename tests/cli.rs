use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// The store lives in the working directory, so every test gets its own
// temp dir to keep the databases isolated.
fn command_in_temp_dir(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cmdex").expect("binary exists");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn no_args_shows_help() {
    let dir = TempDir::new().expect("create temp dir");
    command_in_temp_dir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn save_then_list_round_trips() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "g", "git", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command saved with alias: g"));

    command_in_temp_dir(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("g: git status"));
}

#[test]
fn save_overwrites_existing_alias() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "g", "echo", "X"])
        .assert()
        .success();
    command_in_temp_dir(&dir)
        .args(["save", "g", "echo", "Y"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("g: echo Y"))
        .stdout(predicate::str::contains("echo X").not());
}

#[test]
fn edit_missing_alias_reports_not_found() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["edit", "nope", "echo", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error editing command: alias not found",
        ));

    // The failed edit must not have created the alias.
    command_in_temp_dir(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("nope").not());
}

#[test]
fn edit_existing_alias_overwrites() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "g", "echo", "old"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .args(["edit", "g", "echo", "new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command updated for alias: g"));

    command_in_temp_dir(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("g: echo new"));
}

#[test]
fn run_substitutes_placeholders() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "say", "echo", "$1", "$2"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .args(["run", "say", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn run_leaves_missing_placeholders_untouched() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "say", "echo", "$1", "$2"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .args(["run", "say", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a $2"));
}

#[test]
fn run_unknown_alias_exits_zero() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["run", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error retrieving command: alias not found",
        ));
}

#[test]
fn run_failing_command_exits_zero() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "bad", "false"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .args(["run", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error executing command:"));
}

#[test]
fn bare_alias_invocation_runs_it() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "greet", "echo", "hi", "$1"])
        .assert()
        .success();

    command_in_temp_dir(&dir)
        .args(["greet", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there"));
}

#[test]
fn save_without_command_is_a_usage_error() {
    let dir = TempDir::new().expect("create temp dir");

    command_in_temp_dir(&dir)
        .args(["save", "g"])
        .assert()
        .failure();
}

#[test]
fn store_flag_overrides_database_location() {
    let dir = TempDir::new().expect("create temp dir");
    let store_path = dir.path().join("custom.db");
    let store_arg = store_path.to_str().expect("utf-8 path").to_string();

    command_in_temp_dir(&dir)
        .args(["--store", &store_arg, "save", "g", "git", "status"])
        .assert()
        .success();

    assert!(store_path.exists());

    command_in_temp_dir(&dir)
        .args(["--store", &store_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g: git status"));
}
