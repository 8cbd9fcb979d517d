use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn togo(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("togo").unwrap();
    cmd.env("TOGO_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--file")
        .arg(home.join("todo.txt"));
    cmd
}

#[test]
fn missing_todo_file_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();

    togo(dir.path())
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("togo init"));
}

#[test]
fn task_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let todo = dir.path().join("todo.txt");

    togo(dir.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&todo).unwrap(), "");

    togo(dir.path())
        .args(["add", "call", "mom", "+family", "@phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("call mom +family @phone"));
    togo(dir.path())
        .args(["a", "buy", "milk"])
        .assert()
        .success();

    togo(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1  [ ] call mom"))
        .stdout(predicate::str::contains("2  [ ] buy milk"))
        .stdout(predicate::str::contains("2/2 todos shown"));

    togo(dir.path())
        .args(["ls", "@phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk").not())
        .stdout(predicate::str::contains("1/2 todos shown"));

    togo(dir.path()).args(["do", "2"]).assert().success();
    assert_eq!(
        fs::read_to_string(&todo).unwrap(),
        "call mom +family @phone\nx buy milk\n"
    );

    togo(dir.path())
        .arg("archive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived 1 todo"));
    assert_eq!(
        fs::read_to_string(&todo).unwrap(),
        "call mom +family @phone\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("done.txt")).unwrap(),
        "x buy milk\n"
    );

    togo(dir.path())
        .args(["ls", "--done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] buy milk"));

    togo(dir.path()).args(["rm", "1"]).assert().success();
    assert_eq!(fs::read_to_string(&todo).unwrap(), "");
}

#[test]
fn completing_unknown_position_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("todo.txt"), "only one\n").unwrap();

    togo(dir.path())
        .args(["do", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-existing todo number: 5"));
}

#[test]
fn removing_unknown_position_warns_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("todo.txt"), "only one\n").unwrap();

    togo(dir.path())
        .args(["rm", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
    assert_eq!(
        fs::read_to_string(dir.path().join("todo.txt")).unwrap(),
        "only one\n"
    );
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();

    togo(dir.path())
        .args(["config", "priority", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("priority set to true"));
    assert!(dir.path().join("config.json").exists());

    togo(dir.path())
        .args(["config", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    togo(dir.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure();
}

#[test]
fn priority_is_shown_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("todo.txt"), "(A) urgent thing\n").unwrap();

    togo(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] (A) urgent thing"));

    togo(dir.path())
        .args(["config", "priority", "true"])
        .assert()
        .success();

    togo(dir.path())
        .args(["do", "1"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("todo.txt")).unwrap(),
        "x (A) urgent thing\n"
    );
}
