use std::process::{Command, Output};
use temptree::temptree;

fn pathcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathcheck"))
        .args(args)
        .env_remove("PATHCHECK_KIND")
        .env_remove("PATHCHECK_LOG")
        .output()
        .expect("failed to run pathcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn check_prints_existing_path() {
    let tree = temptree! {
        "file": "",
    };
    let file = tree.path().join("file");
    let output = pathcheck(&["check", file.to_str().unwrap(), "--kind", "file"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), file.to_str().unwrap());
}

#[test]
fn check_fails_on_wrong_kind() {
    let tree = temptree! {
        "file": "",
    };
    let file = tree.path().join("file");
    let output = pathcheck(&["check", file.to_str().unwrap(), "--kind", "dir"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a directory"));
}

#[test]
fn check_rejects_unknown_kind() {
    let output = pathcheck(&["check", "/", "--kind", "socket"]);
    assert!(!output.status.success());
}

#[test]
fn check_defaults_to_any() {
    let tree = temptree! {
        dir: {},
    };
    let dir = tree.path().join("dir");
    let output = pathcheck(&["check", dir.to_str().unwrap()]);
    assert!(output.status.success());

    let missing = tree.path().join("missing");
    let output = pathcheck(&["check", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn sanitize_prints_one_line_per_input() {
    let output = pathcheck(&["sanitize", "5678^()^", "my file.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5678____\nmy_file.txt\n");
}
