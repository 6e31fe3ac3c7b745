use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

const SCRIPT: &str = r#"
[[step]]
action = "set-channel"
channel = "red"
value = 1.0

[[step]]
action = "drag"
points = [[10.0, 10.0], [20.0, 10.0], [30.0, 10.0]]

[[step]]
action = "export"
"#;

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand color drawing canvas with PNG export",
        ));
}

#[test]
fn version_flag_prints_package_version() {
    sketchpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage() {
    sketchpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchpad --script <FILE>"));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script"])
        .arg(temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn script_replay_exports_png() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("script.toml");
    std::fs::write(&script_path, SCRIPT).unwrap();
    let output_dir = temp.path().join("out");

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script_path)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved "));

    let files: Vec<_> = std::fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("drawing_") && files[0].ends_with(".png"));
}

#[test]
fn unwritable_output_dir_reports_failure() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("script.toml");
    std::fs::write(&script_path, SCRIPT).unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script_path)
        .arg("--output-dir")
        .arg(blocker.join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 1 exports failed"));
}
