//! Integration tests for the `plan` and `version` commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a package with one target holding two sources
fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let app = temp_dir.path().join("Sources/App");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("A.swift"), "struct A {}\n").unwrap();
    fs::write(app.join("B.swift"), "struct B {}\n").unwrap();
    fs::write(app.join("notes.txt"), "ignored\n").unwrap();
    temp_dir
}

/// Helper to create a lintstep command in a directory
fn lintstep_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lintstep").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    lintstep_in(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintstep v"));
}

#[test]
fn test_plan_json_argument_vector() {
    let project = setup_project();
    let root = project.path();

    let output = lintstep_in(root)
        .args(["--json", "plan", "--target-name", "App", "--tool-path", "/usr/bin/swiftlint"])
        .arg("--project-dir")
        .arg(root)
        .arg("--work-dir")
        .arg(root.join("work"))
        .arg("--target-dir")
        .arg(root.join("Sources/App"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["target"], "App");
    assert_eq!(json["files"], 2);

    let step = &json["steps"][0];
    assert_eq!(step["display_name"], "SwiftLint");
    assert_eq!(step["executable"], "/usr/bin/swiftlint");
    let args: Vec<&str> =
        step["arguments"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(&args[..4], &["lint", "--quiet", "--force-exclude", "--cache-path"]);
    assert!(args[4].ends_with("Cache"));
    assert!(args[5].ends_with("A.swift"));
    assert!(args[6].ends_with("B.swift"));
    assert_eq!(args.len(), 7);
    assert_eq!(
        step["environment"]["BUILD_WORKSPACE_DIRECTORY"],
        root.display().to_string()
    );

    assert!(root.join("work/Cache").is_dir());
    assert!(root.join("work/Output").is_dir());
}

#[test]
fn test_plan_project_inputs() {
    let project = setup_project();
    let root = project.path();

    lintstep_in(root)
        .args(["plan", "--tool-path", "/usr/bin/swiftlint", "--work-dir", "work"])
        .args(["--input", "Sources/App/A.swift", "--input", "Sources/App/notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SwiftLint"))
        .stdout(predicate::str::contains("Sources/App/A.swift"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_plan_without_sources() {
    let project = setup_project();
    let root = project.path();

    lintstep_in(root)
        .args(["plan", "--target-name", "Docs", "--work-dir", "work"])
        .args(["--tool-path", "/usr/bin/swiftlint", "--input", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to lint"));

    assert!(!root.join("work").exists());
}

#[test]
fn test_plan_without_sources_still_needs_tool() {
    let project = setup_project();
    let root = project.path();
    fs::write(root.join(".lintstep.toml"), "tool_name = \"lintstep-no-such-linter-7f3a\"\n")
        .unwrap();

    lintstep_in(root)
        .args(["plan", "--target-name", "Docs", "--work-dir", "work"])
        .args(["--input", "README.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lintstep-no-such-linter-7f3a"));

    assert!(!root.join("work").exists());
}

#[test]
fn test_plan_relative_arguments_are_made_absolute() {
    let project = setup_project();
    let root = project.path();

    let output = lintstep_in(root)
        .args(["--json", "plan", "--tool-path", "/usr/bin/swiftlint"])
        .args(["--project-dir", ".", "--work-dir", "work"])
        .args(["--input", "Sources/App/A.swift"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let step = &json["steps"][0];

    let workspace = step["environment"]["BUILD_WORKSPACE_DIRECTORY"].as_str().unwrap();
    assert!(Path::new(workspace).is_absolute());
    assert_ne!(workspace, ".");

    let args: Vec<&str> =
        step["arguments"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert!(Path::new(args[4]).is_absolute());
    assert!(args[4].ends_with("work/Cache"));
    assert!(Path::new(args[5]).is_absolute());
    assert!(args[5].ends_with("Sources/App/A.swift"));
    assert!(Path::new(step["output_directory"].as_str().unwrap()).is_absolute());
}

#[test]
fn test_plan_uses_project_config() {
    let project = setup_project();
    let root = project.path();
    fs::write(root.join(".lintstep.toml"), "display_name = \"Style Check\"\n").unwrap();

    lintstep_in(root)
        .args(["plan", "--tool-path", "/usr/bin/swiftlint", "--work-dir", "work"])
        .args(["--target-dir", "Sources/App"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Style Check"));
}

#[test]
fn test_plan_target_without_sources() {
    let temp = TempDir::new().unwrap();

    lintstep_in(temp.path())
        .args(["plan", "--tool-path", "/usr/bin/swiftlint", "--work-dir", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to lint"));

    assert!(!temp.path().join("work").exists());
}

#[test]
fn test_plan_rejects_both_target_kinds() {
    let temp = TempDir::new().unwrap();

    lintstep_in(temp.path())
        .args(["plan", "--work-dir", "work", "--target-dir", "Sources", "--input", "A.swift"])
        .assert()
        .failure();
}

#[test]
fn test_plan_fails_when_scratch_is_blocked() {
    let project = setup_project();
    let root = project.path();
    fs::write(root.join("work"), "file").unwrap();

    lintstep_in(root)
        .args(["plan", "--tool-path", "/usr/bin/swiftlint", "--work-dir", "work"])
        .args(["--target-dir", "Sources/App"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create scratch directory"));
}
