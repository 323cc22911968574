#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run from an empty directory with no user config or env overrides.
fn templar_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("templar"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env_remove("TEMPLAR_CHANNEL")
        .env_remove("TEMPLAR_INDENT")
        .env_remove("TEMPLAR_REQUIRE_RECORDS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_project_api_compact() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project", "--channel", "api", "--indent", "0"])
        .assert()
        .success()
        .stdout(
            r#"{"compute":{"instance_type":"c24.xlarge","instance_count":6},"application":{}}
"#,
        );
}

#[test]
fn test_project_ui_compact() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project", "--channel", "UI_VISIBLE", "--indent", "0"])
        .assert()
        .success()
        .stdout(
            r#"{"compute":{"instance_type":"c24.xlarge"},"application":{"version":"2023.6","precision":"DOUBLE"}}
"#,
        );
}

#[test]
fn test_project_never_prints_secrets() {
    let temp = TempDir::new().unwrap();
    for channel in ["api", "ui"] {
        templar_cmd(&temp)
            .args(["project", "--channel", channel])
            .assert()
            .success()
            .stdout(predicate::str::contains("You should not see me!").not());
    }
}

#[test]
fn test_project_default_indent_is_four() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n    \"compute\": {\n        \"instance_type\""));
}

#[test]
fn test_project_invalid_channel_fails_without_output() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project", "--channel", "mobile"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid channel: mobile"));
}

#[test]
fn test_project_with_override_and_only() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args([
            "project",
            "--indent",
            "0",
            "--set",
            "compute.instance_count=12",
            "--only",
            "compute",
        ])
        .assert()
        .success()
        .stdout("{\"compute\":{\"instance_type\":\"c24.xlarge\",\"instance_count\":12}}\n");
}

#[test]
fn test_project_unknown_field_override_fails() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project", "--set", "compute.region=eu-west-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field `region`"));
}

#[test]
fn test_config_file_sets_channel_and_indent() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("templar.toml"),
        "channel = \"ui\"\nindent = 0\n",
    )
    .unwrap();

    templar_cmd(&temp)
        .args(["project", "--only", "application"])
        .assert()
        .success()
        .stdout("{\"application\":{\"version\":\"2023.6\",\"precision\":\"DOUBLE\"}}\n");
}

#[test]
fn test_env_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("templar.toml"), "channel = \"ui\"\n").unwrap();

    templar_cmd(&temp)
        .env("TEMPLAR_CHANNEL", "api")
        .env("TEMPLAR_INDENT", "0")
        .args(["project", "--only", "application"])
        .assert()
        .success()
        .stdout("{\"application\":{}}\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["--config", "nope.toml", "channels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_naked_run_prints_demo() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Instantiate templates with template attributes"))
        .stdout(predicate::str::contains("API Visible"))
        .stdout(predicate::str::contains("UI Visible"))
        .stdout(predicate::str::contains("\"application\": {}"));
}

#[test]
fn test_show_prints_every_field() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"compute(instance_type="c24.xlarge", instance_count=6, instance_secret="You should not see me!")"#,
        ));
}

#[test]
fn test_schema_for_one_template() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["schema", "--template", "application"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"application\""))
        .stdout(predicate::str::contains("\"compute\"").not());
}

#[test]
fn test_schema_unknown_template() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["schema", "--template", "storage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown template `storage`"));
}

#[test]
fn test_channels_lists_registry() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .arg("channels")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_visible"))
        .stdout(predicate::str::contains("ui_visible"));
}

#[test]
fn test_empty_selection_projects_to_empty_object() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args(["project", "--skip", "compute", "--skip", "application"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_strict_empty_selection_fails() {
    let temp = TempDir::new().unwrap();
    templar_cmd(&temp)
        .args([
            "project",
            "--strict",
            "--skip",
            "compute",
            "--skip",
            "application",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No records to project"));
}
