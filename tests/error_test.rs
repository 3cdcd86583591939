
use fixtures::{docnav_in, FixtureBuilder};
use predicates::prelude::*;

#[test]
fn test_missing_root_fails() {
    let (_tmp, dir) = FixtureBuilder::new().build();

    docnav_in(&dir)
        .arg("--no-config")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("docnav: IO error"));
}

#[test]
fn test_root_that_is_a_file_fails() {
    let (_tmp, dir) = FixtureBuilder::new().doc("API.md").build();

    docnav_in(&dir)
        .args(["API.md", "--no-config"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Not a directory: API.md"));
}

#[test]
fn test_invalid_exclude_pattern_fails() {
    let (_tmp, dir) = FixtureBuilder::new().doc("API/index.md").build();

    docnav_in(&dir)
        .args(["--no-config", "--exclude", "docs/[abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_skipped() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .doc("API/locked/secret.md")
        .build();
    let locked = dir.join("API/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Running as root bypasses permission checks; nothing to observe then
    let readable = fs::read_dir(&locked).is_ok();

    let assert = docnav_in(&dir).arg("--no-config").assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(output.contains("- index:  API/index.md\n"));
    if !readable {
        assert_eq!(output, "  - Api:\n      - index:  API/index.md\n");
        assert!(!output.contains("Locked"));
        assert!(stderr.contains("Skipping unreadable directory"));
    }
}

#[test]
fn test_out_of_range_layout_flags_fail() {
    let (_tmp, dir) = FixtureBuilder::new().doc("API/index.md").build();

    docnav_in(&dir)
        .args(["--no-config", "--indent", "18446744073709551615"])
        .assert()
        .failure()
        .stdout("");

    docnav_in(&dir)
        .args(["--no-config", "--margin", "100000"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_out_of_range_config_indent_fails() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .file("docnav.toml", "[nav]\nindent = 100000\n")
        .build();

    docnav_in(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("nav.indent must be an integer from 1 to 16"));
}
