
use fixtures::{docnav_in, run_docnav_in, FixtureBuilder};
use predicates::prelude::*;

#[test]
fn test_implicit_config_file_is_used() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("site/API/index.md")
        .file(
            "docnav.toml",
            "[nav]\nroot = \"site/API\"\nindent = 2\nmargin = 0\n",
        )
        .build();

    let (output, _, success) = run_docnav_in(&dir, Vec::<String>::new());
    assert!(success);
    assert_eq!(output, "- Api:\n  - index:  site/API/index.md\n");
}

#[test]
fn test_cli_flags_override_config() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .file("docnav.toml", "[nav]\nindent = 2\nmargin = 0\n")
        .build();

    let (output, _, success) = run_docnav_in(&dir, ["--indent", "4"]);
    assert!(success);
    assert_eq!(output, "- Api:\n    - index:  API/index.md\n");
}

#[test]
fn test_no_config_ignores_file() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .file("docnav.toml", "[nav]\nmargin = 0\n")
        .build();

    let (output, _, success) = run_docnav_in(&dir, ["--no-config"]);
    assert!(success);
    assert_eq!(output, "  - Api:\n      - index:  API/index.md\n");
}

#[test]
fn test_explicit_config_path() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .doc("API/drafts/wip.md")
        .file(
            "conf/nav.toml",
            "[nav]\nexclude = [\"drafts\"]\noutput = \"markdown\"\n",
        )
        .build();

    let (output, _, success) = run_docnav_in(&dir, ["--config", "conf/nav.toml"]);
    assert!(success);
    assert_eq!(output, "- Api\n  - [index](API/index.md)\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let (_tmp, dir) = FixtureBuilder::new().doc("API/index.md").build();

    docnav_in(&dir)
        .args(["--config", "missing.toml"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Config error").and(predicate::str::contains("missing.toml")));
}

#[test]
fn test_bad_config_value_fails() {
    let (_tmp, dir) = FixtureBuilder::new()
        .doc("API/index.md")
        .file("docnav.toml", "[nav]\nindent = \"wide\"\n")
        .build();

    docnav_in(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nav.indent"));
}
