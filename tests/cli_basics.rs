use assert_cmd::cargo; // handy crate for testing CLIs
use predicates::prelude::*;

fn releasebot(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.env("HOME", home)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RELEASEBOT_MODEL")
        .env_remove("RELEASEBOT_PROMPT_FILE");
    cmd
}

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"))
        .stdout(predicates::str::contains("--since"))
        .stdout(predicates::str::contains("--until"))
        .stdout(predicates::str::contains("--output"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_arguments_print_usage() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("notes.md");

    releasebot(home.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["--since", "2024-01-01", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicates::str::contains("--until"))
        .stderr(predicates::str::contains("Usage"));

    assert!(!out.exists());
}

#[test]
fn missing_credential_fails_before_any_work() {
    let home = tempfile::tempdir().unwrap();
    // Not a repository: if git ran, the failure would mention it.
    let out = home.path().join("notes.md");

    releasebot(home.path())
        .current_dir(home.path())
        .args(["--since", "2024-01-01", "--until", "2024-01-31", "--output"])
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("OPENAI_API_KEY"))
        .stderr(predicates::str::contains("git").not())
        .stdout(predicates::str::contains("Fetching").not());

    assert!(!out.exists());
}
