//! Integration tests for mkpost-cli.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mkpost() -> Command {
    Command::cargo_bin("mkpost").unwrap()
}

/// The only file in `dir`, panicking when the directory is not a singleton.
fn single_file(dir: &Path) -> PathBuf {
    let entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one file in {dir:?}");
    entries.into_iter().next().unwrap()
}

/// Today as `YYYY-MM-DD`, sampled before and after the command so a midnight
/// rollover mid-test cannot produce a false failure.
fn date_candidates<T>(run: impl FnOnce() -> T) -> (T, Vec<String>) {
    let before = chrono::Local::now().date_naive().to_string();
    let result = run();
    let after = chrono::Local::now().date_naive().to_string();
    let mut candidates = vec![before];
    if !candidates.contains(&after) {
        candidates.push(after);
    }
    (result, candidates)
}

#[test]
fn help_shows_title_and_dir() {
    mkpost()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TITLE"))
        .stdout(predicate::str::contains("--dir"));
}

#[test]
fn version_flag_prints_package_version() {
    mkpost()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    mkpost().assert().failure().code(2);
}

#[test]
fn creates_post_with_expected_name_and_content() {
    let temp = TempDir::new().unwrap();

    let (_, dates) = date_candidates(|| {
        mkpost()
            .args(["hello world", "--dir"])
            .arg(temp.path())
            .assert()
            .success();
    });

    let post = single_file(temp.path());
    let name = post.file_name().unwrap().to_str().unwrap();
    let date = dates
        .iter()
        .find(|d| name == format!("{d}_hello-world.md"))
        .unwrap_or_else(|| panic!("unexpected file name: {name}"));

    let content = fs::read_to_string(&post).unwrap();
    assert_eq!(
        content,
        format!("Title: Hello World\nDate: {date}\nTags: Python, Pelican\nSlug: hello-world\n\nText here\n\n")
    );
}

#[test]
fn slug_collapses_whitespace_and_punctuation() {
    let temp = TempDir::new().unwrap();

    mkpost()
        .args(["  PYTHON   tips & tricks!!", "--dir"])
        .arg(temp.path())
        .assert()
        .success();

    let post = single_file(temp.path());
    let name = post.file_name().unwrap().to_str().unwrap();
    assert!(
        name.ends_with("_python-tips-tricks.md"),
        "unexpected file name: {name}"
    );
}

#[test]
fn second_run_same_title_fails_and_preserves_file() {
    let temp = TempDir::new().unwrap();

    mkpost()
        .args(["hello world", "-d"])
        .arg(temp.path())
        .assert()
        .success();

    let post = single_file(temp.path());
    let original = fs::read_to_string(&post).unwrap();

    mkpost()
        .args(["hello world", "-d"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("hello-world.md"));

    // Byte-for-byte unmodified.
    assert_eq!(fs::read_to_string(&post).unwrap(), original);
}

#[test]
fn missing_directory_fails_with_configuration_exit_code() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-dir");

    mkpost()
        .arg("hello world")
        .arg("--dir")
        .arg(&missing)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("is not a directory"))
        .stderr(predicate::str::contains("no-such-dir"));

    assert!(!missing.exists(), "failure must not create the directory");
}

#[test]
fn file_as_directory_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a-file");
    fs::write(&file, "").unwrap();

    mkpost()
        .arg("hello world")
        .arg("--dir")
        .arg(&file)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn default_directory_comes_from_configured_content_root() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("content")).unwrap();

    mkpost()
        .current_dir(temp.path())
        .arg("hello world")
        .assert()
        .success();

    let post = single_file(&temp.path().join("content"));
    assert!(
        post.file_name().unwrap().to_str().unwrap().ends_with("_hello-world.md")
    );
}

#[test]
fn quiet_run_prints_nothing_on_stdout() {
    let temp = TempDir::new().unwrap();

    mkpost()
        .args(["-q", "hello world", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_overrides_tags_and_extension() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("mkpost.toml");
    fs::write(
        &config,
        "[scaffold]\ndefault_tags = [\"Rust\", \"Blog\"]\nextension = \"markdown\"\n",
    )
    .unwrap();
    let posts = temp.path().join("posts");
    fs::create_dir(&posts).unwrap();

    mkpost()
        .arg("hello world")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(&posts)
        .assert()
        .success();

    let post = single_file(&posts);
    assert!(post.extension().is_some_and(|e| e == "markdown"));
    let content = fs::read_to_string(&post).unwrap();
    assert!(content.contains("Tags: Rust, Blog"));
}

#[test]
fn missing_explicit_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    mkpost()
        .arg("hello world")
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
