//! Common test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn get_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_specs-overview"))
}

/// Run specs-overview in `dir` with an empty config file and a fixed HOME.
pub fn run_overview(dir: &Path, home: &Path, args: &[&str]) -> Output {
    let config = home.join("overview-config.md");
    if !config.exists() {
        fs::write(&config, "---\n---\n").expect("Failed to write config");
    }

    Command::new(get_binary())
        .args(args)
        .current_dir(dir)
        .env("HOME", home)
        .env("SPECS_OVERVIEW_CONFIG", &config)
        .env_remove("SPECS_OVERVIEW_QUIET")
        .output()
        .expect("Failed to run specs-overview")
}

/// Run specs-overview relying on the implicit `<HOME>/.config` config location.
pub fn run_overview_default_config(dir: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(get_binary())
        .args(args)
        .current_dir(dir)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SPECS_OVERVIEW_CONFIG")
        .env_remove("SPECS_OVERVIEW_QUIET")
        .output()
        .expect("Failed to run specs-overview")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a spec folder with a `tasks.md` and the given companion documents.
pub fn make_spec(dir: &Path, companions: &[&str]) {
    fs::create_dir_all(dir).expect("Failed to create spec dir");
    fs::write(dir.join("tasks.md"), "# Tasks\n\n- [ ] 1. First task\n")
        .expect("Failed to write tasks.md");
    for file in companions {
        fs::write(dir.join(file), "# Doc\n").expect("Failed to write companion doc");
    }
}

/// Write an executable shell script standing in for the rune binary.
#[cfg(unix)]
pub fn write_fake_rune(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write fake rune");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake rune executable");
}

/// Helper to initialize a temporary git repo for testing.
pub fn setup_test_repo(repo_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(repo_dir)?;

    let output = Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(repo_dir)
        .output()?;
    assert!(output.status.success(), "git init failed");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(repo_dir)
        .output()?;

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(repo_dir)
        .output()?;

    Ok(())
}

/// Commit everything in `repo_dir` with a fixed author date.
pub fn commit_all(repo_dir: &Path, message: &str, author_date: &str) -> std::io::Result<()> {
    Command::new("git")
        .args(["add", "."])
        .current_dir(repo_dir)
        .output()?;

    let output = Command::new("git")
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", author_date)
        .env("GIT_COMMITTER_DATE", author_date)
        .current_dir(repo_dir)
        .output()?;
    assert!(
        output.status.success(),
        "git commit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
