//! Creation dates from git history.
//!
//! Best effort only: any failure (git missing, not a repository, file never
//! committed, unparseable output) yields `None`.

use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::process::Command;

use crate::spec::TASKS_FILE;

/// Author date of the earliest commit that touched `<spec_dir>/tasks.md`.
///
/// Runs `git log --follow --format=%aI --reverse -- <tasks.md>` from the spec
/// folder's parent directory, so renames are followed back to the original
/// file.
pub fn creation_date(spec_dir: &Path) -> Option<DateTime<FixedOffset>> {
    // git resolves pathspecs against its working directory, so hand it an
    // absolute path
    let tasks_file = spec_dir.join(TASKS_FILE).canonicalize().ok()?;
    let cwd = tasks_file.parent()?.parent().unwrap_or(Path::new("/"));

    let output = Command::new("git")
        .args(["log", "--follow", "--format=%aI", "--reverse", "--"])
        .arg(&tasks_file)
        .current_dir(cwd)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().find(|l| !l.trim().is_empty()).and_then(parse_git_timestamp)
}

/// Parse one line of `%aI` output.
///
/// A trailing `Z` is normalized to `+00:00` before parsing.
pub fn parse_git_timestamp(line: &str) -> Option<DateTime<FixedOffset>> {
    let line = line.trim();
    let normalized = match line.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => line.to_string(),
    };
    DateTime::parse_from_rfc3339(&normalized).ok()
}
