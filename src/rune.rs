//! Task counts from the external task-stat binary.
//!
//! The binary is invoked as `<rune> list <tasks.md> --output json` and is
//! expected to print a document with a `stats` object. This is the one place
//! where a broken spec is isolated: every failure becomes a warning and an
//! all-zero [`TaskStats`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::spec::{TaskStats, TASKS_FILE};
use crate::ui;

/// The part of `rune list --output json` this tool reads.
#[derive(Debug, Deserialize)]
struct ListOutput {
    #[serde(default)]
    stats: TaskStats,
}

/// Runs the task-stat binary against spec folders.
#[derive(Debug, Clone)]
pub struct TaskStatCollector {
    binary: PathBuf,
}

impl TaskStatCollector {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Counts for the spec at `spec_dir`, or zeros with a warning on failure.
    pub fn collect(&self, spec_dir: &Path) -> TaskStats {
        match self.try_collect(spec_dir) {
            Ok(stats) => stats,
            Err(e) => {
                ui::warn(&stats_warning(spec_dir, &e));
                TaskStats::default()
            }
        }
    }

    /// Counts for the spec at `spec_dir`.
    ///
    /// # Errors
    ///
    /// Fails if the binary cannot be launched, exits non-zero, or prints
    /// something that is not the expected JSON document.
    pub fn try_collect(&self, spec_dir: &Path) -> Result<TaskStats> {
        let tasks_file = spec_dir.join(TASKS_FILE);

        let output = Command::new(&self.binary)
            .arg("list")
            .arg(&tasks_file)
            .args(["--output", "json"])
            .output()
            .with_context(|| format!("Failed to run {}", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} list exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            );
        }

        parse_list_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Decode the JSON printed by `list --output json`.
///
/// Missing `stats` or missing count fields read as zero.
pub fn parse_list_output(stdout: &str) -> Result<TaskStats> {
    let parsed: ListOutput =
        serde_json::from_str(stdout).context("Failed to parse task list JSON")?;
    Ok(parsed.stats)
}

/// Warning line for a failed collection.
pub fn stats_warning(spec_dir: &Path, err: &anyhow::Error) -> String {
    format!(
        "Warning: Failed to get stats for {}: {:#}",
        spec_dir.display(),
        err
    )
}
