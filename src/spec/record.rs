//! Per-spec records and the values derived from their task counts.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use super::format::SpecFormat;

/// Task counts reported by the task-stat binary.
///
/// Every field defaults to zero so a partial `stats` object still decodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TaskStats {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub pending: usize,
    #[serde(default)]
    pub in_progress: usize,
    #[serde(default)]
    pub completed: usize,
}

impl TaskStats {
    pub fn new(total: usize, pending: usize, in_progress: usize, completed: usize) -> Self {
        Self {
            total,
            pending,
            in_progress,
            completed,
        }
    }

    /// Whether `pending + in_progress + completed` adds up to `total`.
    ///
    /// Counts come from an external process; a sum that overflows is
    /// inconsistent.
    pub fn is_consistent(&self) -> bool {
        self.pending
            .checked_add(self.in_progress)
            .and_then(|sum| sum.checked_add(self.completed))
            == Some(self.total)
    }
}

/// Overall state of a spec, derived from its task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecState {
    Empty,
    Complete,
    Pending,
    InProgress,
}

impl SpecState {
    /// Derive the state. Order matters: an empty task list is never complete.
    pub fn from_stats(stats: &TaskStats) -> Self {
        if stats.total == 0 {
            SpecState::Empty
        } else if stats.completed == stats.total {
            SpecState::Complete
        } else if stats.pending == stats.total {
            SpecState::Pending
        } else {
            SpecState::InProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecState::Empty => "Empty",
            SpecState::Complete => "Complete",
            SpecState::Pending => "Pending",
            SpecState::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for SpecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered spec folder.
///
/// Built once per scan and never updated. `status`, `completion_pct` and
/// `remaining` are computed from the stored counts on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRecord {
    /// Path relative to the root the spec was found under
    pub name: String,
    /// Filesystem path of the spec folder
    pub location: PathBuf,
    pub format: SpecFormat,
    /// Author date of the earliest commit touching `tasks.md`
    pub created_at: Option<DateTime<FixedOffset>>,
    pub stats: TaskStats,
    /// Owning project, only set in multi-project scans
    pub project: Option<String>,
}

impl SpecRecord {
    pub fn status(&self) -> SpecState {
        SpecState::from_stats(&self.stats)
    }

    pub fn completion_pct(&self) -> f64 {
        if self.stats.total == 0 {
            return 0.0;
        }
        (self.stats.completed as f64 / self.stats.total as f64) * 100.0
    }

    /// Tasks not yet completed. Saturates when the collector reports more
    /// completed tasks than the total.
    pub fn remaining(&self) -> usize {
        self.stats.total.saturating_sub(self.stats.completed)
    }

    /// Name shown in tabular output: `project/name` when tagged.
    pub fn display_name(&self) -> String {
        match self.project.as_deref() {
            Some(project) if !project.is_empty() => format!("{}/{}", project, self.name),
            _ => self.name.clone(),
        }
    }

    /// Whether this record carries a non-empty project tag.
    pub fn has_project(&self) -> bool {
        self.project.as_deref().is_some_and(|p| !p.is_empty())
    }
}
