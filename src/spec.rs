//! Spec records, task counts, and format classification.

mod format;
mod record;

pub use format::{detect_format, SpecFormat, DESIGN_FILE, REQUIREMENTS_FILE, SMOLSPEC_FILE};
pub use record::{SpecRecord, SpecState, TaskStats};

/// Task list that marks a directory as a spec folder.
pub const TASKS_FILE: &str = "tasks.md";
