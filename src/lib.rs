//! # specs-overview
//!
//! Aggregated status of every spec folder in a project, or across many
//! projects at once.
//!
//! ## Overview
//!
//! A spec is a folder containing a `tasks.md` task list. The tool finds every
//! such folder, classifies its layout, looks up when it was first committed,
//! asks the external `rune` binary for task counts, and prints one sortable
//! summary as a table, markdown, or JSON.
//!
//! ## Modules
//!
//! - [`spec`] - Spec records, task counts, and format detection
//! - [`locate`] - Recursive discovery of spec folders
//! - [`git`] - Creation dates from git history
//! - [`rune`] - Task counts from the task-stat binary
//! - [`scan`] - Single- and multi-project scan pipeline
//! - [`sort`] - Ordering of the aggregated list
//! - [`formatters`] - Table, markdown, and JSON output
//! - [`config`] - Configuration file and defaults
//!
//! ## Example
//!
//! ```no_run
//! use specs_overview::config::Config;
//! use specs_overview::formatters::{render, OutputFormat};
//!
//! let config = Config::load(None).expect("Failed to load config");
//! let specs = specs_overview::collect_overview(&config, false);
//! println!("{}", render(&specs, OutputFormat::Markdown).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod formatters;
pub mod git;
pub mod locate;
pub mod rune;
pub mod scan;
pub mod sort;
pub mod spec;
pub mod ui;

use config::Config;
use rune::TaskStatCollector;
use scan::Scanner;
use spec::SpecRecord;

/// Scan according to `config` and return the sorted records.
///
/// Multi-project mode is used when `config.project_dirs` is non-empty; the
/// configured `dirs` are then probed inside every project.
pub fn collect_overview(config: &Config, reverse: bool) -> Vec<SpecRecord> {
    let scanner = Scanner::new(TaskStatCollector::new(config.rune_path()));
    let spec_dirs = config.spec_dirs();

    let mut specs = if config.project_dirs.is_empty() {
        scanner.scan_specs(&spec_dirs)
    } else {
        scanner.scan_projects(&config.workspaces(), &spec_dirs, &config.skip_dirs)
    };

    sort::sort_specs(&mut specs, config.sort, reverse);
    specs
}
