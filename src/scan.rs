//! Single-project scan pipeline and the multi-project multiplexer.
//!
//! Specs are processed one after another: locate, classify, date, count.
//! No step for one spec can abort the scan of the others.

use std::fs;
use std::path::{Path, PathBuf};

use crate::git;
use crate::locate::{find_spec_directories, spec_name};
use crate::rune::TaskStatCollector;
use crate::spec::{detect_format, SpecRecord};
use crate::ui;

/// Builds [`SpecRecord`]s from spec roots or workspaces.
#[derive(Debug, Clone)]
pub struct Scanner {
    collector: TaskStatCollector,
}

impl Scanner {
    pub fn new(collector: TaskStatCollector) -> Self {
        Self { collector }
    }

    /// Scan every spec folder under `roots`, in path order.
    pub fn scan_specs<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<SpecRecord> {
        find_spec_directories(roots)
            .into_iter()
            .map(|dir| self.scan_spec(dir, roots))
            .collect()
    }

    /// Build the record for one spec folder found under `roots`.
    pub fn scan_spec<P: AsRef<Path>>(&self, spec_dir: PathBuf, roots: &[P]) -> SpecRecord {
        let name = spec_name(&spec_dir, roots);
        let format = detect_format(&spec_dir);
        let created_at = git::creation_date(&spec_dir);
        let stats = self.collector.collect(&spec_dir);

        if !stats.is_consistent() {
            ui::warn(&format!(
                "Warning: Task counts for {} do not add up: {} pending + {} in progress + {} completed != {} total",
                spec_dir.display(),
                stats.pending,
                stats.in_progress,
                stats.completed,
                stats.total
            ));
        }

        SpecRecord {
            name,
            location: spec_dir,
            format,
            created_at,
            stats,
            project: None,
        }
    }

    /// Scan each project inside each workspace.
    ///
    /// `spec_dirs` are probed relative to every project; projects with none of
    /// them are skipped. Records are tagged with the project's directory name.
    pub fn scan_projects<P: AsRef<Path>>(
        &self,
        workspaces: &[P],
        spec_dirs: &[PathBuf],
        skip_dirs: &[String],
    ) -> Vec<SpecRecord> {
        let mut all_specs = Vec::new();

        for workspace in workspaces {
            for project_dir in discover_projects(workspace.as_ref(), skip_dirs) {
                let roots: Vec<PathBuf> = spec_dirs
                    .iter()
                    .map(|d| project_dir.join(d))
                    .filter(|p| p.exists())
                    .collect();

                if roots.is_empty() {
                    continue;
                }

                let project = project_name(&project_dir);
                let mut specs = self.scan_specs(&roots);
                for spec in &mut specs {
                    spec.project = Some(project.clone());
                }
                all_specs.extend(specs);
            }
        }

        all_specs
    }
}

/// Immediate subdirectories of `workspace` that count as projects, sorted.
///
/// The workspace is resolved to an absolute path first; a missing workspace
/// or a plain file yields nothing. Hidden directories and names listed in
/// `skip_dirs` are left out.
pub fn discover_projects(workspace: &Path, skip_dirs: &[String]) -> Vec<PathBuf> {
    let Ok(root) = workspace.canonicalize() else {
        return Vec::new();
    };
    if !root.is_dir() {
        return Vec::new();
    }

    let Ok(entries) = fs::read_dir(&root) else {
        return Vec::new();
    };

    let mut projects: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter(|entry| !is_skipped(&entry.file_name().to_string_lossy(), skip_dirs))
        .map(|entry| entry.path())
        .collect();

    projects.sort();
    projects
}

fn is_skipped(name: &str, skip_dirs: &[String]) -> bool {
    name.starts_with('.') || skip_dirs.iter().any(|skip| skip == name)
}

fn project_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| project_dir.display().to_string())
}
