//! Discovery of spec folders under one or more roots.
//!
//! A spec folder is any directory that directly contains `tasks.md`. Roots are
//! walked without a depth limit; symlinked directories are not followed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::TASKS_FILE;

/// Find every directory under `roots` that contains a `tasks.md`.
///
/// Missing roots are skipped. A directory reachable from two roots is
/// reported once per root. The result is sorted by path.
pub fn find_spec_directories<P: AsRef<Path>>(roots: &[P]) -> Vec<PathBuf> {
    let mut spec_dirs = Vec::new();

    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            continue;
        }
        collect_spec_dirs(root, &mut spec_dirs);
    }

    spec_dirs.sort();
    spec_dirs
}

/// Recursively collect spec folders below `dir`, including `dir` itself.
fn collect_spec_dirs(dir: &Path, spec_dirs: &mut Vec<PathBuf>) {
    if dir.join(TASKS_FILE).is_file() {
        spec_dirs.push(dir.to_path_buf());
    }

    // Unreadable directories are treated like missing ones
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            collect_spec_dirs(&entry.path(), spec_dirs);
        }
    }
}

/// Name of a spec folder relative to the first existing root containing it.
///
/// Falls back to the folder's own name when no root matches. A spec sitting
/// directly at a root is named `.`.
pub fn spec_name<P: AsRef<Path>>(spec_dir: &Path, roots: &[P]) -> String {
    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            continue;
        }
        if let Ok(relative) = spec_dir.strip_prefix(root) {
            if relative.as_os_str().is_empty() {
                return ".".to_string();
            }
            return relative.to_string_lossy().to_string();
        }
    }

    spec_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| spec_dir.display().to_string())
}
