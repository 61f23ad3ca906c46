//! Configuration for specs-overview.
//!
//! An optional markdown file with YAML frontmatter, by default at
//! `~/.config/specs-overview/config.md`:
//!
//! ```text
//! ---
//! dirs: [specs, docs/specs]
//! rune: ~/bin/rune
//! sort: completion
//! skip_dirs: [node_modules, target, archive]
//! ---
//! ```
//!
//! Command-line flags override anything set here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::formatters::OutputFormat;
use crate::sort::SortKey;
use crate::ui;

pub mod defaults;

pub use defaults::{DEFAULT_RUNE_PATH, DEFAULT_SKIP_DIRS, DEFAULT_SPEC_DIRS};
use defaults::{default_dirs, default_rune, default_skip_dirs};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "SPECS_OVERVIEW_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Spec roots, relative to the working directory or to each project
    #[serde(default = "default_dirs")]
    pub dirs: Vec<String>,
    /// Path to the task-stat binary
    #[serde(default = "default_rune")]
    pub rune: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub sort: SortKey,
    /// Workspace entries never treated as projects
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    /// Workspaces to scan; empty means single-project mode
    #[serde(default)]
    pub project_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            rune: default_rune(),
            format: OutputFormat::default(),
            sort: SortKey::default(),
            skip_dirs: default_skip_dirs(),
            project_dirs: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Lookup order: `explicit` (must exist), then `$SPECS_OVERVIEW_CONFIG`
    /// (must exist), then the global config path (optional). Falls back to
    /// built-in defaults when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::load_from(Path::new(&path));
        }

        Ok(global_config_path()
            .map(|path| Self::load_global(&path))
            .unwrap_or_default())
    }

    /// Load the implicit global config. A file that cannot be read or parsed
    /// is reported as a warning and replaced by defaults.
    pub fn load_global(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                ui::warn(&format!("Warning: {:#}; using defaults", e));
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Spec roots with `~` expanded.
    pub fn spec_dirs(&self) -> Vec<PathBuf> {
        self.dirs.iter().map(|d| expand_path(d)).collect()
    }

    /// Workspaces with `~` expanded.
    pub fn workspaces(&self) -> Vec<PathBuf> {
        self.project_dirs.iter().map(|d| expand_path(d)).collect()
    }

    /// Task-stat binary with `~` expanded.
    pub fn rune_path(&self) -> PathBuf {
        expand_path(&self.rune)
    }
}

/// Returns the path to the global config file at
/// `<config dir>/specs-overview/config.md`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("specs-overview").join("config.md"))
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return (None, content);
    }

    let after_first = &content[3..];
    let rest = after_first.trim_start();
    if rest.starts_with("---") {
        // Empty frontmatter block
        return (Some(String::new()), rest[3..].trim_start_matches('\n'));
    }

    if let Some(end_pos) = after_first.find("\n---") {
        let frontmatter = after_first[..end_pos].trim();
        let body_start = 3 + end_pos + 4; // "---" + frontmatter + "\n---"
        let body = if body_start < content.len() {
            content[body_start..].trim_start_matches('\n')
        } else {
            ""
        };
        (Some(frontmatter.to_string()), body)
    } else {
        (None, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dirs, vec!["specs", ".kiro/specs"]);
        assert_eq!(config.rune, "./rune");
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.sort, SortKey::Name);
        assert!(config.skip_dirs.contains(&"node_modules".to_string()));
        assert!(config.project_dirs.is_empty());
    }

    #[test]
    fn test_parse_partial_config() {
        let content = r#"---
dirs:
  - docs/specs
sort: completion
format: json
---

# Overview settings
"#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.dirs, vec!["docs/specs"]);
        assert_eq!(config.sort, SortKey::Completion);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.rune, "./rune");
        assert_eq!(config.skip_dirs, Config::default().skip_dirs);
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        let config = Config::parse("---\n---\n\nNothing here\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_requires_frontmatter() {
        let err = Config::parse("dirs: [specs]\n").unwrap_err();
        assert!(err.to_string().contains("frontmatter"));
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        let err = Config::parse("---\nsort: size\n---\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config frontmatter"));
    }

    #[test]
    fn test_split_frontmatter() {
        let (fm, body) = split_frontmatter("---\nrune: ./bin/rune\n---\n\nBody text");
        assert_eq!(fm.as_deref(), Some("rune: ./bin/rune"));
        assert_eq!(body, "Body text");

        let (fm, body) = split_frontmatter("no frontmatter");
        assert!(fm.is_none());
        assert_eq!(body, "no frontmatter");
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load_from(&tmp.path().join("config.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_global_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_global(&tmp.path().join("config.md"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_global_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.md");
        fs::write(&path, "---\nrune: /opt/rune\n---\n").unwrap();

        assert_eq!(Config::load_global(&path).rune, "/opt/rune");
    }

    #[test]
    fn test_load_global_malformed_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.md");
        fs::write(&path, "---\nsort: [not, a, key]\n---\n").unwrap();

        assert!(Config::load_from(&path).is_err());
        assert_eq!(Config::load_global(&path), Config::default());
    }

    #[test]
    #[serial]
    fn test_load_prefers_explicit_over_env() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("explicit.md");
        let from_env = tmp.path().join("env.md");
        fs::write(&explicit, "---\nrune: /opt/rune\n---\n").unwrap();
        fs::write(&from_env, "---\nrune: /env/rune\n---\n").unwrap();

        std::env::set_var(CONFIG_ENV, &from_env);
        assert_eq!(Config::load(Some(&explicit)).unwrap().rune, "/opt/rune");
        assert_eq!(Config::load(None).unwrap().rune, "/env/rune");
        std::env::remove_var(CONFIG_ENV);
    }

    #[test]
    #[serial]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~/work"), home.join("work"));
        assert_eq!(expand_path("specs"), PathBuf::from("specs"));

        let config = Config {
            rune: "~/bin/rune".to_string(),
            ..Config::default()
        };
        assert_eq!(config.rune_path(), home.join("bin/rune"));
    }
}
