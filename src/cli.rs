//! CLI argument definitions for specs-overview.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::formatters::OutputFormat;
use crate::sort::SortKey;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE"),
);

#[derive(Parser, Debug)]
#[command(name = "specs-overview")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Generate overview of project specifications", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    specs-overview                                  Table of specs/ and .kiro/specs/\n    specs-overview --sort completion --reverse      Most complete first\n    specs-overview --project-dirs ~/work --format markdown\n                                                    One table across every project in ~/work"
)]
pub struct Cli {
    /// Directories to scan for specs (default: specs .kiro/specs)
    #[arg(long, num_args = 1.., value_name = "DIR")]
    pub dirs: Option<Vec<String>>,

    /// Workspaces whose subdirectories are scanned as separate projects,
    /// probing each for the --dirs locations
    #[arg(long, num_args = 1.., value_name = "DIR")]
    pub project_dirs: Option<Vec<String>>,

    /// Path to rune binary (default: ./rune)
    #[arg(long, value_name = "PATH")]
    pub rune: Option<String>,

    /// Output format (default: table)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sort by field (default: name)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Reverse sort order
    #[arg(long)]
    pub reverse: bool,

    /// Additional workspace entry to ignore in multi-project mode
    /// (can be specified multiple times)
    #[arg(long = "skip-dir", value_name = "NAME")]
    pub skip_dirs: Vec<String>,

    /// Config file (default: ~/.config/specs-overview/config.md)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Overlay the flags given on the command line onto `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dirs) = &self.dirs {
            config.dirs = dirs.clone();
        }
        if let Some(project_dirs) = &self.project_dirs {
            config.project_dirs = project_dirs.clone();
        }
        if let Some(rune) = &self.rune {
            config.rune = rune.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(sort) = self.sort {
            config.sort = sort;
        }
        for skip in &self.skip_dirs {
            if !config.skip_dirs.contains(skip) {
                config.skip_dirs.push(skip.clone());
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["specs-overview"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = parse(&[]);
        assert!(!cli.reverse);
        assert!(!cli.quiet);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--dirs",
            "docs/specs",
            "more/specs",
            "--rune",
            "/usr/local/bin/rune",
            "--format",
            "markdown",
            "--sort",
            "date",
            "--reverse",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.dirs, vec!["docs/specs", "more/specs"]);
        assert_eq!(config.rune, "/usr/local/bin/rune");
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.sort, SortKey::Date);
        assert!(config.project_dirs.is_empty());
        assert!(cli.reverse);
    }

    #[test]
    fn test_project_dirs_and_skip_dirs() {
        let cli = parse(&[
            "--project-dirs",
            "~/work",
            "~/oss",
            "--skip-dir",
            "archive",
            "--skip-dir",
            "node_modules",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.project_dirs, vec!["~/work", "~/oss"]);
        assert!(config.skip_dirs.contains(&"archive".to_string()));
        assert_eq!(
            config
                .skip_dirs
                .iter()
                .filter(|s| s.as_str() == "node_modules")
                .count(),
            1
        );
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["specs-overview", "--format", "csv"]).is_err());
        assert!(Cli::try_parse_from(["specs-overview", "--sort", "size"]).is_err());
        assert!(Cli::try_parse_from(["specs-overview", "--dirs"]).is_err());
    }

    #[test]
    fn test_sort_value_names() {
        for (value, key) in [
            ("name", SortKey::Name),
            ("date", SortKey::Date),
            ("completion", SortKey::Completion),
            ("type", SortKey::Type),
        ] {
            assert_eq!(parse(&["--sort", value]).sort, Some(key));
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
