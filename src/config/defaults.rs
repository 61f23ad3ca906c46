//! Built-in defaults for every configuration key.

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Spec roots probed in single-project mode, and inside each project in
/// multi-project mode.
pub const DEFAULT_SPEC_DIRS: &[&str] = &["specs", ".kiro/specs"];

/// Default location of the task-stat binary.
pub const DEFAULT_RUNE_PATH: &str = "./rune";

/// Workspace entries that are never treated as projects.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "vendor", "target", "__pycache__", "venv"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

default_fn!(default_dirs, Vec<String>, to_strings(DEFAULT_SPEC_DIRS));
default_fn!(default_rune, String, DEFAULT_RUNE_PATH.to_string());
default_fn!(default_skip_dirs, Vec<String>, to_strings(DEFAULT_SKIP_DIRS));
