//! Status symbols and diagnostic output.
//!
//! Results go to stdout uncoloured; warnings go to stderr with a yellow `⚠`
//! prefix unless quiet mode is on.

use colored::Colorize;

use crate::spec::SpecState;

/// Environment variable that enables quiet mode (`1` or `true`).
pub const QUIET_ENV: &str = "SPECS_OVERVIEW_QUIET";

/// Check if quiet mode is enabled via environment variable or `--quiet`
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Turn quiet mode on for the rest of the process.
pub fn set_quiet() {
    std::env::set_var(QUIET_ENV, "1");
}

/// Disable colours when stderr is not a terminal or `NO_COLOR` is set.
pub fn init_colors() {
    if !atty::is(atty::Stream::Stderr) || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

/// Print a warning to stderr.
pub fn warn(msg: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "⚠".yellow(), msg);
}

/// Returns the status symbol for a spec state.
///
/// Symbols:
/// - Complete: ✓
/// - In Progress: ⚠
/// - Pending: ○
/// - Empty: −
pub fn status_symbol(state: SpecState) -> &'static str {
    match state {
        SpecState::Complete => "✓",
        SpecState::InProgress => "⚠",
        SpecState::Pending => "○",
        SpecState::Empty => "−",
    }
}

/// Symbol followed by the status word, e.g. `✓ Complete`.
pub fn status_text(state: SpecState) -> String {
    format!("{} {}", status_symbol(state), state.label())
}
