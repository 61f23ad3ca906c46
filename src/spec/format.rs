//! Spec format detection from companion documents.

use std::fmt;
use std::path::Path;

/// Companion document that marks a full spec (together with [`DESIGN_FILE`]).
pub const REQUIREMENTS_FILE: &str = "requirements.md";
/// Companion document that marks a full spec (together with [`REQUIREMENTS_FILE`]).
pub const DESIGN_FILE: &str = "design.md";
/// Consolidated document that marks a smolspec.
pub const SMOLSPEC_FILE: &str = "smolspec.md";

/// Layout of a spec folder, derived from which documents sit next to `tasks.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    /// Separate requirements and design documents
    Full,
    /// A single consolidated `smolspec.md`
    Smolspec,
    /// Neither layout
    Unknown,
}

impl SpecFormat {
    /// Label used in every output format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecFormat::Full => "full",
            SpecFormat::Smolspec => "smolspec",
            SpecFormat::Unknown => "unknown",
        }
    }

    /// Classify from the three existence checks.
    ///
    /// A full spec needs both requirements and design; a lone requirements or
    /// design document falls through to the smolspec check.
    pub fn classify(has_requirements: bool, has_design: bool, has_smolspec: bool) -> Self {
        if has_requirements && has_design {
            SpecFormat::Full
        } else if has_smolspec {
            SpecFormat::Smolspec
        } else {
            SpecFormat::Unknown
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the format of the spec folder at `spec_dir`.
pub fn detect_format(spec_dir: &Path) -> SpecFormat {
    SpecFormat::classify(
        spec_dir.join(REQUIREMENTS_FILE).exists(),
        spec_dir.join(DESIGN_FILE).exists(),
        spec_dir.join(SMOLSPEC_FILE).exists(),
    )
}
