//! Ordering of the aggregated spec list.

use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Ordering;

use crate::spec::SpecRecord;

/// Field to sort the overview by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Spec name, lexicographic
    #[default]
    Name,
    /// Creation date; specs without one come first
    Date,
    /// Completion percentage
    Completion,
    /// Format label (full, smolspec, unknown)
    Type,
}

/// Compare two records by `key` alone.
pub fn compare(a: &SpecRecord, b: &SpecRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        // None orders before Some, so unknown dates are the minimum
        SortKey::Date => a.created_at.cmp(&b.created_at),
        SortKey::Completion => a.completion_pct().total_cmp(&b.completion_pct()),
        SortKey::Type => a.format.as_str().cmp(b.format.as_str()),
    }
}

/// Sort in place. Stable in both directions: records comparing equal keep the
/// order they were discovered in.
pub fn sort_specs(specs: &mut [SpecRecord], key: SortKey, reverse: bool) {
    if reverse {
        specs.sort_by(|a, b| compare(b, a, key));
    } else {
        specs.sort_by(|a, b| compare(a, b, key));
    }
}
