//! Output formatters for the spec overview
//!
//! Each formatter turns a sorted slice of [`SpecRecord`]s into the full text
//! to print. Output is never coloured.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::spec::SpecRecord;
use crate::ui;

/// Printed instead of any table or document when nothing was found.
pub const NO_SPECS_MESSAGE: &str = "No specs found.";

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// GitHub-flavored markdown table
    Markdown,
    /// Indented JSON array
    Json,
}

/// Render `specs` in the requested format.
pub fn render(specs: &[SpecRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(specs)),
        OutputFormat::Markdown => Ok(format_markdown(specs)),
        OutputFormat::Json => format_json(specs),
    }
}

/// Whether any record carries a project tag. Decides the column layout for
/// the whole output, not per row.
fn has_projects(specs: &[SpecRecord]) -> bool {
    specs.iter().any(SpecRecord::has_project)
}

fn created_date(spec: &SpecRecord) -> String {
    spec.created_at
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format specs as a fixed-width table
pub fn format_table(specs: &[SpecRecord]) -> String {
    if specs.is_empty() {
        return NO_SPECS_MESSAGE.to_string();
    }

    let label = if has_projects(specs) {
        "Project/Spec"
    } else {
        "Spec"
    };

    let names: Vec<String> = specs.iter().map(SpecRecord::display_name).collect();
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once(label.len()))
        .max()
        .unwrap_or(label.len());

    let mut output = vec![
        format!(
            "{:<width$}  {:<10}  {:<12}  {:<12}  {:>5}  {:>5}  {:>9}  {:>6}",
            label,
            "Type",
            "Created",
            "Status",
            "Total",
            "Done",
            "Remaining",
            "%",
        ),
        "=".repeat(width + 80),
    ];

    for (spec, name) in specs.iter().zip(&names) {
        output.push(format!(
            "{:<width$}  {:<10}  {:<12}  {:<12}  {:>5}  {:>5}  {:>9}  {:>5.1}%",
            name,
            spec.format.as_str(),
            created_date(spec),
            ui::status_text(spec.status()),
            spec.stats.total,
            spec.stats.completed,
            spec.remaining(),
            spec.completion_pct(),
        ));
    }

    output.join("\n")
}

/// Format specs as a GitHub-flavored markdown table
pub fn format_markdown(specs: &[SpecRecord]) -> String {
    if specs.is_empty() {
        return NO_SPECS_MESSAGE.to_string();
    }

    let with_project = has_projects(specs);
    let mut output = Vec::with_capacity(specs.len() + 2);

    if with_project {
        output.push(
            "| Project | Spec | Type | Created | Status | Total | Done | Remaining | % |".to_string(),
        );
        output.push(
            "|---------|------|------|---------|--------|------:|-----:|----------:|--:|".to_string(),
        );
    } else {
        output.push("| Spec | Type | Created | Status | Total | Done | Remaining | % |".to_string());
        output.push("|------|------|---------|--------|------:|-----:|----------:|--:|".to_string());
    }

    for spec in specs {
        let row = format!(
            "| {} | {} | {} | {} | {} | {} | {} | {:.1}% |",
            spec.name,
            spec.format.as_str(),
            created_date(spec),
            ui::status_text(spec.status()),
            spec.stats.total,
            spec.stats.completed,
            spec.remaining(),
            spec.completion_pct(),
        );

        if with_project {
            let project = spec
                .project
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or("-");
            output.push(format!("| {} {}", project, row));
        } else {
            output.push(row);
        }
    }

    output.join("\n")
}

#[derive(Serialize)]
struct JsonStats {
    total: usize,
    pending: usize,
    in_progress: usize,
    completed: usize,
    remaining: usize,
}

#[derive(Serialize)]
struct JsonSpec<'a> {
    name: &'a str,
    path: String,
    #[serde(rename = "type")]
    spec_type: &'static str,
    created: Option<String>,
    status: &'static str,
    stats: JsonStats,
    completion_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
}

impl<'a> From<&'a SpecRecord> for JsonSpec<'a> {
    fn from(spec: &'a SpecRecord) -> Self {
        Self {
            name: &spec.name,
            path: spec.location.display().to_string(),
            spec_type: spec.format.as_str(),
            created: spec.created_at.map(|dt| dt.to_rfc3339()),
            status: spec.status().label(),
            stats: JsonStats {
                total: spec.stats.total,
                pending: spec.stats.pending,
                in_progress: spec.stats.in_progress,
                completed: spec.stats.completed,
                remaining: spec.remaining(),
            },
            completion_pct: spec.completion_pct(),
            project: spec.project.as_deref(),
        }
    }
}

/// Format specs as an indented JSON array
pub fn format_json(specs: &[SpecRecord]) -> Result<String> {
    if specs.is_empty() {
        return Ok(NO_SPECS_MESSAGE.to_string());
    }

    let data: Vec<JsonSpec> = specs.iter().map(JsonSpec::from).collect();
    serde_json::to_string_pretty(&data).context("Failed to serialize specs to JSON")
}
