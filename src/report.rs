// src/report.rs
//! Report rendering: the CSV layout the analyzer has always produced,
//! plus a JSON alternative for downstream tooling.
//!
//! CSV is only written after the whole batch has succeeded, so fail-fast
//! aborts never leave a half-valid output file behind.

use std::fs;
use std::path::Path;

use crate::batch::BatchReport;
use crate::error::{NpcaError, Result};

/// Output format for the report writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Renders the header row: `file, Number of words` plus each selected
/// column, lexicographic order, one space after each comma.
#[must_use]
pub fn csv_header(report: &BatchReport) -> String {
    let mut header = String::from("file, Number of words");
    for column in &report.columns {
        header.push_str(", ");
        header.push_str(&column.name());
    }
    header
}

/// Renders the full CSV document (header + one data row per document).
#[must_use]
pub fn to_csv(report: &BatchReport) -> String {
    let mut out = csv_header(report);
    out.push('\n');
    for row in &report.rows {
        out.push_str(&row.file);
        out.push(',');
        out.push_str(&row.word_count.to_string());
        for column in &report.columns {
            out.push(',');
            out.push_str(&column.render(&row.metrics));
        }
        out.push('\n');
    }
    out
}

/// Renders the report as a JSON array of row objects carrying the same
/// values as the CSV columns.
#[must_use]
pub fn to_json(report: &BatchReport) -> String {
    let rows: Vec<serde_json::Value> = report
        .rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            object.insert("file".into(), serde_json::json!(row.file));
            object.insert("Number of words".into(), serde_json::json!(row.word_count));
            for column in &report.columns {
                object.insert(column.name(), column.value_json(&row.metrics));
            }
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".into())
}

/// Writes the rendered report to `path`.
///
/// # Errors
/// `Io` when the destination is unwritable.
pub fn write(report: &BatchReport, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = match format {
        OutputFormat::Csv => to_csv(report),
        OutputFormat::Json => to_json(report),
    };
    fs::write(path, rendered).map_err(|e| NpcaError::io(e, path))
}
