// src/columns.rs
//! Metric selection: turns the stage/frequency configuration into the
//! ordered set of report columns.

use crate::config::MetricConfig;
use crate::detect::Structure;
use crate::error::{NpcaError, Result};
use crate::freq::MetricResult;

/// One selected report column: a structure crossed with a frequency kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub structure: Structure,
    pub kind: FreqKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreqKind {
    Raw,
    Normed,
}

impl Column {
    #[must_use]
    pub fn name(&self) -> String {
        match self.kind {
            FreqKind::Raw => format!("{}_raw", self.structure.key()),
            FreqKind::Normed => format!("{}_normed", self.structure.key()),
        }
    }

    /// Renders this column's value for one document. Raw counts print as
    /// integers, normalized frequencies with exactly two decimals.
    #[must_use]
    pub fn render(&self, result: &MetricResult) -> String {
        match self.kind {
            FreqKind::Raw => result.raw_for(self.structure).to_string(),
            FreqKind::Normed => format!("{:.2}", result.normed_for(self.structure)),
        }
    }

    #[must_use]
    pub fn value_json(&self, result: &MetricResult) -> serde_json::Value {
        match self.kind {
            FreqKind::Raw => serde_json::json!(result.raw_for(self.structure)),
            FreqKind::Normed => serde_json::json!(result.normed_for(self.structure)),
        }
    }
}

/// Computes the selected columns, sorted lexicographically by column name.
///
/// The sort (rather than stage order) keeps the header deterministic no
/// matter how the configuration was assembled.
///
/// # Errors
/// `Config` error when the selection is empty — a run with no metric
/// columns has nothing to report.
pub fn select(config: &MetricConfig) -> Result<Vec<Column>> {
    let mut columns = Vec::new();
    for structure in Structure::ALL {
        if !config.stage_enabled(structure.stage()) {
            continue;
        }
        if config.raw {
            columns.push(Column {
                structure,
                kind: FreqKind::Raw,
            });
        }
        if config.normed {
            columns.push(Column {
                structure,
                kind: FreqKind::Normed,
            });
        }
    }

    columns.sort_by_key(Column::name);
    columns.dedup();

    if columns.is_empty() {
        return Err(NpcaError::Config(
            "no metric columns selected; enable at least one stage and one frequency kind".into(),
        ));
    }
    Ok(columns)
}
