// src/batch.rs
//! Batch orchestration: one pass over the corpus, one report row per
//! document, fail-fast on the first per-document error.

use std::path::Path;

use serde::Serialize;

use crate::annotate::Annotator;
use crate::columns::{self, Column};
use crate::config::Config;
use crate::corpus::{base_name, Corpus};
use crate::detect;
use crate::error::{NpcaError, Result};
use crate::freq::MetricResult;

/// One emitted row: document identity, word count, and the per-structure
/// metrics behind the selected columns.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub file: String,
    pub word_count: usize,
    pub metrics: MetricResult,
}

/// The accumulated outcome of a batch run, ready for the report writer.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// Runs detectors and aggregation over a whole corpus.
///
/// The annotator is injected so the NLP backend can be swapped (and
/// test-doubled) without touching the pipeline.
pub struct BatchRunner<'a> {
    annotator: &'a dyn Annotator,
    config: &'a Config,
}

impl<'a> BatchRunner<'a> {
    #[must_use]
    pub fn new(annotator: &'a dyn Annotator, config: &'a Config) -> Self {
        Self { annotator, config }
    }

    /// Processes the corpus without progress reporting.
    ///
    /// # Errors
    /// The first `Parse`/`Io` failure aborts the whole batch; `Config`
    /// errors (empty column selection) abort before any document is read.
    pub fn run(&self, corpus: &Corpus) -> Result<BatchReport> {
        self.run_with_progress(corpus, &|_| {})
    }

    /// Processes the corpus, reporting percent-complete (0–100, monotone
    /// non-decreasing) after each document.
    ///
    /// # Errors
    /// Same contract as [`BatchRunner::run`].
    pub fn run_with_progress<F>(&self, corpus: &Corpus, on_progress: &F) -> Result<BatchReport>
    where
        F: Fn(u8),
    {
        // Column selection is validated up front so a misconfigured run
        // fails before any document I/O happens.
        let columns = columns::select(&self.config.metrics)?;
        if corpus.is_empty() {
            return Err(NpcaError::Config("empty corpus: nothing to process".into()));
        }

        let total = corpus.len();
        let mut rows = Vec::with_capacity(total);
        on_progress(0);

        for (done, path) in corpus.iter().enumerate() {
            if self.config.verbose {
                eprintln!("Processing file: {}", path.display());
            }
            rows.push(self.process_document(corpus, path)?);

            let percent = ((done + 1) * 100 / total) as u8;
            on_progress(percent);
        }

        Ok(BatchReport { columns, rows })
    }

    /// One document: read, annotate, detect, aggregate.
    fn process_document(&self, corpus: &Corpus, path: &Path) -> Result<Row> {
        let raw = corpus.read_text(path)?;
        let doc = self
            .annotator
            .annotate(&raw)
            .map_err(|reason| NpcaError::parse(path, reason))?;

        let word_count = doc.word_count();
        let matches = detect::detect_all(&doc.graph);
        let metrics = MetricResult::aggregate(&matches, word_count);

        Ok(Row {
            file: base_name(path),
            word_count,
            metrics,
        })
    }
}
