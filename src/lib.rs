//! Core library for the noun phrase complexity analyzer.
//!
//! Detects and quantifies ten NP structures (Biber et al. 2011) over
//! dependency-annotated documents and reports per-document raw and
//! per-1000-word normalized frequencies.

pub mod annotate;
pub mod batch;
pub mod columns;
pub mod config;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod freq;
pub mod graph;
pub mod report;
