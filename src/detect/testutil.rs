// src/detect/testutil.rs
//! Shared fixture builder for detector tests.

use crate::graph::{Pos, TokenGraph, TokenRow};

/// Builds a graph from `(text, coarse_pos, fine_tag, dep_label, head)` rows,
/// all in one sentence. `head: None` marks the root.
pub fn graph(rows: &[(&str, &str, &str, &str, Option<usize>)]) -> TokenGraph {
    let rows: Vec<TokenRow> = rows
        .iter()
        .map(|&(text, pos, tag, dep, head)| TokenRow {
            text: text.into(),
            pos: Pos::from_label(pos),
            tag: tag.into(),
            dep: dep.into(),
            head,
            sent: 0,
        })
        .collect();
    TokenGraph::from_rows(rows).expect("test fixture must be well formed")
}
