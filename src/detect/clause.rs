// src/detect/clause.rs
//! Clausal detectors: finite relative clauses (`rc`) and noun-controlled
//! complement clauses (`comp`).
//!
//! Both are adjacency tests on the two tokens after the head, so heads in
//! the last two document positions can never match.

use crate::graph::{Pos, TokenGraph};

const RELATIVE_PRONOUNS: [&str; 3] = ["that", "which", "who"];

/// Stage 3: nominal head followed by that/which/who plus a verbal token
/// ("the man that was nice"). Animacy of the head is not verified beyond
/// the noun/pronoun filter.
#[must_use]
pub fn detect_rc(graph: &TokenGraph) -> Vec<String> {
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        let (Some(next), Some(after)) = (graph.get(head + 1), graph.get(head + 2)) else {
            continue;
        };
        let lowered = next.text.to_lowercase();
        if !RELATIVE_PRONOUNS.contains(&lowered.as_str()) {
            continue;
        }
        if !matches!(after.pos, Pos::Verb | Pos::Aux) {
            continue;
        }
        out.push(clause_phrase(graph, head, head + 1));
    }
    out
}

/// Stage 5: nominal head followed by complementizer "that" (SCONJ, `mark`
/// relation), e.g. "the hypothesis that body weight was variable".
#[must_use]
pub fn detect_comp(graph: &TokenGraph) -> Vec<String> {
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        if graph.get(head + 2).is_none() {
            continue;
        }
        let Some(next) = graph.get(head + 1) else { continue };
        if !next.text.eq_ignore_ascii_case("that") {
            continue;
        }
        if next.pos != Pos::Sconj || next.dep != "mark" {
            continue;
        }
        out.push(clause_phrase(graph, head, head + 1));
    }
    out
}

fn clause_phrase(graph: &TokenGraph, head: usize, marker: usize) -> String {
    let mut phrase = format!("{} {}", graph.token(head).text, graph.token(marker).text);
    let rest = graph.join_texts(&graph.token(marker).rights);
    if !rest.is_empty() {
        phrase.push(' ');
        phrase.push_str(&rest);
    }
    phrase
}
