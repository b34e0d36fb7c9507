// src/detect/postmod.rs
//! Postmodifier detectors: of-phrase (`of`), simple non-"of" PP (`prep`),
//! and nonfinite relative clause (`nonf`).

use crate::graph::{Token, TokenGraph};

/// Stage 3: head noun immediately followed by "of" ("chair of committee").
///
/// Adjacency-based, not dependency-based: there is at most one next token,
/// so no tie-break is needed.
#[must_use]
pub fn detect_of(graph: &TokenGraph) -> Vec<String> {
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        let Some(next) = graph.get(head + 1) else { continue };
        if !next.text.eq_ignore_ascii_case("of") {
            continue;
        }
        out.push(phrase_with_rights(graph, head, head + 1));
    }
    out
}

/// Stage 3: first right dependent in a `prep` relation whose text is not
/// "of" ("house in the country"). First match per head, then stop.
#[must_use]
pub fn detect_prep(graph: &TokenGraph) -> Vec<String> {
    first_right_match(graph, |t| {
        t.dep == "prep" && !t.text.eq_ignore_ascii_case("of")
    })
}

/// Stage 4: first right dependent tagged VBG/VBN, a nonfinite clause
/// anchor ("studies adopting this method"). First match per head.
#[must_use]
pub fn detect_nonf(graph: &TokenGraph) -> Vec<String> {
    first_right_match(graph, |t| t.tag == "VBG" || t.tag == "VBN")
}

fn first_right_match<P>(graph: &TokenGraph, pred: P) -> Vec<String>
where
    P: Fn(&Token) -> bool,
{
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        for &right in &graph.token(head).rights {
            if pred(graph.token(right)) {
                out.push(phrase_with_rights(graph, head, right));
                break;
            }
        }
    }
    out
}

/// Phrase = head + anchor + the anchor's right dependents, surface order.
fn phrase_with_rights(graph: &TokenGraph, head: usize, anchor: usize) -> String {
    let mut phrase = format!("{} {}", graph.token(head).text, graph.token(anchor).text);
    let rest = graph.join_texts(&graph.token(anchor).rights);
    if !rest.is_empty() {
        phrase.push(' ');
        phrase.push_str(&rest);
    }
    phrase
}
