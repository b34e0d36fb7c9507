// src/detect/embedding.rs
//! Extensive phrasal embedding (`ml`): chained/nested prepositional phrases
//! under one head, e.g. "the presence of layered structures at the
//! borderline of cell territories".
//!
//! Traversal uses an explicit LIFO stack rather than recursion, so deeply
//! nested chains cannot exhaust the call stack. The later-discovered
//! (deeper) preposition is always resolved before earlier siblings.

use crate::graph::TokenGraph;

/// Stage 5 detector. One match entry per qualifying head.
///
/// The stack is seeded with the head's own `prep` right dependents; only
/// prepositions discovered under a `pobj` afterwards count toward nesting.
/// A head qualifies when more than one nested preposition was found, so a
/// single flat PP (or several sibling PPs with nothing underneath) never
/// matches.
///
/// The outer scan skips ahead past any token already consumed as a `pobj`
/// by an earlier head's chain, which keeps overlapping chains from being
/// counted once per intermediate noun.
#[must_use]
pub fn detect_ml(graph: &TokenGraph) -> Vec<String> {
    let mut out = Vec::new();
    let mut consumed: Option<usize> = None;

    for i in 0..graph.len() {
        if consumed.is_some_and(|c| c >= i) {
            continue;
        }
        if !graph.token(i).pos.is_nominal() {
            consumed = Some(i);
            continue;
        }

        let (phrase, nested, furthest) = walk_chain(graph, i);
        if nested > 1 {
            out.push(phrase);
        }
        consumed = Some(furthest);
    }

    out
}

/// Resolves the PP chain rooted at `head`. Returns the accumulated phrase,
/// the count of nested prepositions discovered, and the furthest token
/// index consumed as a prepositional object.
fn walk_chain(graph: &TokenGraph, head: usize) -> (String, usize, usize) {
    let mut phrase = graph.token(head).text.clone();
    let mut nested = 0usize;
    let mut furthest = head;

    let mut stack: Vec<usize> = graph
        .token(head)
        .rights
        .iter()
        .copied()
        .filter(|&r| graph.token(r).dep == "prep")
        .collect();

    while let Some(prep) = stack.pop() {
        phrase.push(' ');
        phrase.push_str(&graph.token(prep).text);

        for &obj in &graph.token(prep).rights {
            if graph.token(obj).dep != "pobj" {
                continue;
            }
            phrase.push(' ');
            phrase.push_str(&graph.token(obj).text);
            furthest = furthest.max(obj);

            for &deeper in &graph.token(obj).rights {
                if graph.token(deeper).dep == "prep" {
                    stack.push(deeper);
                    nested += 1;
                }
            }
        }
    }

    (phrase, nested, furthest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::testutil::graph;
    use crate::graph::TokenGraph;

    /// "the presence of layered structures at the borderline of cell
    /// territories" — two prepositions nested under successive objects.
    fn nested_chain() -> TokenGraph {
        graph(&[
            ("the", "DET", "DT", "det", Some(1)),
            ("presence", "NOUN", "NN", "nsubj", None),
            ("of", "ADP", "IN", "prep", Some(1)),
            ("layered", "ADJ", "JJ", "amod", Some(4)),
            ("structures", "NOUN", "NNS", "pobj", Some(2)),
            ("at", "ADP", "IN", "prep", Some(4)),
            ("the", "DET", "DT", "det", Some(7)),
            ("borderline", "NOUN", "NN", "pobj", Some(5)),
            ("of", "ADP", "IN", "prep", Some(7)),
            ("cell", "NOUN", "NN", "compound", Some(10)),
            ("territories", "NOUN", "NNS", "pobj", Some(8)),
        ])
    }

    #[test]
    fn nested_prepositions_count_as_one_match() {
        let matches = detect_ml(&nested_chain());
        assert_eq!(
            matches,
            vec!["presence of structures at borderline of territories".to_string()]
        );
    }

    #[test]
    fn single_flat_pp_does_not_match() {
        // "house in the country": one PP, nothing nested.
        let g = graph(&[
            ("house", "NOUN", "NN", "nsubj", None),
            ("in", "ADP", "IN", "prep", Some(0)),
            ("the", "DET", "DT", "det", Some(3)),
            ("country", "NOUN", "NN", "pobj", Some(1)),
        ]);
        assert!(detect_ml(&g).is_empty());
    }

    #[test]
    fn one_level_of_nesting_is_not_enough() {
        // "presence of structures": single nested level under the seed prep
        // discovers zero further prepositions.
        let g = graph(&[
            ("presence", "NOUN", "NN", "nsubj", None),
            ("of", "ADP", "IN", "prep", Some(0)),
            ("structures", "NOUN", "NNS", "pobj", Some(1)),
        ]);
        assert!(detect_ml(&g).is_empty());
    }

    #[test]
    fn consumed_objects_do_not_anchor_their_own_match() {
        // "structures", "borderline" and "territories" sit inside the chain
        // rooted at "presence"; the skip-ahead cursor must keep them from
        // producing additional entries.
        let matches = detect_ml(&nested_chain());
        assert_eq!(matches.len(), 1);
    }
}
