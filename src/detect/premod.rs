// src/detect/premod.rs
//! Premodifier detectors: attributive adjective (`adj`), noun (`nm`),
//! possessive (`poss`), and stacked adjective+noun premodifiers (`adj_nm`).

use crate::graph::{Pos, Token, TokenGraph};

/// Stage 2: first left dependent of a nominal head with `pos == ADJ`.
#[must_use]
pub fn detect_adj(graph: &TokenGraph) -> Vec<String> {
    first_left_match(graph, |t| t.pos == Pos::Adj)
}

/// Stage 3: first left dependent with `pos == NOUN` ("cable channel").
#[must_use]
pub fn detect_nm(graph: &TokenGraph) -> Vec<String> {
    first_left_match(graph, |t| t.pos == Pos::Noun)
}

/// Stage 3: first left dependent in a possessive relation ("Mary's voice").
#[must_use]
pub fn detect_poss(graph: &TokenGraph) -> Vec<String> {
    first_left_match(graph, |t| t.dep == "poss")
}

/// Shared left-scan: for each nominal head, take the first left dependent
/// satisfying `pred` and stop. Phrase = dependent's own lefts + dependent +
/// head, in surface order.
fn first_left_match<P>(graph: &TokenGraph, pred: P) -> Vec<String>
where
    P: Fn(&Token) -> bool,
{
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        for &left in &graph.token(head).lefts {
            if !pred(graph.token(left)) {
                continue;
            }
            let mut phrase = graph.join_texts(&graph.token(left).lefts);
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(&graph.token(left).text);
            phrase.push(' ');
            phrase.push_str(&graph.token(head).text);
            out.push(phrase);
            break;
        }
    }
    out
}

/// Stage 4: stacked adjective and noun premodifiers under one head.
///
/// The only exhaustive premodifier scan: walks the head's left dependents
/// from closest to furthest, prepending EVERY noun or adjective dependent
/// (non-qualifying dependents are skipped, not a stopping point), and
/// records the phrase only if both categories occurred.
#[must_use]
pub fn detect_adj_nm(graph: &TokenGraph) -> Vec<String> {
    let mut out = Vec::new();
    for head in graph.nominal_heads() {
        let mut saw_noun = false;
        let mut saw_adj = false;
        let mut phrase = graph.token(head).text.clone();

        for &left in graph.token(head).lefts.iter().rev() {
            match graph.token(left).pos {
                Pos::Noun => {
                    saw_noun = true;
                    phrase = format!("{} {}", graph.token(left).text, phrase);
                }
                Pos::Adj => {
                    saw_adj = true;
                    phrase = format!("{} {}", graph.token(left).text, phrase);
                }
                _ => {}
            }
        }

        if saw_noun && saw_adj {
            out.push(phrase);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::testutil::graph;

    #[test]
    fn adj_matches_a_nice_flavor() {
        // "a" depends on "nice", "nice" on "flavor".
        let g = graph(&[
            ("a", "DET", "DT", "det", Some(1)),
            ("nice", "ADJ", "JJ", "amod", Some(2)),
            ("flavor", "NOUN", "NN", "dobj", None),
        ]);
        assert_eq!(detect_adj(&g), vec!["a nice flavor".to_string()]);
    }

    #[test]
    fn adj_takes_first_adjective_only() {
        // Two ADJ lefts: only the leftmost (first in scan order) anchors the phrase.
        let g = graph(&[
            ("big", "ADJ", "JJ", "amod", Some(2)),
            ("red", "ADJ", "JJ", "amod", Some(2)),
            ("car", "NOUN", "NN", "dobj", None),
        ]);
        assert_eq!(detect_adj(&g), vec!["big car".to_string()]);
    }

    #[test]
    fn adj_no_match_without_adjective() {
        let g = graph(&[
            ("the", "DET", "DT", "det", Some(1)),
            ("car", "NOUN", "NN", "nsubj", None),
        ]);
        assert!(detect_adj(&g).is_empty());
    }

    #[test]
    fn nm_matches_noun_premodifier() {
        let g = graph(&[
            ("cable", "NOUN", "NN", "compound", Some(1)),
            ("channel", "NOUN", "NN", "dobj", None),
        ]);
        assert_eq!(detect_nm(&g), vec!["cable channel".to_string()]);
    }

    #[test]
    fn poss_matches_possessive_relation() {
        let g = graph(&[
            ("Mary", "PROPN", "NNP", "poss", Some(2)),
            ("'s", "PART", "POS", "case", Some(0)),
            ("voice", "NOUN", "NN", "dobj", None),
        ]);
        // "'s" follows "Mary" so it is a right dependent; phrase is head pair only.
        assert_eq!(detect_poss(&g), vec!["Mary voice".to_string()]);
    }

    #[test]
    fn adj_nm_needs_both_categories() {
        // "positive propagule size effects": ADJ + NOUN + NOUN premodifiers.
        let g = graph(&[
            ("positive", "ADJ", "JJ", "amod", Some(3)),
            ("propagule", "NOUN", "NN", "compound", Some(3)),
            ("size", "NOUN", "NN", "compound", Some(3)),
            ("effects", "NOUN", "NNS", "nsubj", None),
        ]);
        assert_eq!(
            detect_adj_nm(&g),
            vec!["positive propagule size effects".to_string()]
        );
    }

    #[test]
    fn adj_nm_rejects_adjectives_alone() {
        let g = graph(&[
            ("big", "ADJ", "JJ", "amod", Some(2)),
            ("red", "ADJ", "JJ", "amod", Some(2)),
            ("car", "NOUN", "NN", "dobj", None),
        ]);
        assert!(detect_adj_nm(&g).is_empty());
    }

    #[test]
    fn adj_nm_skips_non_qualifying_without_stopping() {
        // A determiner between qualifying premodifiers must not end the walk.
        let g = graph(&[
            ("the", "DET", "DT", "det", Some(3)),
            ("big", "ADJ", "JJ", "amod", Some(3)),
            ("cable", "NOUN", "NN", "compound", Some(3)),
            ("channel", "NOUN", "NN", "dobj", None),
        ]);
        assert_eq!(detect_adj_nm(&g), vec!["big cable channel".to_string()]);
    }
}
