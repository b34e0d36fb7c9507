// src/detect/mod.rs
//! The ten noun-phrase structure detectors.
//!
//! Every detector is a pure scan over one [`TokenGraph`]: no qualifying
//! dependent means no match (never an empty phrase), and ties go to the
//! leftmost candidate except where a detector documents otherwise
//! (`adj_nm` is exhaustive, `ml` resolves its PP chain LIFO).

pub mod clause;
pub mod embedding;
pub mod postmod;
pub mod premod;
#[cfg(test)]
pub mod testutil;

use serde::Serialize;

use crate::graph::TokenGraph;

/// One of the ten NP structures, in canonical (stage) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Structure {
    /// Stage 2: attributive adjective as premodifier ("a nice flavor").
    Adj,
    /// Stage 3: that/which/who relative clause ("the man that was nice").
    Rc,
    /// Stage 3: noun as premodifier ("cable channel").
    Nm,
    /// Stage 3: possessive noun as premodifier ("Mary's voice").
    Poss,
    /// Stage 3: of-phrase as postmodifier ("chair of committee").
    Of,
    /// Stage 3: simple non-"of" PP as postmodifier ("house in the country").
    Prep,
    /// Stage 4: nonfinite relative clause ("studies adopting this method").
    Nonf,
    /// Stage 4: stacked adjective+noun premodifiers ("positive propagule size effects").
    AdjNm,
    /// Stage 5: noun-controlled complement clause ("the hypothesis that ...").
    Comp,
    /// Stage 5: multi-level PP embedding ("presence of X at the borderline of Y").
    Ml,
}

impl Structure {
    pub const ALL: [Structure; 10] = [
        Self::Adj,
        Self::Rc,
        Self::Nm,
        Self::Poss,
        Self::Of,
        Self::Prep,
        Self::Nonf,
        Self::AdjNm,
        Self::Comp,
        Self::Ml,
    ];

    /// Stable key used as the metric column prefix.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Adj => "adj",
            Self::Rc => "rc",
            Self::Nm => "nm",
            Self::Poss => "poss",
            Self::Of => "of",
            Self::Prep => "prep",
            Self::Nonf => "nonf",
            Self::AdjNm => "adj_nm",
            Self::Comp => "comp",
            Self::Ml => "ml",
        }
    }

    /// Developmental stage grouping (configuration only, never detection).
    #[must_use]
    pub fn stage(self) -> u8 {
        match self {
            Self::Adj => 2,
            Self::Rc | Self::Nm | Self::Poss | Self::Of | Self::Prep => 3,
            Self::Nonf | Self::AdjNm => 4,
            Self::Comp | Self::Ml => 5,
        }
    }

    /// Position in [`Structure::ALL`], usable as an array index.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

/// Matched phrases for all ten structures, indexed by [`Structure::index`].
#[derive(Debug, Clone, Default)]
pub struct StructureMatches {
    pub phrases: [Vec<String>; 10],
}

impl StructureMatches {
    #[must_use]
    pub fn raw_counts(&self) -> [usize; 10] {
        let mut counts = [0usize; 10];
        for (i, p) in self.phrases.iter().enumerate() {
            counts[i] = p.len();
        }
        counts
    }
}

/// Runs one detector over the graph.
#[must_use]
pub fn detect(structure: Structure, graph: &TokenGraph) -> Vec<String> {
    match structure {
        Structure::Adj => premod::detect_adj(graph),
        Structure::Rc => clause::detect_rc(graph),
        Structure::Nm => premod::detect_nm(graph),
        Structure::Poss => premod::detect_poss(graph),
        Structure::Of => postmod::detect_of(graph),
        Structure::Prep => postmod::detect_prep(graph),
        Structure::Nonf => postmod::detect_nonf(graph),
        Structure::AdjNm => premod::detect_adj_nm(graph),
        Structure::Comp => clause::detect_comp(graph),
        Structure::Ml => embedding::detect_ml(graph),
    }
}

/// Runs all ten detectors over one document's graph.
#[must_use]
pub fn detect_all(graph: &TokenGraph) -> StructureMatches {
    let mut out = StructureMatches::default();
    for s in Structure::ALL {
        out.phrases[s.index()] = detect(s, graph);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_stage_grouped() {
        let mut keys: Vec<&str> = Structure::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 10);

        assert_eq!(Structure::Adj.stage(), 2);
        assert_eq!(Structure::Prep.stage(), 3);
        assert_eq!(Structure::AdjNm.stage(), 4);
        assert_eq!(Structure::Ml.stage(), 5);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, s) in Structure::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
