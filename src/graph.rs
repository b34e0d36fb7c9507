// src/graph.rs
//! Token graph model: a dependency-annotated document as a flat arena.
//!
//! The external annotation service supplies one row per token; the graph
//! precomputes left/right adjacency lists (index-based, into the arena) so
//! detectors never chase parent pointers. Graphs are read-only once built.

use serde::Serialize;

/// Coarse part-of-speech category. Unknown labels collapse to `Other`;
/// detectors only ever test the named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pos {
    Noun,
    Pron,
    Adj,
    Verb,
    Aux,
    Sconj,
    Other,
}

impl Pos {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "NOUN" => Self::Noun,
            "PRON" => Self::Pron,
            "ADJ" => Self::Adj,
            "VERB" => Self::Verb,
            "AUX" => Self::Aux,
            "SCONJ" => Self::Sconj,
            _ => Self::Other,
        }
    }

    /// True for noun/pronoun — the candidate NP head categories.
    #[must_use]
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::Pron)
    }
}

/// One annotated token. `head` is an arena index (`None` = sentence root);
/// `lefts`/`rights` hold the indices of dependents before/after this token,
/// in increasing document order.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub tag: String,
    pub dep: String,
    pub head: Option<usize>,
    pub lefts: Vec<usize>,
    pub rights: Vec<usize>,
    pub sent: usize,
}

/// Input row for graph construction, in document order.
#[derive(Debug, Clone)]
pub struct TokenRow {
    pub text: String,
    pub pos: Pos,
    pub tag: String,
    pub dep: String,
    pub head: Option<usize>,
    pub sent: usize,
}

/// A whole document's tokens plus derived adjacency.
#[derive(Debug, Clone, Default)]
pub struct TokenGraph {
    tokens: Vec<Token>,
}

impl TokenGraph {
    /// Builds the arena and derives `lefts`/`rights` in one pass.
    ///
    /// Dependents are recorded in index order, so the strict-ordering
    /// invariant on adjacency lists holds by construction.
    ///
    /// # Errors
    /// Rejects head indices that are out of bounds or self-referential.
    pub fn from_rows(rows: Vec<TokenRow>) -> Result<Self, String> {
        let n = rows.len();
        let mut tokens: Vec<Token> = rows
            .into_iter()
            .map(|r| Token {
                text: r.text,
                pos: r.pos,
                tag: r.tag,
                dep: r.dep,
                head: r.head,
                lefts: Vec::new(),
                rights: Vec::new(),
                sent: r.sent,
            })
            .collect();

        for i in 0..n {
            let Some(h) = tokens[i].head else { continue };
            if h >= n {
                return Err(format!("token {i}: head index {h} out of bounds ({n} tokens)"));
            }
            if h == i {
                return Err(format!("token {i}: head points at itself"));
            }
            if i < h {
                tokens[h].lefts.push(i);
            } else {
                tokens[h].rights.push(i);
            }
        }

        Ok(Self { tokens })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn token(&self, i: usize) -> &Token {
        &self.tokens[i]
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens.iter().enumerate()
    }

    /// Indices of candidate NP heads (noun/pronoun tokens), document order.
    pub fn nominal_heads(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter(|(_, t)| t.pos.is_nominal())
            .map(|(i, _)| i)
    }

    /// Surface texts of the given token indices, space-joined.
    #[must_use]
    pub fn join_texts(&self, indices: &[usize]) -> String {
        let parts: Vec<&str> = indices.iter().map(|&i| self.tokens[i].text.as_str()).collect();
        parts.join(" ")
    }
}

/// An annotated document: the running text (word-count denominator) plus its
/// token graph. The two are carried together because the on-disk annotation
/// format is not the running text itself, and whitespace word count may
/// diverge from token count. That divergence is the intended denominator.
#[derive(Debug, Clone)]
pub struct AnnotatedDoc {
    pub text: String,
    pub graph: TokenGraph,
}

impl AnnotatedDoc {
    /// Whitespace-delimited word count of the running text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
