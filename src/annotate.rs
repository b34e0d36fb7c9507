// src/annotate.rs
//! The external annotation boundary.
//!
//! The NLP pipeline itself (tokenization, tagging, dependency parsing) is
//! not part of this crate; documents arrive pre-annotated. [`Annotator`]
//! is the injection seam — the orchestrator takes any implementation, and
//! tests supply hand-built graphs through it.
//!
//! [`TsvAnnotator`] reads the CoNLL-style interchange produced offline by
//! the tagging pipeline: one token per line as
//! `form <TAB> coarse_pos <TAB> fine_tag <TAB> dep_label <TAB> head`,
//! where `head` is a 0-based document-wide token index (`_` for a sentence
//! root). Blank lines separate sentences. `# text = ...` comments carry
//! the running text, which is the word-count denominator; if absent, the
//! token forms stand in.

use crate::graph::{AnnotatedDoc, Pos, TokenGraph, TokenRow};

/// Turns one document's raw content into an annotated token graph.
/// Failures carry a reason; the caller attaches the document identity.
pub trait Annotator {
    fn annotate(&self, raw: &str) -> Result<AnnotatedDoc, String>;
}

/// Reader for the tab-separated annotation interchange format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvAnnotator;

impl Annotator for TsvAnnotator {
    fn annotate(&self, raw: &str) -> Result<AnnotatedDoc, String> {
        let mut rows: Vec<TokenRow> = Vec::new();
        let mut text_lines: Vec<String> = Vec::new();
        let mut sent = 0usize;
        let mut sentence_open = false;

        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                if sentence_open {
                    sent += 1;
                    sentence_open = false;
                }
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                if let Some(text) = comment.trim_start().strip_prefix("text =") {
                    text_lines.push(text.trim().to_string());
                }
                continue;
            }

            rows.push(parse_token_line(line, lineno, sent)?);
            sentence_open = true;
        }

        let text = if text_lines.is_empty() {
            rows.iter()
                .map(|r| r.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            text_lines.join(" ")
        };

        let graph = TokenGraph::from_rows(rows)?;
        Ok(AnnotatedDoc { text, graph })
    }
}

fn parse_token_line(line: &str, lineno: usize, sent: usize) -> Result<TokenRow, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 5 {
        return Err(format!(
            "line {}: expected 5 tab-separated fields, got {}",
            lineno + 1,
            fields.len()
        ));
    }

    let head = match fields[4] {
        "_" => None,
        value => Some(
            value
                .parse::<usize>()
                .map_err(|_| format!("line {}: bad head index {value:?}", lineno + 1))?,
        ),
    };

    Ok(TokenRow {
        text: fields[0].to_string(),
        pos: Pos::from_label(fields[1]),
        tag: fields[2].to_string(),
        dep: fields[3].to_string(),
        head,
        sent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# text = It has a nice flavor.
It\tPRON\tPRP\tnsubj\t1
has\tVERB\tVBZ\t_\t_
a\tDET\tDT\tdet\t3
nice\tADJ\tJJ\tamod\t4
flavor\tNOUN\tNN\tdobj\t1
.\tPUNCT\t.\tpunct\t1

# text = I agree.
I\tPRON\tPRP\tnsubj\t7
agree\tVERB\tVBP\t_\t_
.\tPUNCT\t.\tpunct\t7
";

    #[test]
    fn reads_two_sentences_with_document_wide_heads() {
        let doc = TsvAnnotator.annotate(SAMPLE).unwrap();
        assert_eq!(doc.graph.len(), 9);
        assert_eq!(doc.graph.token(0).sent, 0);
        assert_eq!(doc.graph.token(6).sent, 1);
        // "flavor" (4): left dependent "nice" (3), which carries "a" (2).
        assert_eq!(doc.graph.token(4).lefts, vec![3]);
        assert_eq!(doc.graph.token(3).lefts, vec![2]);
        // "has" (1): lefts [0], rights [4, 5].
        assert_eq!(doc.graph.token(1).lefts, vec![0]);
        assert_eq!(doc.graph.token(1).rights, vec![4, 5]);
    }

    #[test]
    fn running_text_comes_from_text_comments() {
        let doc = TsvAnnotator.annotate(SAMPLE).unwrap();
        assert_eq!(doc.text, "It has a nice flavor. I agree.");
        assert_eq!(doc.word_count(), 7);
    }

    #[test]
    fn falls_back_to_token_forms_without_text_comment() {
        let doc = TsvAnnotator
            .annotate("cable\tNOUN\tNN\tcompound\t1\nchannel\tNOUN\tNN\tdobj\t_\n")
            .unwrap();
        assert_eq!(doc.text, "cable channel");
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = TsvAnnotator.annotate("only\tthree\tfields\n").unwrap_err();
        assert!(err.contains("line 1"), "got: {err}");
    }

    #[test]
    fn rejects_bad_head_index() {
        let err = TsvAnnotator
            .annotate("x\tNOUN\tNN\tnsubj\tnope\n")
            .unwrap_err();
        assert!(err.contains("bad head index"));
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let doc = TsvAnnotator.annotate("").unwrap();
        assert!(doc.graph.is_empty());
        assert_eq!(doc.word_count(), 0);
    }
}
