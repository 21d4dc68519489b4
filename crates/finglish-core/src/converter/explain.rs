use serde::Serialize;

use crate::dict::{Lexicon, Position};
use crate::segment::segment;

use super::expand::{expand, token_choices};
use super::rank::{select, RankMode, RankOptions};
use super::ScoredCandidate;

/// Diagnostic breakdown of how one word was ranked.
#[derive(Debug, Serialize)]
pub struct WordExplanation {
    pub word: String,
    pub mode: RankMode,
    pub max_candidates: usize,
    pub segmentations: Vec<ExplainSegmentation>,
    /// What `rank_word_with` returns for the same options.
    pub kept: Vec<ScoredCandidate>,
}

/// One token sequence and the candidates it expanded to.
#[derive(Debug, Serialize)]
pub struct ExplainSegmentation {
    pub tokens: Vec<ExplainToken>,
    pub candidates: Vec<ScoredCandidate>,
}

#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub token: String,
    pub position: Position,
    pub renderings: Vec<String>,
    /// False when the token missed its table and passed through.
    pub known: bool,
}

pub fn explain_word(lexicon: &Lexicon, word: &str, opts: &RankOptions) -> WordExplanation {
    let mut segmentations = Vec::new();
    let mut merged = Vec::new();

    for tokens in segment(word) {
        let len = tokens.len();
        let choices = token_choices(&lexicon.tables, &tokens);
        let explained_tokens = tokens
            .iter()
            .zip(&choices)
            .enumerate()
            .map(|(i, (token, renderings))| {
                let position = Position::of(i, len);
                ExplainToken {
                    token: token.clone(),
                    position,
                    renderings: renderings.iter().map(|r| r.to_string()).collect(),
                    known: lexicon.tables.table(position).renderings(token).is_some(),
                }
            })
            .collect();

        let candidates = expand(&lexicon.tables, &lexicon.frequencies, &tokens);
        merged.extend(candidates.iter().cloned());
        segmentations.push(ExplainSegmentation {
            tokens: explained_tokens,
            candidates,
        });
    }

    WordExplanation {
        word: word.to_string(),
        mode: opts.mode,
        max_candidates: opts.max_candidates,
        segmentations,
        kept: select(merged, opts),
    }
}

/// Render an explanation as human-readable text.
pub fn format_text(e: &WordExplanation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "word: {}  (mode: {:?}, keep: {})\n",
        e.word, e.mode, e.max_candidates
    ));

    for (i, seg) in e.segmentations.iter().enumerate() {
        let tokens: Vec<String> = seg
            .tokens
            .iter()
            .map(|t| {
                let mark = if t.known { "" } else { "?" };
                format!("{}{mark}", t.token)
            })
            .collect();
        out.push_str(&format!("\n#{:>2}: {}\n", i + 1, tokens.join(" | ")));

        for t in &seg.tokens {
            let renderings: Vec<&str> = t
                .renderings
                .iter()
                .map(|r| if r.is_empty() { "∅" } else { r.as_str() })
                .collect();
            out.push_str(&format!(
                "      {:<4} {:<9} {}\n",
                t.token,
                format!("{:?}", t.position),
                renderings.join(" ")
            ));
        }
        for c in &seg.candidates {
            out.push_str(&format!("    {:.4}  {}\n", c.confidence, c.word));
        }
    }

    out.push_str("\nkept:\n");
    for c in &e.kept {
        out.push_str(&format!("    {:.4}  {}\n", c.confidence, c.word));
    }
    out
}
