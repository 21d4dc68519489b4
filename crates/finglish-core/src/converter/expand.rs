use tracing::{debug, debug_span};

use crate::dict::{Position, PositionTables, WordFrequency};

use super::{cartesian_product, sort_by_confidence, ScoredCandidate};

/// Renderings for each token of `tokens`, chosen by position.
///
/// A token missing from its table passes through unchanged.
pub(super) fn token_choices<'a>(tables: &'a PositionTables, tokens: &'a [String]) -> Vec<Vec<&'a str>> {
    let len = tokens.len();
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            tables
                .table(Position::of(i, len))
                .renderings(token)
                .unwrap_or_else(|| vec![token.as_str()])
        })
        .collect()
}

/// Expand one token sequence into every Persian spelling it can produce.
///
/// Candidates are scored by frequency relative to the most frequent
/// spelling in this batch and sorted by confidence; ties keep table order.
pub fn expand(
    tables: &PositionTables,
    freq: &dyn WordFrequency,
    tokens: &[String],
) -> Vec<ScoredCandidate> {
    let _span = debug_span!("expand", tokens = tokens.len()).entered();

    let choices = token_choices(tables, tokens);
    let spellings: Vec<(String, u64)> = cartesian_product(&choices)
        .into_iter()
        .map(|pick| {
            let word: String = pick.into_iter().copied().collect();
            let count = freq.frequency(&word);
            (word, count)
        })
        .collect();

    if spellings.is_empty() {
        return vec![ScoredCandidate {
            word: tokens.concat(),
            confidence: 1.0,
        }];
    }

    let max_freq = spellings.iter().map(|(_, f)| *f).max().unwrap_or(0);
    let mut candidates: Vec<ScoredCandidate> = spellings
        .into_iter()
        .map(|(word, count)| ScoredCandidate {
            word,
            confidence: if count != 0 {
                count as f64 / max_freq as f64
            } else {
                0.0
            },
        })
        .collect();
    sort_by_confidence(&mut candidates);

    debug!(candidates = candidates.len(), max_freq);
    candidates
}
