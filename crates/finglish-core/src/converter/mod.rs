//! Finglish-to-Persian conversion.
//!
//! Each word is segmented into token sequences, every sequence is expanded
//! through the position tables into scored Persian spellings, the merged
//! list is cut to a few candidates per word, and the per-word candidates
//! are combined into ranked phrases.

mod compose;
mod expand;
pub mod explain;
mod rank;
#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use compose::{convert, convert_with};
pub use expand::expand;
pub use explain::{explain_word, WordExplanation};
pub use rank::{rank_word, rank_word_with, RankMode, RankOptions};

/// One Persian spelling of a word.
///
/// `confidence` is relative to the batch the candidate was generated in:
/// the most frequent spelling of a token sequence scores 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub word: String,
    pub confidence: f64,
}

/// One Persian rendering of a whole phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseCandidate {
    pub phrase: String,
    /// Product of the chosen words' confidences.
    pub confidence: f64,
}

trait Scored {
    fn confidence(&self) -> f64;
}

impl Scored for ScoredCandidate {
    fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl Scored for PhraseCandidate {
    fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Stable sort, highest confidence first. Ties keep generation order.
fn sort_by_confidence<T: Scored>(items: &mut [T]) {
    items.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
}

/// Every way to pick one element from each list, last list varying fastest.
///
/// Zero lists yield a single empty pick; any empty list yields nothing.
fn cartesian_product<T>(lists: &[Vec<T>]) -> Vec<Vec<&T>> {
    lists.iter().fold(vec![Vec::new()], |acc, options| {
        acc.iter()
            .flat_map(|prefix| {
                options.iter().map(move |item| {
                    let mut pick = prefix.clone();
                    pick.push(item);
                    pick
                })
            })
            .collect()
    })
}
