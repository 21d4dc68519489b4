use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::dict::Lexicon;
use crate::segment::segment;
use crate::settings::settings;

use super::expand::expand;
use super::{sort_by_confidence, ScoredCandidate};

/// How the per-word candidate list is cut down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Keep the first candidates in segmentation order. Earlier
    /// segmentations win slots even over better-scored later ones.
    #[default]
    Enumeration,
    /// Keep the highest-confidence candidates across all segmentations.
    Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub max_candidates: usize,
    pub mode: RankMode,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_candidates: 3,
            mode: RankMode::Enumeration,
        }
    }
}

/// Cut the merged candidates of all segmentations down per `opts`.
pub(super) fn select(mut merged: Vec<ScoredCandidate>, opts: &RankOptions) -> Vec<ScoredCandidate> {
    if opts.mode == RankMode::Confidence {
        sort_by_confidence(&mut merged);
    }
    merged.truncate(opts.max_candidates);
    merged
}

/// Rank a single word with the global settings.
pub fn rank_word(lexicon: &Lexicon, word: &str) -> Vec<ScoredCandidate> {
    rank_word_with(lexicon, word, &settings().rank_options())
}

/// Expand every segmentation of `word` and keep at most
/// `opts.max_candidates` spellings.
pub fn rank_word_with(lexicon: &Lexicon, word: &str, opts: &RankOptions) -> Vec<ScoredCandidate> {
    let _span = debug_span!("rank_word", word).entered();

    let mut merged = Vec::new();
    for tokens in segment(word) {
        merged.extend(expand(&lexicon.tables, &lexicon.frequencies, &tokens));
    }
    let total = merged.len();
    let kept = select(merged, opts);

    debug!(total, kept = kept.len());
    kept
}
