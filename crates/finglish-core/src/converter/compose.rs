use tracing::{debug, debug_span};

use crate::dict::Lexicon;
use crate::settings::settings;

use super::rank::{rank_word_with, RankOptions};
use super::{cartesian_product, sort_by_confidence, PhraseCandidate, ScoredCandidate};

/// Convert a whitespace-separated phrase with the global settings.
pub fn convert(lexicon: &Lexicon, phrase: &str) -> Vec<PhraseCandidate> {
    convert_with(lexicon, phrase, &settings().rank_options())
}

/// Convert a phrase into every combination of per-word candidates, best
/// first.
///
/// An empty phrase yields one empty candidate with confidence 1.0; a word
/// without candidates empties the whole result.
pub fn convert_with(lexicon: &Lexicon, phrase: &str, opts: &RankOptions) -> Vec<PhraseCandidate> {
    let _span = debug_span!("convert", phrase).entered();

    let per_word: Vec<Vec<ScoredCandidate>> = phrase
        .split_whitespace()
        .map(|word| rank_word_with(lexicon, word, opts))
        .collect();

    let mut results: Vec<PhraseCandidate> = cartesian_product(&per_word)
        .into_iter()
        .map(|pick| PhraseCandidate {
            phrase: pick
                .iter()
                .map(|c| c.word.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            confidence: pick.iter().map(|c| c.confidence).product(),
        })
        .collect();
    sort_by_confidence(&mut results);

    debug!(words = per_word.len(), results = results.len());
    results
}
