//! Splitting a transliterated word into letter tokens.
//!
//! A Latin cluster like `sh` may stand for one Persian letter or two, so a
//! word has several plausible segmentations. `segment` enumerates all of
//! them in a fixed order; the converter expands each one independently.

use tracing::{debug, debug_span};

/// Digraphs that usually denote a single Persian consonant.
const DIGRAPHS: &[&str] = &["kh", "gh", "ch", "sh"];

/// Two-letter spellings of the long vowel `u`.
const U_SPELLINGS: &[&str] = &["oo", "ou"];

/// Every token sequence for `word`, in enumeration order.
///
/// An empty word has no segmentations.
pub fn segment(word: &str) -> Vec<Vec<String>> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let _span = debug_span!("segment", word).entered();
    let result = variations(&chars);
    debug!(segmentations = result.len());
    result
}

fn variations(rest: &[char]) -> Vec<Vec<String>> {
    let head: String = rest.iter().take(3).collect();

    if rest.len() == 1 {
        return vec![vec![rest[0].to_string()]];
    }
    if U_SPELLINGS.contains(&head.as_str()) {
        return vec![vec!["u".to_string()]];
    }
    if head == "kha" && rest.len() == 3 {
        return vec![
            vec!["kha".to_string()],
            vec!["kh".to_string(), "a".to_string()],
        ];
    }
    if DIGRAPHS.contains(&head.as_str()) {
        return vec![vec![head]];
    }
    if rest.len() == 2 && rest[0] == rest[1] {
        return vec![vec![rest[0].to_string()]];
    }

    let pair: String = rest[..2].iter().collect();
    if U_SPELLINGS.contains(&pair.as_str()) {
        return prefixed(&["u"], &rest[2..]);
    }
    if head == "kha" {
        let mut out = prefixed(&["kha"], &rest[3..]);
        out.extend(prefixed(&["kh", "a"], &rest[3..]));
        out.extend(prefixed(&["k", "h", "a"], &rest[3..]));
        return out;
    }
    if DIGRAPHS.contains(&pair.as_str()) {
        let mut out = prefixed(&[pair.as_str()], &rest[2..]);
        out.extend(prefixed(&[&pair[..1]], &rest[1..]));
        return out;
    }
    let first = rest[0].to_string();
    if rest[0] == rest[1] {
        return prefixed(&[first.as_str()], &rest[2..]);
    }
    prefixed(&[first.as_str()], &rest[1..])
}

/// `tokens` followed by each segmentation of `rest`.
fn prefixed(tokens: &[&str], rest: &[char]) -> Vec<Vec<String>> {
    variations(rest)
        .into_iter()
        .map(|tail| {
            let mut seq: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            seq.extend(tail);
            seq
        })
        .collect()
}
