use crate::converter::testutil::{lexicon, sam_lexicon, test_lexicon};
use crate::converter::{convert_with, PhraseCandidate, RankOptions};

fn pairs(candidates: &[PhraseCandidate]) -> Vec<(&str, f64)> {
    candidates
        .iter()
        .map(|c| (c.phrase.as_str(), c.confidence))
        .collect()
}

#[test]
fn test_convert_single_word() {
    let lex = sam_lexicon();
    let result = convert_with(&lex, "sam", &RankOptions::default());
    assert_eq!(pairs(&result), vec![("سام", 1.0)]);
}

#[test]
fn test_convert_two_words() {
    let lex = test_lexicon();
    let result = convert_with(&lex, "salam shab", &RankOptions::default());

    assert_eq!(result.len(), 9);
    assert_eq!(result[0].phrase, "سلام شب");
    assert_eq!(result[0].confidence, 1.0);
    assert_eq!(result[1].phrase, "صلام شب");
    assert!((result[1].confidence - 3.0 / 900.0).abs() < 1e-12);

    // zero-confidence tail follows word order, then candidate order
    let tail: Vec<&str> = result[2..].iter().map(|c| c.phrase.as_str()).collect();
    assert_eq!(
        tail,
        vec![
            "سلام شاب",
            "سلام سهاب",
            "صلام شاب",
            "صلام سهاب",
            "سالام شب",
            "سالام شاب",
            "سالام سهاب",
        ]
    );
}

#[test]
fn test_convert_ignores_extra_whitespace() {
    let lex = test_lexicon();
    let spaced = convert_with(&lex, "  khoob \t bekheir  ", &RankOptions::default());
    let plain = convert_with(&lex, "khoob bekheir", &RankOptions::default());

    assert_eq!(spaced, plain);
    assert_eq!(spaced[0].phrase, "خوب بخیر");
    assert_eq!(spaced[0].confidence, 1.0);
}

#[test]
fn test_convert_empty_phrase() {
    let lex = test_lexicon();
    for phrase in ["", "   "] {
        let result = convert_with(&lex, phrase, &RankOptions::default());
        assert_eq!(pairs(&result), vec![("", 1.0)]);
    }
}

#[test]
fn test_convert_unknown_letters() {
    let lex = lexicon(&[], &[], &[], &[]);
    let result = convert_with(&lex, "xy z", &RankOptions::default());
    assert_eq!(pairs(&result), vec![("xy z", 0.0)]);
}
