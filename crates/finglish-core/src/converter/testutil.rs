//! Synthetic lexicons for converter tests.

use crate::dict::{ConversionTable, FrequencyIndex, Lexicon, PositionTables};

fn table(entries: &[(&str, &[&str])]) -> ConversionTable {
    ConversionTable::from_entries(entries.iter().map(|(k, v)| (*k, v.to_vec())))
}

pub fn lexicon(
    beginning: &[(&str, &[&str])],
    middle: &[(&str, &[&str])],
    ending: &[(&str, &[&str])],
    freq: &[(&str, u64)],
) -> Lexicon {
    Lexicon::from_parts(
        PositionTables::new(table(beginning), table(middle), table(ending)),
        FrequencyIndex::from_entries(freq.iter().copied()),
    )
}

/// Beginning `s → س`, middle `a → ا`, ending `m → م`; `سام` seen 5 times.
pub fn sam_lexicon() -> Lexicon {
    lexicon(
        &[("s", &["س"])],
        &[("a", &["ا"])],
        &[("m", &["م"])],
        &[("سام", 5)],
    )
}

/// A small everyday lexicon covering `salam`, `khoob`, `shab`, `bekheir`.
pub fn test_lexicon() -> Lexicon {
    lexicon(
        &[
            ("s", &["س", "ص", "ث"]),
            ("k", &["ک"]),
            ("kh", &["خ"]),
            ("sh", &["ش"]),
            ("b", &["ب"]),
            ("h", &["ه", "ح"]),
            ("a", &["ا", "آ"]),
            ("u", &["او"]),
        ],
        &[
            ("a", &["ا", "nothing"]),
            ("l", &["ل"]),
            ("u", &["و"]),
            ("e", &["nothing"]),
            ("i", &["ی"]),
            ("kh", &["خ"]),
            ("k", &["ک"]),
            ("h", &["ه", "ح"]),
        ],
        &[
            ("m", &["م"]),
            ("b", &["ب"]),
            ("r", &["ر"]),
            ("h", &["ه"]),
        ],
        &[
            ("سلام", 900),
            ("صلام", 3),
            ("خوب", 500),
            ("شب", 400),
            ("بخیر", 300),
        ],
    )
}
