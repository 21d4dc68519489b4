use crate::dict::{
    ConversionTable, DictError, FrequencyIndex, Position, PositionTables, WordFrequency,
};

#[test]
fn test_position_of() {
    assert_eq!(Position::of(0, 1), Position::Beginning);
    assert_eq!(Position::of(0, 3), Position::Beginning);
    assert_eq!(Position::of(1, 3), Position::Middle);
    assert_eq!(Position::of(2, 3), Position::Ending);
    assert_eq!(Position::of(1, 2), Position::Ending);
}

#[test]
fn test_parse_conversion_table() {
    let text = "a ا آ\n\n  sh   ش  \nh ه nothing\n";
    let table = ConversionTable::parse(text).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.renderings("a"), Some(vec!["ا", "آ"]));
    assert_eq!(table.renderings("sh"), Some(vec!["ش"]));
    assert_eq!(table.renderings("q"), None);
}

#[test]
fn test_empty_sentinel_renders_as_empty_string() {
    let table = ConversionTable::parse("h ه nothing\n").unwrap();
    assert_eq!(table.renderings("h"), Some(vec!["ه", ""]));
}

#[test]
fn test_later_line_replaces_earlier() {
    let table = ConversionTable::parse("a ا\na آ\n").unwrap();
    assert_eq!(table.renderings("a"), Some(vec!["آ"]));
}

#[test]
fn test_token_without_outputs_is_error() {
    let err = ConversionTable::parse("a ا\nb\n").unwrap_err();
    match err {
        DictError::Parse { line, ref reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("\"b\""), "reason: {reason}");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_from_entries_drops_empty_outputs() {
    let table = ConversionTable::from_entries([("a", vec!["ا"]), ("b", Vec::<&str>::new())]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.renderings("b"), None);
}

#[test]
fn test_position_tables_select() {
    let tables = PositionTables::new(
        ConversionTable::from_entries([("a", vec!["آ"])]),
        ConversionTable::from_entries([("a", vec!["ا"])]),
        ConversionTable::from_entries([("a", vec!["ا", "ه"])]),
    );
    assert_eq!(tables.table(Position::Beginning).renderings("a"), Some(vec!["آ"]));
    assert_eq!(tables.table(Position::Middle).renderings("a"), Some(vec!["ا"]));
    assert_eq!(tables.table(Position::Ending).renderings("a"), Some(vec!["ا", "ه"]));
}

#[test]
fn test_parse_frequency_index() {
    let text = "# comment line\nسلام 120\n\n  خوب 7 extra\n";
    let index = FrequencyIndex::parse(text).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.frequency("سلام"), 120);
    assert_eq!(index.frequency("خوب"), 7);
}

#[test]
fn test_missing_word_is_zero() {
    let index = FrequencyIndex::from_entries([("سام", 5)]);
    assert_eq!(index.frequency("سام"), 5);
    assert_eq!(index.frequency("سآم"), 0);
}

#[test]
fn test_frequency_missing_count_is_error() {
    let err = FrequencyIndex::parse("سلام 3\nخوب\n").unwrap_err();
    assert!(matches!(err, DictError::Parse { line: 2, .. }));
}

#[test]
fn test_frequency_non_integer_is_error() {
    let err = FrequencyIndex::parse("سلام many\n").unwrap_err();
    assert!(matches!(err, DictError::Parse { line: 1, .. }));
    assert!(err.to_string().contains("many"));
}
