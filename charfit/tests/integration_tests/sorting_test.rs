// tests/integration_tests/sorting_test.rs
use super::common::dataset;
use charfit::{DatasetConfig, SortDirection, SortField, analyze, sort_records};

#[test]
fn test_default_output_partitions_characters() {
    let records = analyze(&dataset(&[("a", "b1! a2?")]), &DatasetConfig::default());
    let characters: Vec<char> = records.iter().map(|r| r.character).collect();
    assert_eq!(characters, vec![' ', 'a', 'b', '1', '2', '!', '?']);
}

#[test]
fn test_descending_is_a_full_reversal() {
    let mut ascending = analyze(&dataset(&[("a", "b1! a2?")]), &DatasetConfig::default());
    let mut descending = ascending.clone();

    sort_records(&mut ascending, SortField::Character, SortDirection::Ascending);
    sort_records(
        &mut descending,
        SortField::Character,
        SortDirection::Descending,
    );

    let mut reversed: Vec<char> = ascending.iter().map(|r| r.character).collect();
    reversed.reverse();
    let descending_chars: Vec<char> = descending.iter().map(|r| r.character).collect();
    assert_eq!(
        descending_chars, reversed,
        "Symbols sort first under descending order"
    );
}

#[test]
fn test_sort_by_count_descending() {
    let mut records = analyze(&dataset(&[("a", "aaabbc")]), &DatasetConfig::default());
    sort_records(&mut records, SortField::Count, SortDirection::Descending);

    let counts: Vec<u64> = records.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(records[0].character, 'a');
}
