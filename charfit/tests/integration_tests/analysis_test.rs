// tests/integration_tests/analysis_test.rs
use super::common::dataset;
use charfit::{DatasetConfig, analyze};

#[test]
fn test_analysis_counts_and_frequencies() {
    let records = analyze(&dataset(&[("a", "aabbc")]), &DatasetConfig::default());

    let summary: Vec<(char, u64, f64)> = records
        .iter()
        .map(|r| (r.character, r.count, r.frequency))
        .collect();
    assert_eq!(
        summary,
        vec![('a', 2, 40.0), ('b', 2, 40.0), ('c', 1, 20.0)],
        "Sorted ascending by character with exact percentages"
    );
}

#[test]
fn test_analysis_applies_all_filters_together() {
    let config = DatasetConfig {
        ignore_capitals: true,
        ignore_numbers: true,
        ignore_symbols: true,
        ignore_spaces: true,
    };
    let records = analyze(
        &dataset(&[("a", "Mixed CASE 123 !!"), ("b", "more-text_42")]),
        &config,
    );

    assert!(
        records
            .iter()
            .all(|r| r.character.is_alphabetic() || r.character == '_'),
        "Only folded letters and underscores survive"
    );
    assert!(records.iter().all(|r| !r.character.is_uppercase()));

    // "mixedcase" + "moretext_" letters survive: 9 + 9 = 18 characters.
    let total: u64 = records.iter().map(|r| r.count).sum();
    assert_eq!(total, 18);

    let sum: f64 = records.iter().map(|r| r.frequency).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_analysis_multibyte_text() {
    let records = analyze(&dataset(&[("a", "héhé")]), &DatasetConfig::default());

    let e_acute = records.iter().find(|r| r.character == 'é').unwrap();
    assert_eq!(e_acute.count, 2);
    assert_eq!(e_acute.frequency, 50.0);
}
