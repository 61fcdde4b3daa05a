// tests/integration_tests/localization_test.rs
use super::common::dataset;
use charfit::{CalculationState, DatasetConfig, LanguageProfile, WidthTable};

fn fitted_state() -> CalculationState {
    let mut state = CalculationState::new(DatasetConfig::default());
    state.process_dataset(dataset(&[("a", "aabbc")]));
    let widths: WidthTable = toml::from_str("default = 10.0").unwrap();
    state.apply_width_table(&widths);
    state.set_element_width(105.0);
    state
}

#[test]
fn test_generic_rate_adjustment() {
    let mut state = fitted_state();
    state.set_localization_enabled(true);
    state.set_use_generic_rates(true);
    state.set_generic_expansion_rate(1.3);
    state.calculate_results();

    assert_eq!(state.max_char_length(), Some(10));
    assert_eq!(state.adjusted_max_char_length(), Some(7), "floor(10 / 1.3)");
}

#[test]
fn test_measured_rates_from_language_datasets() {
    let mut state = fitted_state();
    // Main average length is 5; "de" sample is 15 chars -> rate 3.
    state.process_language_dataset("de", &dataset(&[("a", "aabbcaabbcaabbc")]));
    // A shorter language must not win over the maximum.
    state.process_language_dataset("sv", &dataset(&[("a", "abc")]));
    state.set_localization_enabled(true);
    state.set_use_generic_rates(false);
    state.calculate_results();

    assert_eq!(state.max_char_length(), Some(10));
    assert_eq!(state.adjusted_max_char_length(), Some(3), "floor(10 / 3.0)");
}

#[test]
fn test_empty_language_list_means_no_shrink() {
    let mut state = fitted_state();
    state.set_localization_enabled(true);
    state.set_use_generic_rates(false);
    state.calculate_results();

    assert_eq!(state.adjusted_max_char_length(), state.max_char_length());
}

#[test]
fn test_undefined_language_rate_is_tolerated() {
    let mut state = fitted_state();
    let mut unmeasured = LanguageProfile::new("xx");
    unmeasured.expansion_rate = None;
    state.add_localization_language(unmeasured);
    state.set_localization_enabled(true);
    state.set_use_generic_rates(false);
    state.calculate_results();

    assert_eq!(
        state.adjusted_max_char_length(),
        state.max_char_length(),
        "An undefined rate falls back to the floor of 1"
    );
}

#[test]
fn test_disabling_localization_clears_adjustment() {
    let mut state = fitted_state();
    state.set_localization_enabled(true);
    state.set_use_generic_rates(true);
    state.calculate_results();
    assert!(state.adjusted_max_char_length().is_some());

    state.set_localization_enabled(false);
    state.calculate_results();
    assert_eq!(state.adjusted_max_char_length(), None);
}
