// src/models/calculation_state.rs
use crate::core::analyzer::{analyze, average_length, expansion_rate};
use crate::core::fit::calculate;
use crate::core::order::{SortDirection, SortField, sort_records};
use crate::models::{
    CharacterRecord, Dataset, DatasetConfig, LanguageProfile, LocalizationConfig, WidthTable,
};

/// One analysis session: the main dataset, its frequency table, the measured
/// element width, localization settings, and the derived fit results.
///
/// Owned by the caller and passed around explicitly; nothing here is global.
/// The derived fields stay `None` until a calculation succeeds, and a
/// skipped calculation leaves them untouched.
#[derive(Debug, Default)]
pub struct CalculationState {
    main_dataset: Dataset,
    dataset_config: DatasetConfig,
    character_data: Vec<CharacterRecord>,
    element_width: f64,
    localization: LocalizationConfig,
    max_char_length: Option<u64>,
    adjusted_max_char_length: Option<u64>,
}

impl CalculationState {
    #[inline]
    #[must_use]
    pub fn new(dataset_config: DatasetConfig) -> Self {
        Self {
            dataset_config,
            ..Self::default()
        }
    }

    /// Analyzes `dataset` as the main dataset, replacing any previous table
    /// wholesale. Widths measured for the previous table are discarded with
    /// it.
    pub fn process_dataset(&mut self, dataset: Dataset) {
        self.character_data = analyze(&dataset, &self.dataset_config);
        self.main_dataset = dataset;
    }

    /// Analyzes `dataset` as a localization language: builds its frequency
    /// table under the same filter config and derives its average length and
    /// expansion rate against the main dataset. The language list stays
    /// unique by code; an existing profile is replaced.
    pub fn process_language_dataset(&mut self, code: &str, dataset: &Dataset) {
        let profile = LanguageProfile {
            code: code.to_owned(),
            character_data: analyze(dataset, &self.dataset_config),
            average_length: average_length(dataset),
            expansion_rate: expansion_rate(dataset, &self.main_dataset),
        };
        self.add_localization_language(profile);
    }

    /// Replaces the filter configuration. Takes effect on the next
    /// `process_dataset` / `process_language_dataset` call; existing tables
    /// are not re-filtered retroactively.
    #[inline]
    pub fn set_dataset_config(&mut self, config: DatasetConfig) {
        self.dataset_config = config;
    }

    #[inline]
    pub fn set_element_width(&mut self, width: f64) {
        self.element_width = width;
    }

    #[inline]
    pub fn set_localization_enabled(&mut self, enabled: bool) {
        self.localization.enabled = enabled;
    }

    #[inline]
    pub fn set_use_generic_rates(&mut self, use_generic: bool) {
        self.localization.use_generic_rates = use_generic;
    }

    #[inline]
    pub fn set_generic_expansion_rate(&mut self, rate: f64) {
        self.localization.generic_expansion_rate = rate;
    }

    /// Adds a language profile, replacing any existing profile with the same
    /// code.
    pub fn add_localization_language(&mut self, language: LanguageProfile) {
        match self
            .localization
            .languages
            .iter_mut()
            .find(|existing| existing.code == language.code)
        {
            Some(existing) => *existing = language,
            None => self.localization.languages.push(language),
        }
    }

    /// Removes a language by code; removing an unknown code is a no-op.
    pub fn remove_localization_language(&mut self, code: &str) {
        self.localization
            .languages
            .retain(|language| language.code != code);
    }

    /// Records one externally measured glyph width. Unknown characters are
    /// ignored.
    pub fn set_character_width(&mut self, character: char, width: f64) {
        if let Some(record) = self
            .character_data
            .iter_mut()
            .find(|record| record.character == character)
        {
            record.width = Some(width);
        }
    }

    /// Applies a width table to the current frequency table. Characters the
    /// table cannot resolve keep their previous (possibly unmeasured) width,
    /// which in turn keeps the fit calculation skipped.
    pub fn apply_width_table(&mut self, table: &WidthTable) {
        for record in &mut self.character_data {
            if let Some(width) = table.lookup(record.character) {
                record.width = Some(width);
            }
        }
    }

    /// Re-orders the stored frequency table.
    #[inline]
    pub fn sort_character_data(&mut self, field: SortField, direction: SortDirection) {
        sort_records(&mut self.character_data, field, direction);
    }

    /// Runs the fit calculation over the current table, element width, and
    /// localization settings. A skipped calculation (missing widths, empty
    /// table, unusable element width) leaves both derived fields untouched;
    /// a successful one replaces them wholesale, so repeated calls with
    /// unchanged inputs reproduce the same values.
    pub fn calculate_results(&mut self) {
        if let Some(result) = calculate(&self.character_data, self.element_width, &self.localization)
        {
            self.max_char_length = Some(result.max_char_length);
            self.adjusted_max_char_length = result.adjusted_max_char_length;
        }
    }

    #[inline]
    #[must_use]
    pub fn main_dataset(&self) -> &Dataset {
        &self.main_dataset
    }

    #[inline]
    #[must_use]
    pub fn character_data(&self) -> &[CharacterRecord] {
        &self.character_data
    }

    #[inline]
    #[must_use]
    pub const fn dataset_config(&self) -> &DatasetConfig {
        &self.dataset_config
    }

    #[inline]
    #[must_use]
    pub const fn element_width(&self) -> f64 {
        self.element_width
    }

    #[inline]
    #[must_use]
    pub const fn localization(&self) -> &LocalizationConfig {
        &self.localization
    }

    #[inline]
    #[must_use]
    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.localization
            .languages
            .iter()
            .find(|language| language.code == code)
    }

    #[inline]
    #[must_use]
    pub const fn max_char_length(&self) -> Option<u64> {
        self.max_char_length
    }

    #[inline]
    #[must_use]
    pub const fn adjusted_max_char_length(&self) -> Option<u64> {
        self.adjusted_max_char_length
    }
}
