// src/models/language_profile.rs
use crate::models::CharacterRecord;

/// Frequency profile of a localization target language, with its measured
/// text-expansion rate relative to the main dataset.
///
/// `average_length` and `expansion_rate` are `None` when they cannot be
/// derived (empty dataset, or a main dataset with average length zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageProfile {
    pub code: String,
    pub character_data: Vec<CharacterRecord>,
    pub average_length: Option<f64>,
    pub expansion_rate: Option<f64>,
}

impl LanguageProfile {
    #[inline]
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            ..Self::default()
        }
    }
}
