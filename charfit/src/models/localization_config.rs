// src/models/localization_config.rs
use crate::models::LanguageProfile;

pub const DEFAULT_GENERIC_EXPANSION_RATE: f64 = 1.3;

/// Settings for the localization adjustment of the fit result.
///
/// When `use_generic_rates` is set, `generic_expansion_rate` is applied;
/// otherwise the largest measured expansion rate among `languages` is used
/// (floored at 1). `languages` is unique by code.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationConfig {
    pub enabled: bool,
    pub use_generic_rates: bool,
    pub generic_expansion_rate: f64,
    pub languages: Vec<LanguageProfile>,
}

impl Default for LocalizationConfig {
    #[inline]
    fn default() -> Self {
        Self {
            enabled: false,
            use_generic_rates: true,
            generic_expansion_rate: DEFAULT_GENERIC_EXPANSION_RATE,
            languages: Vec::new(),
        }
    }
}
