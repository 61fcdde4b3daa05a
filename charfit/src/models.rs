// src/models.rs
pub mod calculation_state;
pub mod character_record;
pub mod dataset_config;
pub mod frontmatter;
pub mod language_profile;
pub mod localization_config;
pub mod width_table;

pub use calculation_state::CalculationState;
pub use character_record::CharacterRecord;
pub use dataset_config::DatasetConfig;
pub use frontmatter::Frontmatter;
pub use language_profile::LanguageProfile;
pub use localization_config::LocalizationConfig;
pub use width_table::WidthTable;

/// Keyed collection of text samples. Keys carry no semantics; only the
/// values are analyzed. Insertion order is preserved so analysis output is
/// deterministic for a given loading order.
pub type Dataset = indexmap::IndexMap<String, String>;
