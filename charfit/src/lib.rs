// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::analyzer::{analyze, average_length, expansion_rate};
pub use crate::core::fit::{FitResult, calculate, weighted_width};
pub use crate::core::order::{SortDirection, SortField, compare, sort_records};
pub use crate::core::sample::{SampleSet, collect_samples};
pub use crate::models::{
    CalculationState, CharacterRecord, Dataset, DatasetConfig, LanguageProfile,
    LocalizationConfig, WidthTable,
};
