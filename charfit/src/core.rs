// src/core.rs
pub mod analyzer;
pub mod fit;
pub mod order;
pub mod sample;

pub use analyzer::{analyze, average_length, expansion_rate};
pub use fit::{FitResult, calculate, weighted_width};
pub use order::{SortDirection, SortField, compare, sort_records};
pub use sample::{SampleSet, collect_samples};
