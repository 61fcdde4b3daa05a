// src/models/dataset_config.rs
use serde::Deserialize;

/// Filter switches applied while counting characters. Each switch drops the
/// matching characters entirely; they contribute to neither count nor total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Fold characters to lower case before filtering and counting.
    pub ignore_capitals: bool,
    /// Drop numeric digits.
    pub ignore_numbers: bool,
    /// Drop characters that are neither word characters nor whitespace.
    pub ignore_symbols: bool,
    /// Drop whitespace.
    pub ignore_spaces: bool,
}
