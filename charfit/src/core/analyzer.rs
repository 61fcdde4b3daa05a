// src/core/analyzer.rs
use indexmap::IndexMap;

use crate::core::order::{SortDirection, SortField, sort_records};
use crate::models::{CharacterRecord, Dataset, DatasetConfig};
use crate::utils::{is_digit_char, is_space_char, is_symbol_char};

/// Builds a character-frequency table for a dataset under the given filter
/// configuration.
///
/// All samples are joined with a single space separator, in dataset
/// insertion order, and iterated at code-point granularity. Characters
/// matching an enabled filter are dropped entirely; they contribute to
/// neither count nor total. The result is unique by character, carries
/// frequencies as percentages summing to 100, and is sorted by character in
/// ascending order. An empty or fully filtered dataset yields an empty
/// table.
#[inline]
#[must_use]
pub fn analyze(dataset: &Dataset, config: &DatasetConfig) -> Vec<CharacterRecord> {
    let combined = dataset
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: IndexMap<char, u64> = IndexMap::new();
    for character in combined.chars() {
        if config.ignore_capitals {
            // Simple locale-insensitive fold; a multi-char expansion is
            // filtered and tallied per resulting scalar.
            for folded in character.to_lowercase() {
                tally(&mut counts, folded, config);
            }
        } else {
            tally(&mut counts, character, config);
        }
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    let mut records: Vec<CharacterRecord> = counts
        .into_iter()
        .map(|(character, count)| {
            CharacterRecord {
                character,
                count,
                frequency: (count as f64 / total as f64) * 100.0,
                width: None,
            }
        })
        .collect();

    sort_records(&mut records, SortField::default(), SortDirection::default());
    records
}

fn tally(counts: &mut IndexMap<char, u64>, character: char, config: &DatasetConfig) {
    if (config.ignore_numbers && is_digit_char(character))
        || (config.ignore_symbols && is_symbol_char(character))
        || (config.ignore_spaces && is_space_char(character))
    {
        return;
    }
    let entry = counts.entry(character).or_insert(0);
    *entry = entry.saturating_add(1);
}

/// Mean sample length of a dataset, in code points.
///
/// Returns `None` for an empty dataset: the 0/0 case is surfaced as
/// "undefined" rather than NaN.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn average_length(dataset: &Dataset) -> Option<f64> {
    if dataset.is_empty() {
        return None;
    }
    let total: usize = dataset.values().map(|value| value.chars().count()).sum();
    Some(total as f64 / dataset.len() as f64)
}

/// Text-expansion rate of a language dataset relative to the main dataset:
/// language average length / main average length.
///
/// `None` when either average is undefined or the main average is zero, so
/// the division guard is explicit and no NaN/Infinity escapes.
#[inline]
#[must_use]
pub fn expansion_rate(language: &Dataset, main: &Dataset) -> Option<f64> {
    let language_avg = average_length(language)?;
    let main_avg = average_length(main)?;
    if main_avg == 0.0 {
        return None;
    }
    Some(language_avg / main_avg)
}
