// src/core/order.rs
use clap::ValueEnum;
use std::cmp::Ordering;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::models::CharacterRecord;
use crate::utils::{is_digit_char, is_symbol_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortField {
    #[default]
    Character,
    Count,
    Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Partition rank for character ordering: plain word/space characters sort
/// before digits, digits before symbols.
fn char_rank(character: char) -> u8 {
    if is_symbol_char(character) {
        2
    } else if is_digit_char(character) {
        1
    } else {
        0
    }
}

/// Case- and accent-insensitive comparison key: canonical decomposition with
/// combining marks removed, lowercased.
fn base_fold(character: char) -> String {
    let mut folded = String::new();
    decompose_canonical(character, |decomposed| {
        if !is_combining_mark(decomposed) {
            folded.extend(decomposed.to_lowercase());
        }
    });
    folded
}

/// Compares two character records by the given field and direction.
///
/// For [`SortField::Character`] the partition rank applies first, then the
/// base-folded characters are compared lexicographically. Numeric fields
/// compare their values directly.
///
/// [`SortDirection::Descending`] reverses the entire computed ordering,
/// partition rank included: symbols sort last only under ascending order.
#[inline]
#[must_use]
pub fn compare(
    a: &CharacterRecord,
    b: &CharacterRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ordering = match field {
        SortField::Character => char_rank(a.character)
            .cmp(&char_rank(b.character))
            .then_with(|| base_fold(a.character).cmp(&base_fold(b.character))),
        SortField::Count => a.count.cmp(&b.count),
        SortField::Frequency => a
            .frequency
            .partial_cmp(&b.frequency)
            .unwrap_or(Ordering::Equal),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable sort of a character table by field and direction.
#[inline]
pub fn sort_records(records: &mut [CharacterRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| compare(a, b, field, direction));
}
