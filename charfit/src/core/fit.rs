// src/core/fit.rs
use crate::models::{CharacterRecord, LocalizationConfig};

/// Outcome of a successful fit calculation.
///
/// `adjusted_max_char_length` is `None` when localization is disabled or the
/// effective expansion rate is degenerate (non-finite or non-positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub max_char_length: u64,
    pub adjusted_max_char_length: Option<u64>,
}

/// Frequency-weighted average glyph width: Σ (frequency / 100) × width.
///
/// An unmeasured width counts as 0 here; [`calculate`] rejects tables with
/// unmeasured widths before this runs.
#[inline]
#[must_use]
pub fn weighted_width(character_data: &[CharacterRecord]) -> f64 {
    character_data
        .iter()
        .map(|record| (record.frequency / 100.0) * record.width.unwrap_or(0.0))
        .sum()
}

/// Effective expansion rate under the given localization settings: the
/// generic rate, or the largest measured language rate floored at 1. An
/// empty language list therefore reduces to 1 (no adjustment).
#[inline]
#[must_use]
pub fn effective_expansion_rate(localization: &LocalizationConfig) -> f64 {
    if localization.use_generic_rates {
        localization.generic_expansion_rate
    } else {
        localization
            .languages
            .iter()
            .filter_map(|language| language.expansion_rate)
            .filter(|rate| rate.is_finite())
            .fold(1.0, f64::max)
    }
}

/// Computes how many characters of typical text fit into `element_width`
/// pixels, given the observed frequency distribution and measured glyph
/// widths.
///
/// Returns `None` when the computation must be skipped, in which case the
/// caller keeps its prior state:
/// - `element_width` is non-finite, zero, or negative;
/// - `character_data` is empty;
/// - any record is missing its width (no partial results — retry once all
///   widths are measured);
/// - the weighted width is non-finite or zero (division guard).
#[inline]
#[must_use]
pub fn calculate(
    character_data: &[CharacterRecord],
    element_width: f64,
    localization: &LocalizationConfig,
) -> Option<FitResult> {
    if !element_width.is_finite() || element_width <= 0.0 {
        return None;
    }
    if character_data.is_empty() {
        return None;
    }
    if character_data.iter().any(|record| record.width.is_none()) {
        return None;
    }

    let average_width = weighted_width(character_data);
    if !average_width.is_finite() || average_width <= 0.0 {
        return None;
    }

    #[expect(clippy::as_conversions, reason = "Floored non-negative value")]
    #[expect(clippy::cast_possible_truncation, reason = "Floored non-negative value")]
    #[expect(clippy::cast_sign_loss, reason = "Floored non-negative value")]
    let max_char_length = (element_width / average_width).floor() as u64;

    let adjusted_max_char_length = if localization.enabled {
        let rate = effective_expansion_rate(localization);
        if rate.is_finite() && rate > 0.0 {
            #[expect(clippy::as_conversions, reason = "Floored non-negative value")]
            #[expect(clippy::cast_possible_truncation, reason = "Floored non-negative value")]
            #[expect(clippy::cast_sign_loss, reason = "Floored non-negative value")]
            #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
            let adjusted = (max_char_length as f64 / rate).floor() as u64;
            Some(adjusted)
        } else {
            None
        }
    } else {
        None
    };

    Some(FitResult {
        max_char_length,
        adjusted_max_char_length,
    })
}
