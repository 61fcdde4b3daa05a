// src/models/character_record.rs

/// Per-character statistics produced by the frequency analyzer.
///
/// `width` starts out `None` and is filled in later by an external width
/// measurement (e.g. a glyph width table). The fit calculation refuses to
/// run until every record has a width.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub character: char,
    pub count: u64,
    /// Percentage of all counted characters, in `[0, 100]`.
    pub frequency: f64,
    pub width: Option<f64>,
}

impl CharacterRecord {
    #[inline]
    #[must_use]
    pub const fn new(character: char, count: u64, frequency: f64) -> Self {
        Self {
            character,
            count,
            frequency,
            width: None,
        }
    }
}
