// src/models/width_table.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Measured glyph widths, loaded from a TOML file:
///
/// ```toml
/// default = 8.0
///
/// [widths]
/// "a" = 7.2
/// " " = 3.5
/// ```
///
/// Keys must be single characters. `default` is the fallback for characters
/// missing from the table; without it, unlisted characters stay unmeasured
/// and the fit calculation is skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WidthTable {
    pub default: Option<f64>,
    pub widths: BTreeMap<String, f64>,
}

impl WidthTable {
    /// Loads a width table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read width table: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse width table: {}", path.display()))
    }

    #[inline]
    #[must_use]
    pub fn lookup(&self, character: char) -> Option<f64> {
        let mut buf = [0u8; 4];
        let key: &str = character.encode_utf8(&mut buf);
        self.widths.get(key).copied().or(self.default)
    }
}
