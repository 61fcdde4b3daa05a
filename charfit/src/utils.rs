// src/utils.rs
use crate::models::{CharacterRecord, Frontmatter};
use anyhow::{Result, anyhow};

/// A digit for filtering and partitioning purposes.
#[inline]
#[must_use]
pub fn is_digit_char(character: char) -> bool {
    character.is_numeric()
}

/// A word character: alphanumeric or underscore.
#[inline]
#[must_use]
pub fn is_word_char(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// A symbol: neither a word character nor whitespace.
#[inline]
#[must_use]
pub fn is_symbol_char(character: char) -> bool {
    !is_word_char(character) && !character.is_whitespace()
}

#[inline]
#[must_use]
pub fn is_space_char(character: char) -> bool {
    character.is_whitespace()
}

/// Parses the YAML frontmatter block at the start of a sample file, if any.
/// Content without a leading `---` line yields the default (no `lang`).
///
/// # Errors
///
/// Returns an error if a frontmatter block is present but is not valid YAML.
#[inline]
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter> {
    let mut content_iter = content.lines();

    // Check for frontmatter delimiter
    if content_iter.next() != Some("---") {
        return Ok(Frontmatter::default());
    }

    // Collect frontmatter content
    let mut frontmatter_str = String::new();
    for line in content_iter {
        if line == "---" {
            break;
        }
        frontmatter_str.push_str(line);
        frontmatter_str.push('\n');
    }

    serde_yaml_ng::from_str(&frontmatter_str)
        .map_err(|e| anyhow!("Failed to parse frontmatter: {}", e))
}

/// Returns the sample body with any frontmatter block removed, so delimiter
/// lines and `lang` keys never leak into the character counts.
#[inline]
#[must_use]
pub fn strip_frontmatter(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first() != Some(&"---") {
        return content.to_owned();
    }
    lines.iter().skip(1).position(|&line| line == "---").map_or_else(
        || content.to_owned(),
        |end_index| {
            lines
                .get(end_index.saturating_add(2)..)
                .map_or_else(String::new, |body| body.join("\n"))
        },
    )
}

#[inline]
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Printable form of a counted character; whitespace is shown escaped so
/// table rows stay visible.
#[inline]
#[must_use]
pub fn display_char(character: char) -> String {
    match character {
        ' ' => String::from("(space)"),
        c if c.is_whitespace() => c.escape_debug().to_string(),
        c => c.to_string(),
    }
}

pub fn print_frequency_table(records: &[CharacterRecord], top: usize) {
    for record in records.iter().take(top) {
        println!(
            "{:8}  {:6.2}%  {}",
            record.count,
            record.frequency,
            display_char(record.character)
        );
    }
}
