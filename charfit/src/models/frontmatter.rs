// src/models/frontmatter.rs
use serde::Deserialize;

/// YAML frontmatter recognized in sample files. A `lang` key routes the
/// sample into that language's dataset instead of the main one.
#[derive(Deserialize, Debug, Default)]
pub struct Frontmatter {
    pub lang: Option<String>,
}
