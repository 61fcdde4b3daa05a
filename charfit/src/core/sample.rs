// src/core/sample.rs
use anyhow::Result;
use glob::Pattern;
use std::env;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::models::Dataset;
use crate::utils::{is_hidden, parse_frontmatter, strip_frontmatter};

/// Text samples collected from a directory, split into the main dataset and
/// per-language datasets keyed by frontmatter `lang` codes.
#[derive(Debug, Default)]
pub struct SampleSet {
    pub main: Dataset,
    pub languages: Vec<(String, Dataset)>,
}

impl SampleSet {
    fn language_mut(&mut self, code: &str) -> &mut Dataset {
        let index = match self.languages.iter().position(|(c, _)| c == code) {
            Some(index) => index,
            None => {
                self.languages.push((code.to_owned(), Dataset::new()));
                self.languages.len() - 1
            }
        };
        &mut self.languages[index].1
    }
}

/// Collects text samples from a directory and its subdirectories.
///
/// Each readable UTF-8 file becomes one sample, keyed by its path relative
/// to `dir`. Files are visited in sorted-path order so dataset insertion
/// order is deterministic. A YAML frontmatter block with a `lang` code
/// routes the sample into that language's dataset; the frontmatter itself is
/// stripped from the analyzed body. Hidden files and entries matching an
/// exclude pattern are skipped, as are files that are not valid UTF-8.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
pub fn collect_samples(dir: &PathBuf, exclude: &[Pattern]) -> Result<SampleSet> {
    let absolute_dir = if dir.is_absolute() {
        dir.clone()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude))
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.path().to_path_buf());
        }
    }
    paths.sort();

    let mut samples = SampleSet::default();
    for path in paths {
        if let Ok(content) = fs::read_to_string(&path) {
            let frontmatter = parse_frontmatter(&content).unwrap_or_default();
            let body = strip_frontmatter(&content);
            let key = path
                .strip_prefix(&absolute_dir)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();

            match frontmatter.lang {
                Some(code) => {
                    samples.language_mut(&code).insert(key, body);
                }
                None => {
                    samples.main.insert(key, body);
                }
            }
        }
    }

    Ok(samples)
}

/// Excludes hidden entries and entries whose file name matches one of the
/// given glob patterns.
#[must_use]
pub fn should_exclude(entry: &walkdir::DirEntry, exclude: &[Pattern]) -> bool {
    if is_hidden(entry) {
        return true;
    }

    entry
        .file_name()
        .to_str()
        .is_some_and(|name| exclude.iter().any(|pattern| pattern.matches(name)))
}
