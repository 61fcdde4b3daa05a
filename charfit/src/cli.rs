// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use glob::Pattern;
use std::path::PathBuf;

use crate::core::analyzer::average_length;
use crate::core::order::{SortDirection, SortField};
use crate::core::sample::collect_samples;
use crate::models::{CalculationState, DatasetConfig, WidthTable};
use crate::utils::print_frequency_table;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing text sample files (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Fold characters to lower case before counting
    #[arg(long)]
    pub ignore_capitals: bool,

    /// Drop numeric digits from the count
    #[arg(long)]
    pub ignore_numbers: bool,

    /// Drop symbol characters from the count
    #[arg(long)]
    pub ignore_symbols: bool,

    /// Drop whitespace from the count
    #[arg(long)]
    pub ignore_spaces: bool,

    /// Field to sort the frequency table by
    #[arg(short, long, value_enum, default_value_t)]
    pub sort: SortField,

    /// Sort direction for the frequency table
    #[arg(short = 'r', long, value_enum, default_value_t)]
    pub direction: SortDirection,

    /// Number of rows to show in the frequency table
    #[arg(short = 't', long, default_value = "20")]
    pub top: usize,

    /// File name patterns to exclude (comma-separated globs)
    #[arg(short, long, default_value = "*.toml")]
    pub exclude: String,

    /// Show the average sample length instead of the frequency table
    #[arg(short, long)]
    pub average: bool,

    /// TOML file of measured glyph widths
    #[arg(short, long)]
    pub widths: Option<PathBuf>,

    /// Available display width in pixels
    #[arg(long)]
    pub element_width: Option<f64>,

    /// Adjust the fit result for localization text expansion
    #[arg(short, long)]
    pub localized: bool,

    /// Use the generic expansion rate instead of measured per-language rates
    #[arg(long)]
    pub generic_rates: bool,

    /// Generic expansion rate applied with --generic-rates
    #[arg(long, default_value = "1.3")]
    pub expansion_rate: f64,
}

/// # Errors
///
/// Returns an error if the sample directory cannot be traversed, an exclude
/// pattern is invalid, or the width table cannot be read or parsed.
pub fn run(args: Args) -> Result<()> {
    let exclude = compile_excludes(&args.exclude)?;
    let samples = collect_samples(&args.directory, &exclude)
        .with_context(|| format!("Failed to collect samples from: {}", args.directory.display()))?;

    if args.average {
        match average_length(&samples.main) {
            Some(average) => println!("Average sample length: {average:.2} characters"),
            None => println!("No samples found"),
        }
        return Ok(());
    }

    let config = DatasetConfig {
        ignore_capitals: args.ignore_capitals,
        ignore_numbers: args.ignore_numbers,
        ignore_symbols: args.ignore_symbols,
        ignore_spaces: args.ignore_spaces,
    };

    let mut state = CalculationState::new(config);
    let languages = samples.languages;
    state.process_dataset(samples.main);
    for (code, dataset) in &languages {
        state.process_language_dataset(code, dataset);
    }

    state.sort_character_data(args.sort, args.direction);
    print_frequency_table(state.character_data(), args.top);

    if let (Some(widths_path), Some(element_width)) = (args.widths.as_ref(), args.element_width) {
        let table = WidthTable::load(widths_path)?;
        state.apply_width_table(&table);
        state.set_element_width(element_width);
        state.set_localization_enabled(args.localized);
        state.set_use_generic_rates(args.generic_rates);
        state.set_generic_expansion_rate(args.expansion_rate);
        state.calculate_results();

        match state.max_char_length() {
            Some(max) => {
                println!("Max characters: {max}");
                if let Some(adjusted) = state.adjusted_max_char_length() {
                    println!("Localized max characters: {adjusted}");
                }
            }
            // Absence of a result is the failure signal; widths may be
            // missing for some counted characters.
            None => println!("No fit computed"),
        }
    }

    Ok(())
}

fn compile_excludes(exclude: &str) -> Result<Vec<Pattern>> {
    exclude
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(|pattern| {
            Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {pattern}"))
        })
        .collect()
}
