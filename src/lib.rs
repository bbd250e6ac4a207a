// src/lib.rs
pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod subset;
pub mod taxdb;
pub mod types;

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

pub use crate::classify::ClassifyStats;
pub use crate::config::Config;
pub use crate::error::{DaError, Result};

use crate::classify::classify_memberships;
use crate::input::open_reader;
use crate::subset::parse_subset;
use crate::taxdb::parse_taxonomy;

/// Usage line printed by the CLI when the required files are missing.
pub const USAGE: &str = "Usage: <DA membership filename> <taxonomy info filename> [<DA subset>]";

/// Runs the whole pipeline: taxonomy index, optional DA subset, then the
/// membership table, writing the breadth table to `out`.
///
/// Inputs are read strictly in that order and each is closed before the next
/// is opened.
pub fn run<W: Write>(config: &Config, mut out: W) -> Result<ClassifyStats> {
    // 1. Taxonomy lookups
    let index = parse_taxonomy(&config.taxonomy_path, config.diagnostics)?;

    // 2. DAs of interest, if any
    let subset = parse_subset(config.subset_path.as_ref(), config.diagnostics)?;

    // 3. Stream the membership table
    let reader = open_reader(&config.membership_path)?;
    let progress = if config.progress {
        membership_spinner()
    } else {
        ProgressBar::hidden()
    };

    let stats = classify_memberships(
        reader,
        &index,
        subset.as_ref(),
        config.diagnostics,
        &progress,
        &mut out,
    )?;
    out.flush()?;

    progress.finish_with_message(format!("Classified {} DAs.", stats.rows_written));
    if config.diagnostics {
        stats.log_summary();
    }
    Ok(stats)
}

fn membership_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.green} {msg} {pos} DAs")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Classifying domain architectures...");
    spinner
}
