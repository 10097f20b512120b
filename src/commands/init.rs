use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

/// The data file was already created when the store was opened.
pub fn run(data_path: &Path) -> Result<()> {
    println!("{} {}", "Data file:".dimmed(), data_path.display());
    Ok(())
}
