//! CLI argument definitions for the CSV populator.

use clap::Args;
use std::path::PathBuf;

/// Default output file, overwritten on every run.
pub const DEFAULT_OUTPUT: &str = "protein_products_400_complete.csv";

/// CSV output arguments.
#[derive(Args, Clone, Debug)]
pub struct CsvPopulateArgs {
    /// Output CSV file (overwritten if it exists)
    #[arg(long, short = 'o', env = "CATALOG_GEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,
}
