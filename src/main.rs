//! Command-line interface for protein-catalog-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Default run: 400 products, fresh random values every time
//! protein-catalog-gen
//!
//! # Deterministic file for fixtures
//! protein-catalog-gen --seed 42 --count 50 --output fixtures/products.csv
//!
//! # Override candidate lists (brands, flavors, ...) from YAML
//! protein-catalog-gen --catalog catalog.yaml
//! ```

use anyhow::Context;
use catalog_generator::{Catalog, ProductGenerator, COLUMNS, MAX_PRODUCTS};
use catalog_populate_csv::{CsvPopulateArgs, CsvPopulator};
use clap::Parser;
use protein_catalog_gen::Report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protein-catalog-gen")]
#[command(about = "Generate a CSV of fake protein supplement products for catalog bulk-upload")]
#[command(long_about = None)]
struct Cli {
    /// Number of products to generate (at most 9999, the four-digit SKU limit)
    #[arg(
        long,
        short = 'n',
        env = "CATALOG_GEN_COUNT",
        default_value = "400",
        value_parser = clap::value_parser!(u64).range(..=MAX_PRODUCTS)
    )]
    count: u64,

    /// Random seed for reproducible output (unseeded when omitted)
    #[arg(long, env = "CATALOG_GEN_SEED")]
    seed: Option<u64>,

    /// YAML file overriding the built-in candidate lists
    #[arg(long, env = "CATALOG_GEN_CATALOG", value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    csv: CsvPopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog from {path:?}"))?,
        None => Catalog::default(),
    };

    let mut generator =
        ProductGenerator::new(catalog, cli.seed).context("Invalid product catalog")?;

    tracing::info!(
        "Generating {} products (seed={:?})",
        cli.count,
        generator.seed()
    );
    let records = generator.products(cli.count);

    let metrics = CsvPopulator::new()
        .with_header(!cli.csv.no_header)
        .write(&records, &cli.csv.output)
        .with_context(|| format!("Failed to write CSV to {:?}", cli.csv.output))?;

    tracing::info!(
        "Wrote {}: {} rows in {:?}",
        cli.csv.output.display(),
        metrics.rows_written,
        metrics.total_duration
    );

    print!("{}", Report::new(&cli.csv.output, &records, COLUMNS.len()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_count() {
        let cli = Cli::try_parse_from(["protein-catalog-gen"]).unwrap();
        assert_eq!(cli.count, 400);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_count_at_sku_limit_accepted() {
        let cli = Cli::try_parse_from(["protein-catalog-gen", "--count", "9999"]).unwrap();
        assert_eq!(cli.count, MAX_PRODUCTS);
    }

    #[test]
    fn test_count_above_sku_limit_rejected() {
        let result = Cli::try_parse_from(["protein-catalog-gen", "--count", "10000"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["protein-catalog-gen", "-n", "18446744073709551615"]);
        assert!(result.is_err());
    }
}
