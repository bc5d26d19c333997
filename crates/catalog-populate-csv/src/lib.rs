//! CSV file populator for the catalog bulk-upload.
//!
//! This crate writes product records produced by the catalog-generator
//! crate to a CSV file whose header matches the importer's column order.
//!
//! # Example
//!
//! ```ignore
//! use catalog_generator::{Catalog, ProductGenerator};
//! use catalog_populate_csv::CsvPopulator;
//!
//! let mut generator = ProductGenerator::new(Catalog::default(), None)?;
//! let records = generator.products(400);
//!
//! let metrics = CsvPopulator::new().write(&records, "protein_products_400_complete.csv")?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::CsvPopulateArgs;
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
