//! Protein catalog generator.
//!
//! Synthesizes a CSV file of fake protein supplement products for seeding
//! an e-commerce catalog's bulk-upload feature.
//!
//! # Crates
//!
//! - `catalog_generator` - candidate catalog, product record and the
//!   random row generator
//! - `catalog_populate_csv` - CSV writer for the generated records
//!
//! # CLI Usage
//!
//! ```bash
//! # 400 unseeded products into protein_products_400_complete.csv
//! protein-catalog-gen
//!
//! # Reproducible output with a custom catalog
//! protein-catalog-gen --seed 42 --catalog catalog.yaml --output seed.csv
//! ```

pub mod report;

pub use report::{Report, PREVIEW_ROWS};
