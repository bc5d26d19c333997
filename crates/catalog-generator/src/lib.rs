//! Product record generator for seeding a catalog bulk-upload.
//!
//! This crate provides the `ProductGenerator` which produces protein
//! supplement product records by sampling from a `Catalog` of candidate
//! values. Generation is unseeded by default; passing a seed makes the
//! output fully reproducible.
//!
//! # Architecture
//!
//! ```text
//! Catalog (built-in or YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   ProductGenerator   │
//! │                      │
//! │  - catalog           │
//! │  - rng (StdRng)      │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    ProductRecord { name, sku, price, ... }   (COLUMNS order)
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_generator::{Catalog, ProductGenerator, COLUMNS};
//!
//! let mut generator = ProductGenerator::new(Catalog::default(), Some(42)).unwrap();
//! let records = generator.products(5);
//!
//! assert_eq!(records[4].sku, "PROT0005");
//! assert_eq!(records[0].to_csv_record().len(), COLUMNS.len());
//! ```

pub mod catalog;
pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError};
pub use generator::{ProductGenerator, ProductIterator, MAX_PRODUCTS};
pub use record::{Flag, ProductRecord, COLUMNS, PREVIEW_COLUMNS};
