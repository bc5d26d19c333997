//! Individual value generators for product fields.
//!
//! Each function draws from the supplied RNG so that a seeded generator
//! stays reproducible, and none of them can fail.

pub mod choice;
pub mod numeric;
pub mod pattern;

pub use choice::{flag, pick, pick_optional};
pub use numeric::{barcode, int_range, rating};
pub use pattern::{image_path, sku};
