//! Index-derived string fields.

/// SKU prefix shared by every product.
pub const SKU_PREFIX: &str = "PROT";

/// Largest product index whose SKU still has exactly four digits.
pub const MAX_PRODUCTS: u64 = 9999;

/// Number of product images available to cycle through.
pub const IMAGE_COUNT: u64 = 9;

/// SKU for a 1-based product index: prefix plus the index zero-padded to
/// four digits.
pub fn sku(index: u64) -> String {
    format!("{SKU_PREFIX}{index:04}")
}

/// Image path for a 1-based product index, cycling `protien1.jpg` through
/// `protien9.jpg`. The file names match the images already uploaded to the
/// store, misspelling included.
pub fn image_path(index: u64) -> String {
    let image_num = index.saturating_sub(1) % IMAGE_COUNT + 1;
    format!("uploads/products/protien{image_num}.jpg")
}
