//! Numeric value generators.

use rand::Rng;

/// Smallest 12-digit barcode.
pub const BARCODE_MIN: u64 = 100_000_000_000;
/// Largest 12-digit barcode.
pub const BARCODE_MAX: u64 = 999_999_999_999;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.random_range(min..=max)
}

/// Generate a random rating in the given range (inclusive), rounded to one
/// decimal place.
pub fn rating<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value: f64 = rng.random_range(min..=max);
    (value * 10.0).round() / 10.0
}

/// Generate a random 12-digit barcode.
pub fn barcode<R: Rng>(rng: &mut R) -> String {
    rng.random_range(BARCODE_MIN..=BARCODE_MAX).to_string()
}
