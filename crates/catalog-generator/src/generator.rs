//! Main generator for producing product records.

use crate::catalog::{Catalog, CatalogError};
use crate::generators::{barcode, flag, image_path, int_range, pick, pick_optional, rating, sku};
pub use crate::generators::pattern::MAX_PRODUCTS;
use crate::record::ProductRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const PRICE_MIN: u32 = 999;
pub const PRICE_MAX: u32 = 4999;
/// Markup added on top of `price` to get `originalPrice`.
pub const MARKUP_MIN: u32 = 200;
pub const MARKUP_MAX: u32 = 1000;
pub const STOCK_MIN: u32 = 50;
pub const STOCK_MAX: u32 = 300;
pub const REVIEWS_MIN: u32 = 50;
pub const REVIEWS_MAX: u32 = 1000;
pub const RATING_MIN: f64 = 3.5;
pub const RATING_MAX: f64 = 5.0;
pub const SIZE_GRAMS_MIN: u32 = 500;
pub const SIZE_GRAMS_MAX: u32 = 2000;
pub const MIN_ORDER_QUANTITY: u32 = 1;
pub const MAX_ORDER_MIN: u32 = 5;
pub const MAX_ORDER_MAX: u32 = 20;

pub const CATEGORY: &str = "Proteins";
pub const SUBCATEGORY: &str = "Health Supplement";
pub const TAGS: &str = "Protein,supplement,gym,fitness,muscle";
pub const INGREDIENTS: &str =
    "Whey Protein Concentrate,Whey Protein Isolate,BCAAs,Digestive Enzymes";
pub const COLOR: &str = "N/A";
pub const MATERIAL: &str = "Plastic Jar";
pub const CARE_INSTRUCTIONS: &str = "Store in a cool dry place,Keep away from moisture";
pub const KEYWORDS: &str = "Protein,health,supplement,gym,fitness,muscle";

/// Product record generator.
///
/// Every categorical field is drawn uniformly and independently from the
/// catalog. With a seed the sequence of records is reproducible; without
/// one the RNG is seeded from OS entropy and every run differs.
pub struct ProductGenerator {
    /// Candidate values to sample from
    catalog: Catalog,
    /// Random number generator shared by all fields
    rng: StdRng,
    /// Seed used to build the RNG, if any
    seed: Option<u64>,
}

impl ProductGenerator {
    /// Create a new generator. The catalog is validated so that sampling
    /// can never run out of candidates.
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Result<Self, CatalogError> {
        catalog.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { catalog, rng, seed })
    }

    /// Seed used by this generator, `None` when unseeded.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the record for a 1-based product index. Indices above
    /// `MAX_PRODUCTS` no longer fit the four-digit SKU.
    pub fn product(&mut self, index: u64) -> ProductRecord {
        let rng = &mut self.rng;
        let catalog = &self.catalog;

        let price = int_range(rng, PRICE_MIN, PRICE_MAX);
        let original_price = price + int_range(rng, MARKUP_MIN, MARKUP_MAX);
        let stock = int_range(rng, STOCK_MIN, STOCK_MAX);
        let rating = rating(rng, RATING_MIN, RATING_MAX);
        let review_count = int_range(rng, REVIEWS_MIN, REVIEWS_MAX);
        let brand = pick(rng, &catalog.brands);
        let manufacturer = pick(rng, &catalog.manufacturers);
        let country_of_origin = pick(rng, &catalog.countries);
        let flavor = pick(rng, &catalog.flavors);
        let certifications = pick(rng, &catalog.certifications);
        let dietary_info = pick(rng, &catalog.dietary_info);

        ProductRecord {
            name: format!("Protein Supplement {index}"),
            description: format!(
                "High-quality Protein supplement {index} ideal for muscle growth and recovery. \
                 {flavor} flavor for gym and fitness enthusiasts."
            ),
            price,
            original_price,
            images: image_path(index),
            category: CATEGORY.to_string(),
            subcategory: SUBCATEGORY.to_string(),
            stock,
            rating,
            review_count,
            tags: TAGS.to_string(),
            features: format!(
                "Supports muscle growth,Boosts recovery,High Protein content,{flavor} flavor"
            ),
            ingredients: INGREDIENTS.to_string(),
            is_new_product: flag(rng),
            is_bestseller: flag(rng),
            is_featured: flag(rng),
            sku: sku(index),
            barcode: barcode(rng),
            color: COLOR.to_string(),
            size: format!("{}g", int_range(rng, SIZE_GRAMS_MIN, SIZE_GRAMS_MAX)),
            material: MATERIAL.to_string(),
            gender: pick(rng, &catalog.genders),
            age_group: pick(rng, &catalog.age_groups),
            manufacturer,
            country_of_origin,
            allergens: pick_optional(rng, &catalog.allergens),
            dietary_info,
            skin_type: pick_optional(rng, &catalog.skin_types),
            hair_type: pick_optional(rng, &catalog.hair_types),
            care_instructions: CARE_INSTRUCTIONS.to_string(),
            certifications,
            keywords: KEYWORDS.to_string(),
            meta_title: format!("{brand} Protein Supplement {index} - {flavor}"),
            meta_description: format!(
                "Buy {brand} {flavor} Protein supplement {index} - premium protein for \
                 strength, muscle growth, and fitness."
            ),
            min_order_quantity: MIN_ORDER_QUANTITY,
            max_order_quantity: int_range(rng, MAX_ORDER_MIN, MAX_ORDER_MAX),
            season: pick(rng, &catalog.seasons),
            spf: String::new(),
            scent: flavor,
            brand,
        }
    }

    /// Generate records for indices `1..=count`, in order. Callers keep
    /// `count <= MAX_PRODUCTS` (the CLI enforces it).
    pub fn products(&mut self, count: u64) -> Vec<ProductRecord> {
        self.product_iter(count).collect()
    }

    /// Lazily generate records for indices `1..=count`.
    pub fn product_iter(&mut self, count: u64) -> ProductIterator<'_> {
        ProductIterator {
            generator: self,
            next_index: 1,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates product records.
pub struct ProductIterator<'a> {
    generator: &'a mut ProductGenerator,
    next_index: u64,
    remaining: u64,
}

impl Iterator for ProductIterator<'_> {
    type Item = ProductRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let record = self.generator.product(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductIterator<'_> {}
