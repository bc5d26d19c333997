//! Product record and the bulk-upload column order.

use std::fmt;

/// Header columns in the exact order the bulk-upload importer expects.
pub const COLUMNS: [&str; 40] = [
    "name",
    "description",
    "price",
    "originalPrice",
    "images",
    "category",
    "subcategory",
    "brand",
    "stock",
    "rating",
    "reviewCount",
    "tags",
    "features",
    "ingredients",
    "isNewProduct",
    "isBestseller",
    "isFeatured",
    "sku",
    "barcode",
    "color",
    "size",
    "material",
    "scent",
    "gender",
    "ageGroup",
    "manufacturer",
    "countryOfOrigin",
    "allergens",
    "dietaryInfo",
    "skinType",
    "hairType",
    "careInstructions",
    "certifications",
    "keywords",
    "metaTitle",
    "metaDescription",
    "minOrderQuantity",
    "maxOrderQuantity",
    "season",
    "spf",
];

/// Columns shown in the post-write preview table.
pub const PREVIEW_COLUMNS: [&str; 5] = ["name", "category", "images", "price", "brand"];

/// Boolean rendered the way the importer reads it (`TRUE` / `FALSE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "TRUE" } else { "FALSE" })
    }
}

/// One generated product. Optional attributes hold an empty string when
/// they do not apply to the product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub original_price: u32,
    pub images: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    pub stock: u32,
    /// Always rounded to one decimal place.
    pub rating: f64,
    pub review_count: u32,
    pub tags: String,
    pub features: String,
    pub ingredients: String,
    pub is_new_product: Flag,
    pub is_bestseller: Flag,
    pub is_featured: Flag,
    pub sku: String,
    pub barcode: String,
    pub color: String,
    pub size: String,
    pub material: String,
    pub scent: String,
    pub gender: String,
    pub age_group: String,
    pub manufacturer: String,
    pub country_of_origin: String,
    pub allergens: String,
    pub dietary_info: String,
    pub skin_type: String,
    pub hair_type: String,
    pub care_instructions: String,
    pub certifications: String,
    pub keywords: String,
    pub meta_title: String,
    pub meta_description: String,
    pub min_order_quantity: u32,
    pub max_order_quantity: u32,
    pub season: String,
    pub spf: String,
}

impl ProductRecord {
    /// Get the rendered value of a column by its header name.
    pub fn get(&self, column: &str) -> Option<String> {
        let value = match column {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "price" => self.price.to_string(),
            "originalPrice" => self.original_price.to_string(),
            "images" => self.images.clone(),
            "category" => self.category.clone(),
            "subcategory" => self.subcategory.clone(),
            "brand" => self.brand.clone(),
            "stock" => self.stock.to_string(),
            "rating" => format!("{:.1}", self.rating),
            "reviewCount" => self.review_count.to_string(),
            "tags" => self.tags.clone(),
            "features" => self.features.clone(),
            "ingredients" => self.ingredients.clone(),
            "isNewProduct" => self.is_new_product.to_string(),
            "isBestseller" => self.is_bestseller.to_string(),
            "isFeatured" => self.is_featured.to_string(),
            "sku" => self.sku.clone(),
            "barcode" => self.barcode.clone(),
            "color" => self.color.clone(),
            "size" => self.size.clone(),
            "material" => self.material.clone(),
            "scent" => self.scent.clone(),
            "gender" => self.gender.clone(),
            "ageGroup" => self.age_group.clone(),
            "manufacturer" => self.manufacturer.clone(),
            "countryOfOrigin" => self.country_of_origin.clone(),
            "allergens" => self.allergens.clone(),
            "dietaryInfo" => self.dietary_info.clone(),
            "skinType" => self.skin_type.clone(),
            "hairType" => self.hair_type.clone(),
            "careInstructions" => self.care_instructions.clone(),
            "certifications" => self.certifications.clone(),
            "keywords" => self.keywords.clone(),
            "metaTitle" => self.meta_title.clone(),
            "metaDescription" => self.meta_description.clone(),
            "minOrderQuantity" => self.min_order_quantity.to_string(),
            "maxOrderQuantity" => self.max_order_quantity.to_string(),
            "season" => self.season.clone(),
            "spf" => self.spf.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Convert to a CSV record (one string per column, in `COLUMNS` order).
    pub fn to_csv_record(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|column| self.get(column).unwrap_or_default())
            .collect()
    }
}
