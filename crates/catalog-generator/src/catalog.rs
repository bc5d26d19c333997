//! Candidate value sets sampled by the generator.
//!
//! A `Catalog` is immutable configuration: it is either the built-in
//! default or loaded from a YAML file, validated once, then handed to the
//! generator by value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A candidate list has nothing to sample from
    #[error("Candidate list '{0}' must not be empty")]
    EmptyCandidates(&'static str),
}

/// Candidate lists for every independently sampled field.
///
/// Lists omitted from a YAML override keep their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Catalog {
    pub brands: Vec<String>,
    pub manufacturers: Vec<String>,
    pub countries: Vec<String>,
    pub flavors: Vec<String>,
    pub certifications: Vec<String>,
    pub dietary_info: Vec<String>,
    pub skin_types: Vec<String>,
    pub hair_types: Vec<String>,
    pub allergens: Vec<String>,
    pub seasons: Vec<String>,
    pub genders: Vec<String>,
    pub age_groups: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            brands: owned(&[
                "Optimus",
                "Health Supp",
                "GNC",
                "MuscleBlaze",
                "Ultimate Nutrition",
                "ON",
                "Labrada",
                "Dymatize",
            ]),
            manufacturers: owned(&[
                "Optimus Inc",
                "GNC Ltd",
                "MuscleBlaze Pvt",
                "Ultimate Nutrition Co",
                "Dymatize India",
                "ON Labs",
            ]),
            countries: owned(&["India", "USA", "Germany", "UK", "Canada"]),
            flavors: owned(&[
                "Chocolate",
                "Vanilla",
                "Strawberry",
                "Mango",
                "Banana",
                "Cookies & Cream",
                "Unflavored",
            ]),
            certifications: owned(&[
                "FSSAI Approved",
                "GMP Certified",
                "ISO 22000",
                "FDA Approved",
                "Halal Certified",
            ]),
            dietary_info: owned(&["vegetarian", "vegan", "non-GMO", "gluten-free", "organic"]),
            skin_types: owned(&["normal", "dry", "oily", "combination", "sensitive"]),
            hair_types: owned(&["straight", "wavy", "curly", "fine", "thick"]),
            allergens: owned(&["nuts", "dairy", "gluten", "soy"]),
            seasons: owned(&["spring", "summer", "fall", "winter", "all-season"]),
            genders: owned(&["men", "women", "unisex"]),
            age_groups: owned(&["adult", "teen", "senior", "all-ages"]),
        }
    }
}

impl Catalog {
    /// Load a catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every candidate list can be sampled from.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, values) in self.lists() {
            if values.is_empty() {
                return Err(CatalogError::EmptyCandidates(name));
            }
        }
        Ok(())
    }

    /// All candidate lists with their YAML key.
    pub fn lists(&self) -> [(&'static str, &[String]); 12] {
        [
            ("brands", self.brands.as_slice()),
            ("manufacturers", self.manufacturers.as_slice()),
            ("countries", self.countries.as_slice()),
            ("flavors", self.flavors.as_slice()),
            ("certifications", self.certifications.as_slice()),
            ("dietaryInfo", self.dietary_info.as_slice()),
            ("skinTypes", self.skin_types.as_slice()),
            ("hairTypes", self.hair_types.as_slice()),
            ("allergens", self.allergens.as_slice()),
            ("seasons", self.seasons.as_slice()),
            ("genders", self.genders.as_slice()),
            ("ageGroups", self.age_groups.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.brands.len(), 8);
        assert_eq!(catalog.flavors.len(), 7);
        assert!(catalog.flavors.contains(&"Cookies & Cream".to_string()));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
brands:
  - Acme
  - Fitco
flavors:
  - Coffee
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();

        assert_eq!(catalog.brands, vec!["Acme", "Fitco"]);
        assert_eq!(catalog.flavors, vec!["Coffee"]);
        assert_eq!(catalog.countries, Catalog::default().countries);
        assert_eq!(catalog.age_groups, Catalog::default().age_groups);
    }

    #[test]
    fn test_empty_list_rejected() {
        let yaml = "dietaryInfo: []\n";
        let result = Catalog::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyCandidates("dietaryInfo"))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Catalog::from_yaml("brands: [unterminated");
        assert!(matches!(result, Err(CatalogError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seasons:\n  - monsoon").unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.seasons, vec!["monsoon"]);
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::from_file("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }
}
