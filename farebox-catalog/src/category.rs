use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Key naming a pool of interchangeable bookable units (a seat class, a
/// product line). Construction normalizes the spelling, so any two raw
/// inputs that trim and lower-case to the same text are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Definition of one category handed to the pool at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub key: CategoryKey,
    pub total: u32,
    pub fare: Money,
}

impl CategorySpec {
    pub fn new(key: impl AsRef<str>, total: u32, fare: Money) -> Self {
        Self {
            key: CategoryKey::new(key),
            total,
            fare,
        }
    }
}

/// Startup catalog: which categories exist, how many units each starts
/// with, and the per-unit fare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub categories: Vec<CategorySpec>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategorySpec::new("sleeper", 5, Money::from_cents(45_000)),
                CategorySpec::new("ac", 3, Money::from_cents(120_000)),
                CategorySpec::new("general", 10, Money::from_cents(20_000)),
            ],
        }
    }
}

/// Read-only availability snapshot for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub category: CategoryKey,
    pub available: u32,
    pub fare: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes_case_and_whitespace() {
        assert_eq!(CategoryKey::new("  General "), CategoryKey::new("general"));
        assert_eq!(CategoryKey::new("AC").as_str(), "ac");
    }

    #[test]
    fn test_default_catalog_is_seeded() {
        let config = CatalogConfig::default();
        assert_eq!(config.categories.len(), 3);

        let general = config
            .categories
            .iter()
            .find(|spec| spec.key == CategoryKey::new("general"))
            .unwrap();
        assert_eq!(general.total, 10);
        assert_eq!(general.fare, Money::from_cents(20_000));
    }
}
