use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::{CatalogConfig, CategoryKey, CategoryStatus};
use crate::money::Money;

/// Stock tracking for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryState {
    pub available: u32,
    pub reserved: u32,
    pub total: u32,
    pub fare: Money,
}

/// In-memory stock pool keyed by category. Units move between `available`
/// and `reserved`; `available + reserved == total` after every operation
/// driven by the ledger.
pub struct InventoryPool {
    categories: HashMap<CategoryKey, CategoryState>,
}

impl InventoryPool {
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
        }
    }

    /// Register a category at full availability.
    pub fn add_category(&mut self, key: CategoryKey, total: u32, fare: Money) {
        self.categories.insert(
            key,
            CategoryState {
                available: total,
                reserved: 0,
                total,
                fare,
            },
        );
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.categories.contains_key(key)
    }

    pub fn available(&self, key: &CategoryKey) -> Result<u32, InventoryError> {
        self.state(key).map(|state| state.available)
    }

    pub fn unit_fare(&self, key: &CategoryKey) -> Result<Money, InventoryError> {
        self.state(key).map(|state| state.fare)
    }

    /// Take `count` units out of a category's availability. Either the whole
    /// count is reserved or nothing is; `available` never goes negative.
    pub fn reserve(&mut self, key: &CategoryKey, count: u32) -> Result<(), InventoryError> {
        let state = self
            .categories
            .get_mut(key)
            .ok_or_else(|| InventoryError::UnknownCategory {
                category: key.to_string(),
            })?;

        if count > state.available {
            return Err(InventoryError::InsufficientStock {
                category: key.to_string(),
                requested: count,
                available: state.available,
            });
        }

        state.available -= count;
        state.reserved += count;

        Ok(())
    }

    /// Return `count` units to a category's availability (a cancellation
    /// restoring capacity).
    pub fn release(&mut self, key: &CategoryKey, count: u32) -> Result<(), InventoryError> {
        let state = self
            .categories
            .get_mut(key)
            .ok_or_else(|| InventoryError::UnknownCategory {
                category: key.to_string(),
            })?;

        state.available += count;
        state.reserved = state.reserved.saturating_sub(count);

        Ok(())
    }

    /// Snapshot of every category, sorted by key for stable display.
    pub fn statuses(&self) -> Vec<CategoryStatus> {
        let mut statuses: Vec<CategoryStatus> = self
            .categories
            .iter()
            .map(|(key, state)| CategoryStatus {
                category: key.clone(),
                available: state.available,
                fare: state.fare,
            })
            .collect();
        statuses.sort_by(|a, b| a.category.cmp(&b.category));
        statuses
    }

    fn state(&self, key: &CategoryKey) -> Result<&CategoryState, InventoryError> {
        self.categories
            .get(key)
            .ok_or_else(|| InventoryError::UnknownCategory {
                category: key.to_string(),
            })
    }
}

impl Default for InventoryPool {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CatalogConfig> for InventoryPool {
    fn from(config: CatalogConfig) -> Self {
        let mut pool = Self::new();
        for spec in config.categories {
            pool.add_category(spec.key, spec.total, spec.fare);
        }
        pool
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Insufficient stock in {category}: requested {requested}, available {available}")]
    InsufficientStock {
        category: String,
        requested: u32,
        available: u32,
    },
}
