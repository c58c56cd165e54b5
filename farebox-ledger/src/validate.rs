//! Input checks run before the pool or the ledger is touched. All functions
//! are pure: they either return the normalized value or a typed error.

use farebox_catalog::{CategoryKey, InventoryPool};

/// Holder-name acceptance rule. The digit restriction is an inherited
/// typo-guard, not hard law, so callers choose how strict to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Reject names made up entirely of digits.
    #[default]
    RequireNonDigit,
    /// Reject names containing any digit at all.
    RejectDigits,
    /// Any non-blank name passes.
    AnyNonBlank,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid holder name: {name:?}")]
    InvalidName { name: String },

    #[error("Field '{field}' must be non-empty")]
    InvalidField { field: &'static str },

    #[error("Count must be a positive whole number, got {raw:?}")]
    InvalidCount { raw: String },

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },
}

/// Trims a holder name and checks it against the active policy.
pub fn validate_name(raw: &str, policy: NamePolicy) -> Result<String, ValidationError> {
    let name = raw.trim();
    let digit_rejected = match policy {
        NamePolicy::RequireNonDigit => !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()),
        NamePolicy::RejectDigits => name.chars().any(|c| c.is_ascii_digit()),
        NamePolicy::AnyNonBlank => false,
    };

    if name.is_empty() || digit_rejected {
        return Err(ValidationError::InvalidName {
            name: raw.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Trims a free-text field, rejecting blank input.
pub fn validate_nonempty(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::InvalidField { field });
    }
    Ok(value.to_string())
}

/// Normalizes a category spelling and checks it is known to the pool.
pub fn validate_category(raw: &str, pool: &InventoryPool) -> Result<CategoryKey, ValidationError> {
    let key = CategoryKey::new(raw);
    if !pool.contains(&key) {
        return Err(ValidationError::UnknownCategory {
            category: key.to_string(),
        });
    }
    Ok(key)
}

/// Parses a unit count from integer-like text; must be a positive whole
/// number.
pub fn validate_count(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ValidationError::InvalidCount {
            raw: raw.to_string(),
        }),
    }
}
