use chrono::{DateTime, Utc};
use farebox_catalog::{CategoryKey, Money};
use serde::{Deserialize, Serialize};

/// Opaque booking identifier. Ids count up from a fixed seed and are never
/// reused for the life of the process, even after cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookingId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live booking held in the ledger.
///
/// `total_price` is snapshotted at booking time; later catalog changes do
/// not touch existing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub holder_name: String,
    pub target: String,
    pub category: CategoryKey,
    pub unit_count: u32,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_display_and_value() {
        let id = BookingId::new(1001);
        assert_eq!(id.to_string(), "1001");
        assert_eq!(id.value(), 1001);
        assert_eq!(BookingId::from(1001), id);
    }
}
