use std::collections::HashMap;

use chrono::Utc;
use farebox_catalog::{CategoryStatus, InventoryError, InventoryPool, Money};

use crate::record::{BookingId, BookingRecord};
use crate::validate::{self, NamePolicy, ValidationError};

/// First identifier handed out; later ids count up from here.
const ID_SEED: u64 = 1001;

/// Owns the stock pool and every live booking record, and is the only
/// mutator of either. Records move `nonexistent -> live -> removed`;
/// removed is terminal and the id is never handed out again.
pub struct ReservationLedger {
    pool: InventoryPool,
    bookings: HashMap<BookingId, BookingRecord>,
    next_id: u64,
    name_policy: NamePolicy,
}

impl ReservationLedger {
    pub fn new(pool: InventoryPool) -> Self {
        Self::with_policy(pool, NamePolicy::default())
    }

    pub fn with_policy(pool: InventoryPool, name_policy: NamePolicy) -> Self {
        Self {
            pool,
            bookings: HashMap::new(),
            next_id: ID_SEED,
            name_policy,
        }
    }

    /// Book `unit_count` units of `category` for `holder_name` to `target`.
    ///
    /// All four inputs are validated before anything is touched; a failed
    /// booking leaves the pool and the ledger exactly as they were. The
    /// recorded total price snapshots the fare at booking time.
    pub fn book(
        &mut self,
        holder_name: &str,
        target: &str,
        category: &str,
        unit_count: &str,
    ) -> Result<BookingId, LedgerError> {
        let holder_name = validate::validate_name(holder_name, self.name_policy)?;
        let target = validate::validate_nonempty(target, "target")?;
        let category = validate::validate_category(category, &self.pool)?;
        let unit_count = validate::validate_count(unit_count)?;

        let fare = self.pool.unit_fare(&category)?;
        if let Err(err) = self.pool.reserve(&category, unit_count) {
            tracing::warn!("Booking rejected for {}: {}", category, err);
            return Err(err.into());
        }

        let id = BookingId::new(self.next_id);
        self.next_id += 1;

        let record = BookingRecord {
            id,
            holder_name,
            target,
            category: category.clone(),
            unit_count,
            total_price: fare.multiply(unit_count),
            created_at: Utc::now(),
        };
        self.bookings.insert(id, record);

        tracing::info!("Booking {} created: {} x {}", id, unit_count, category);
        Ok(id)
    }

    /// Look up a live booking. Cancelled and never-issued ids are
    /// indistinguishable: both are `NotFound`.
    pub fn view(&self, id: BookingId) -> Result<&BookingRecord, LedgerError> {
        self.bookings.get(&id).ok_or(LedgerError::NotFound { id })
    }

    /// Cancel a live booking, restore its units to the pool, and return the
    /// recorded total price as the refund.
    pub fn cancel(&mut self, id: BookingId) -> Result<Money, LedgerError> {
        let record = self
            .bookings
            .remove(&id)
            .ok_or(LedgerError::NotFound { id })?;

        // The category was validated when the booking was made and
        // categories are never removed, so this release cannot fail.
        self.pool.release(&record.category, record.unit_count)?;

        tracing::info!("Booking {} cancelled, refund {}", id, record.total_price);
        Ok(record.total_price)
    }

    /// Availability and fare snapshot for every category. Read-only.
    pub fn list_categories(&self) -> Vec<CategoryStatus> {
        self.pool.statuses()
    }

    /// Read-only view of the stock pool; all mutation goes through the
    /// ledger.
    pub fn catalog(&self) -> &InventoryPool {
        &self.pool
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Booking not found: {id}")]
    NotFound { id: BookingId },
}
