pub mod ledger;
pub mod record;
pub mod validate;

pub use ledger::{LedgerError, ReservationLedger};
pub use record::{BookingId, BookingRecord};
pub use validate::{NamePolicy, ValidationError};
