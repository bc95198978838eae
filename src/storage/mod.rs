//! Read-only boundary toward the durable ledger store. The engine never
//! writes; retries and timeouts toward the store belong to the backend.

pub mod memory;

use crate::domain::{DateWindow, Obligation, Payment, Reservation, Room};
use crate::errors::Result;

pub use memory::InMemoryStore;

/// Abstraction over queryable persistence for ledger facts. Every query is
/// scoped by an opaque establishment identifier.
///
/// The reads for one report are independent of each other, so a backend may
/// serve them concurrently; the engine joins the results before computing.
pub trait LedgerStore: Send + Sync {
    /// Amounts the establishment owes, with payment histories.
    fn payables(&self, establishment: &str) -> Result<Vec<Obligation>>;

    /// Amounts owed to the establishment, with payment histories.
    fn receivables(&self, establishment: &str) -> Result<Vec<Obligation>>;

    /// Every reservation regardless of window; used for aging.
    fn reservations(&self, establishment: &str) -> Result<Vec<Reservation>>;

    /// Reservations whose stay interval intersects the window.
    fn reservations_overlapping(
        &self,
        establishment: &str,
        window: &DateWindow,
    ) -> Result<Vec<Reservation>>;

    /// Payments recorded inside the window, across all obligations.
    fn payments_between(&self, establishment: &str, window: &DateWindow) -> Result<Vec<Payment>>;

    /// Room inventory for the establishment.
    fn rooms(&self, establishment: &str) -> Result<Vec<Room>>;
}
