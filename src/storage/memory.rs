//! In-memory ledger store, used by tests and by embedders that already hold
//! their facts in memory.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{DateWindow, Obligation, Payment, Reservation, Room};
use crate::errors::Result;
use crate::storage::LedgerStore;

#[derive(Debug, Default, Clone)]
struct EstablishmentData {
    payables: Vec<Obligation>,
    receivables: Vec<Obligation>,
    reservations: Vec<Reservation>,
    rooms: Vec<Room>,
    payments: Vec<Payment>,
}

/// HashMap-backed [`LedgerStore`]. Reads clone snapshots, so concurrent
/// report requests never observe partially-updated data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<HashMap<String, EstablishmentData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_payable(&self, establishment: &str, obligation: Obligation) {
        self.with_mut(establishment, |data| data.payables.push(obligation));
    }

    pub fn add_receivable(&self, establishment: &str, obligation: Obligation) {
        self.with_mut(establishment, |data| data.receivables.push(obligation));
    }

    pub fn add_reservation(&self, establishment: &str, reservation: Reservation) {
        self.with_mut(establishment, |data| data.reservations.push(reservation));
    }

    pub fn add_room(&self, establishment: &str, room: Room) {
        self.with_mut(establishment, |data| data.rooms.push(room));
    }

    pub fn add_payment(&self, establishment: &str, payment: Payment) {
        self.with_mut(establishment, |data| data.payments.push(payment));
    }

    fn with_mut(&self, establishment: &str, apply: impl FnOnce(&mut EstablishmentData)) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        apply(data.entry(establishment.to_string()).or_default());
    }

    fn snapshot(&self, establishment: &str) -> EstablishmentData {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.get(establishment).cloned().unwrap_or_default()
    }
}

impl LedgerStore for InMemoryStore {
    fn payables(&self, establishment: &str) -> Result<Vec<Obligation>> {
        Ok(self.snapshot(establishment).payables)
    }

    fn receivables(&self, establishment: &str) -> Result<Vec<Obligation>> {
        Ok(self.snapshot(establishment).receivables)
    }

    fn reservations(&self, establishment: &str) -> Result<Vec<Reservation>> {
        Ok(self.snapshot(establishment).reservations)
    }

    fn reservations_overlapping(
        &self,
        establishment: &str,
        window: &DateWindow,
    ) -> Result<Vec<Reservation>> {
        Ok(self
            .snapshot(establishment)
            .reservations
            .into_iter()
            .filter(|r| window.overlaps_instants(r.check_in, r.check_out))
            .collect())
    }

    fn payments_between(&self, establishment: &str, window: &DateWindow) -> Result<Vec<Payment>> {
        Ok(self
            .snapshot(establishment)
            .payments
            .into_iter()
            .filter(|p| p.paid_at >= window.start_instant() && p.paid_at < window.end_instant())
            .collect())
    }

    fn rooms(&self, establishment: &str) -> Result<Vec<Room>> {
        Ok(self.snapshot(establishment).rooms)
    }
}
