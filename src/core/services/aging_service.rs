//! Aging of open obligations: due dates, remaining business-day runway, and
//! reconciled payable/receivable rows.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::core::calendar::{advance_business_days, business_days_between};
use crate::core::reconcile::reconcile;
use crate::domain::{Obligation, Reservation, Room};

/// One open obligation with its due date and remaining runway.
///
/// `business_days_left == 0` means the obligation is at or past term;
/// classifying it as overdue is a presentation concern.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AgingRow {
    pub counterparty: String,
    pub room_number: Option<String>,
    pub nominal: i64,
    pub paid: i64,
    pub pending: i64,
    pub due_date: NaiveDate,
    pub business_days_left: u32,
}

/// A payable or receivable with its reconciled balance.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ObligationBalance {
    pub id: Uuid,
    pub counterparty: String,
    pub nominal: i64,
    pub paid: i64,
    pub pending: i64,
    pub entry_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Derives aging and balance views from ledger snapshots.
pub struct AgingService;

impl AgingService {
    /// Company-owed rows: corporate reservations with a positive payment
    /// term and an unpaid balance. Due date is the contractual term in
    /// business days counted from check-out.
    pub fn company_rows(
        reservations: &[Reservation],
        rooms: &[Room],
        today: NaiveDate,
    ) -> Vec<AgingRow> {
        let labels = room_labels(rooms);
        reservations
            .iter()
            .filter(|r| !r.is_cancelled())
            .filter_map(|r| {
                let account = r.corporate.as_ref()?;
                if account.payment_term_days == 0 {
                    return None;
                }
                let due_date =
                    advance_business_days(r.check_out.date(), account.payment_term_days);
                Self::row(r, &labels, due_date, today)
            })
            .collect()
    }

    /// Person-owed rows: non-corporate reservations with an unpaid balance.
    /// Payment is due at check-out, with no grace period.
    pub fn person_rows(
        reservations: &[Reservation],
        rooms: &[Room],
        today: NaiveDate,
    ) -> Vec<AgingRow> {
        let labels = room_labels(rooms);
        reservations
            .iter()
            .filter(|r| !r.is_cancelled() && !r.is_corporate())
            .filter_map(|r| Self::row(r, &labels, r.check_out.date(), today))
            .collect()
    }

    /// Reconciles a batch of payables or receivables into balance rows.
    /// Fully-settled obligations are dropped, matching the aging views.
    pub fn obligation_balances(obligations: &[Obligation]) -> Vec<ObligationBalance> {
        obligations
            .iter()
            .filter_map(|obligation| {
                let breakdown = reconcile(obligation.amount, &obligation.payments);
                if breakdown.is_settled() {
                    return None;
                }
                Some(ObligationBalance {
                    id: obligation.id,
                    counterparty: obligation.counterparty.clone(),
                    nominal: obligation.amount,
                    paid: breakdown.paid,
                    pending: breakdown.pending,
                    entry_date: obligation.entry_date,
                    due_date: obligation.due_date,
                })
            })
            .collect()
    }

    /// Settled reservations never produce a row; the balance check runs
    /// before any due-date computation.
    fn row(
        reservation: &Reservation,
        labels: &HashMap<Uuid, String>,
        due_date: NaiveDate,
        today: NaiveDate,
    ) -> Option<AgingRow> {
        let breakdown = reconcile(reservation.amount, &reservation.payments);
        if breakdown.is_settled() {
            return None;
        }
        Some(AgingRow {
            counterparty: reservation.counterparty().to_string(),
            room_number: labels.get(&reservation.room_id).cloned(),
            nominal: reservation.amount,
            paid: breakdown.paid,
            pending: breakdown.pending,
            due_date,
            business_days_left: business_days_between(today, due_date),
        })
    }
}

fn room_labels(rooms: &[Room]) -> HashMap<Uuid, String> {
    rooms
        .iter()
        .map(|room| (room.id, room.number.clone()))
        .collect()
}
