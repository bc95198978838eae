//! Domain models for room reservations and corporate billing terms.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::payment::Payment;

/// A room booking with a half-open stay interval `[check_in, check_out)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub guest_name: String,
    pub amount: i64,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate: Option<CorporateAccount>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Reservation {
    /// Builds a reservation, rejecting inverted or empty stay intervals.
    pub fn new(
        room_id: Uuid,
        guest_name: impl Into<String>,
        amount: i64,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> Result<Self, InvalidStay> {
        if check_out <= check_in {
            return Err(InvalidStay);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            room_id,
            guest_name: guest_name.into(),
            amount,
            check_in,
            check_out,
            status: ReservationStatus::Confirmed,
            corporate: None,
            payments: Vec::new(),
        })
    }

    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_corporate(mut self, corporate: CorporateAccount) -> Self {
        self.corporate = Some(corporate);
        self
    }

    pub fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, ReservationStatus::Cancelled)
    }

    /// Company bookings carry corporate terms; everyone else is person-owed.
    pub fn is_corporate(&self) -> bool {
        self.corporate.is_some()
    }

    /// Company name when corporate, guest name otherwise.
    pub fn counterparty(&self) -> &str {
        self.corporate
            .as_ref()
            .map(|account| account.company_name.as_str())
            .unwrap_or(&self.guest_name)
    }
}

impl Identifiable for Reservation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Reservation {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.counterparty(), self.status)
    }
}

/// Raised when a reservation's stay interval is empty or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStay;

impl fmt::Display for InvalidStay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("check-out must be after check-in")
    }
}

impl std::error::Error for InvalidStay {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the lifecycle state of a reservation.
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::CheckedIn => "Checked In",
            ReservationStatus::CheckedOut => "Checked Out",
            ReservationStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Corporate billing terms attached to business bookings. The payment term
/// is expressed in business days counted from check-out.
pub struct CorporateAccount {
    pub company_name: String,
    pub payment_term_days: u32,
}

impl CorporateAccount {
    pub fn new(company_name: impl Into<String>, payment_term_days: u32) -> Self {
        Self {
            company_name: company_name.into(),
            payment_term_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn rejects_inverted_stay() {
        let err = Reservation::new(Uuid::new_v4(), "Guest", 100, instant(3, 12), instant(1, 12));
        assert!(err.is_err());
        let empty = Reservation::new(Uuid::new_v4(), "Guest", 100, instant(3, 12), instant(3, 12));
        assert!(empty.is_err());
    }

    #[test]
    fn counterparty_prefers_company_name() {
        let reservation =
            Reservation::new(Uuid::new_v4(), "Ana Soto", 100, instant(1, 14), instant(3, 11))
                .unwrap();
        assert_eq!(reservation.counterparty(), "Ana Soto");
        let corporate = reservation.with_corporate(CorporateAccount::new("Acme SA", 15));
        assert_eq!(corporate.counterparty(), "Acme SA");
        assert!(corporate.is_corporate());
    }
}
