//! Domain models for recorded payments and their settlement methods.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A recorded payment against an obligation. Amounts are integer currency
/// units; when a transaction settles through more than one channel the
/// amount is the total across all of them, not per-method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub amount: i64,
    pub paid_at: NaiveDateTime,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_methods: Vec<PaymentMethod>,
}

impl Payment {
    pub fn new(amount: i64, paid_at: NaiveDateTime, method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            paid_at,
            status: PaymentStatus::Completed,
            method,
            extra_methods: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_extra_methods(mut self, methods: Vec<PaymentMethod>) -> Self {
        self.extra_methods = methods;
        self
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, PaymentStatus::Completed)
    }

    /// Distinct settlement methods in declaration order, primary first.
    pub fn methods(&self) -> Vec<PaymentMethod> {
        let mut methods = vec![self.method];
        for extra in &self.extra_methods {
            if !methods.contains(extra) {
                methods.push(*extra);
            }
        }
        methods
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the lifecycle state of a payment. Only `Completed` payments
/// count toward balance reconciliation.
pub enum PaymentStatus {
    Completed,
    Pending,
    Partial,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Refunded => "Refunded",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Enumerates the settlement channels a payment can declare.
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Transfer,
    Check,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Check => "Check",
        };
        f.write_str(label)
    }
}
