//! Payables and receivables as read from the ledger store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::payment::Payment;

/// An amount owed to or by the establishment, together with its recorded
/// payment history. Snapshots are ephemeral; the store owns the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    pub id: Uuid,
    pub kind: ObligationKind,
    pub counterparty: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Obligation {
    pub fn new(kind: ObligationKind, counterparty: impl Into<String>, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            counterparty: counterparty.into(),
            amount,
            entry_date: None,
            due_date: None,
            payments: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_entry_date(mut self, entry_date: NaiveDate) -> Self {
        self.entry_date = Some(entry_date);
        self
    }

    pub fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }
}

impl Identifiable for Obligation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Obligation {
    fn name(&self) -> &str {
        &self.counterparty
    }
}

impl Displayable for Obligation {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.counterparty, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes amounts the establishment owes from amounts owed to it.
pub enum ObligationKind {
    Payable,
    Receivable,
}

impl fmt::Display for ObligationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObligationKind::Payable => "Payable",
            ObligationKind::Receivable => "Receivable",
        };
        f.write_str(label)
    }
}
