//! Balance reconciliation: derives paid and pending amounts for a single
//! obligation from its payment history. Only completed payments count.

use serde::Serialize;

use crate::domain::Payment;

/// Paid/pending split for one obligation. Pending never goes negative, so an
/// overpaid obligation simply reports zero pending.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BalanceBreakdown {
    pub paid: i64,
    pub pending: i64,
}

impl BalanceBreakdown {
    pub fn is_settled(&self) -> bool {
        self.pending == 0
    }
}

/// Reconciles a nominal amount against its completed payments.
pub fn reconcile(nominal: i64, payments: &[Payment]) -> BalanceBreakdown {
    let paid: i64 = payments
        .iter()
        .filter(|payment| payment.is_completed())
        .map(|payment| payment.amount)
        .sum();
    BalanceBreakdown {
        paid,
        pending: (nominal - paid).max(0),
    }
}
