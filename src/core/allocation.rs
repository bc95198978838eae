//! Splits a payment's amount across its declared settlement methods for
//! category-level revenue breakdowns. Reporting only; reconciliation always
//! works with full payment amounts.

use crate::domain::{Payment, PaymentMethod};

/// Even split of the payment amount across its distinct methods. The integer
/// remainder lands on the last method so the shares sum back to the exact
/// amount. How much each method actually covered is not recorded, so an even
/// split is the best available approximation.
pub fn method_shares(payment: &Payment) -> Vec<(PaymentMethod, i64)> {
    let methods = payment.methods();
    let count = methods.len() as i64;
    if count == 0 {
        return Vec::new();
    }
    let share = payment.amount / count;
    let last = payment.amount - share * (count - 1);
    methods
        .iter()
        .enumerate()
        .map(|(index, method)| {
            let value = if index as i64 == count - 1 { last } else { share };
            (*method, value)
        })
        .collect()
}
