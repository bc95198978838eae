#![doc(test(attr(deny(warnings))))]

//! Lodging Core reconciles financial obligations against their recorded
//! payments, derives business-day-aware due dates for open balances, and
//! aggregates payments and occupancy into monthly reporting series.
//!
//! The engine is read-only: given an establishment identifier and a time
//! window it reads ledger facts through a [`storage::LedgerStore`] and
//! produces derived numbers. Record creation and editing live elsewhere.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Lodging Core tracing initialized.");
    });
}
