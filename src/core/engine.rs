//! Engine facade: the read-only boundary consumed by presentation layers.
//!
//! Every call reads a fresh snapshot from the ledger store, derives its
//! numbers, and discards the intermediates. Nothing is cached and nothing
//! is written back, so separate requests share no mutable state.

use tracing::debug;

use crate::config::ReportingConfig;
use crate::core::services::{
    AgingRow, AgingService, MonthlyReport, ObligationBalance, ReportInputs, ReportingService,
};
use crate::domain::ReportPeriod;
use crate::errors::Result;
use crate::storage::LedgerStore;
use crate::time::Clock;

/// Reconciliation and reporting engine over a [`LedgerStore`].
///
/// The clock is injected so aging computations are deterministic under test;
/// production callers pass [`crate::time::SystemClock`].
pub struct LedgerEngine {
    store: Box<dyn LedgerStore>,
    clock: Box<dyn Clock>,
    config: ReportingConfig,
}

impl LedgerEngine {
    pub fn new(store: Box<dyn LedgerStore>, clock: Box<dyn Clock>) -> Self {
        Self::with_config(store, clock, ReportingConfig::default())
    }

    pub fn with_config(
        store: Box<dyn LedgerStore>,
        clock: Box<dyn Clock>,
        config: ReportingConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// Open payables with reconciled balances; settled entries are dropped.
    pub fn payables(&self, establishment: &str) -> Result<Vec<ObligationBalance>> {
        let obligations = self.store.payables(establishment)?;
        let balances = AgingService::obligation_balances(&obligations);
        debug!(establishment, rows = balances.len(), "reconciled payables");
        Ok(balances)
    }

    /// Open receivables with reconciled balances; settled entries are dropped.
    pub fn receivables(&self, establishment: &str) -> Result<Vec<ObligationBalance>> {
        let obligations = self.store.receivables(establishment)?;
        let balances = AgingService::obligation_balances(&obligations);
        debug!(establishment, rows = balances.len(), "reconciled receivables");
        Ok(balances)
    }

    /// Company-owed aging rows: corporate reservations with an unpaid
    /// balance, due a contractual number of business days after check-out.
    pub fn pending_companies(&self, establishment: &str) -> Result<Vec<AgingRow>> {
        let reservations = self.store.reservations(establishment)?;
        let rooms = self.store.rooms(establishment)?;
        let rows = AgingService::company_rows(&reservations, &rooms, self.clock.today());
        debug!(establishment, rows = rows.len(), "aged company balances");
        Ok(rows)
    }

    /// Person-owed aging rows: guest reservations with an unpaid balance,
    /// due at check-out.
    pub fn pending_persons(&self, establishment: &str) -> Result<Vec<AgingRow>> {
        let reservations = self.store.reservations(establishment)?;
        let rooms = self.store.rooms(establishment)?;
        let rows = AgingService::person_rows(&reservations, &rooms, self.clock.today());
        debug!(establishment, rows = rows.len(), "aged person balances");
        Ok(rows)
    }

    /// Full monthly report. Out-of-range `year`/`month` input falls back to
    /// the month containing today, per the configured bounds.
    pub fn report(&self, establishment: &str, year: i32, month: u32) -> Result<MonthlyReport> {
        let period = ReportPeriod::from_input_bounded(
            year,
            month,
            self.clock.today(),
            self.config.min_report_year,
            self.config.max_report_year,
        );
        let window = period.window();
        let prev_window = period.prev().window();

        // One snapshot per request: all facts are fetched before any
        // aggregation runs, so the report is internally consistent even if
        // the store mutates concurrently.
        let reservations = self
            .store
            .reservations_overlapping(establishment, &window)?;
        let prev_reservations = self
            .store
            .reservations_overlapping(establishment, &prev_window)?;
        let payments = self.store.payments_between(establishment, &window)?;
        let prev_payments = self.store.payments_between(establishment, &prev_window)?;
        let rooms = self.store.rooms(establishment)?;

        let inputs = ReportInputs {
            reservations: &reservations,
            prev_reservations: &prev_reservations,
            payments: &payments,
            prev_payments: &prev_payments,
            rooms: &rooms,
        };
        let report = ReportingService::assemble(inputs, period, self.config.top_rooms_limit);
        debug!(
            establishment,
            year = period.year(),
            month = period.month(),
            monthly_total = report.monthly_total,
            nights_sold = report.nights_sold,
            "assembled monthly report"
        );
        Ok(report)
    }
}
