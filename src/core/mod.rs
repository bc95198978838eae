//! Derived computations: business-day arithmetic, balance reconciliation,
//! method allocation, occupancy aggregation, and the engine facade.

pub mod allocation;
pub mod calendar;
pub mod engine;
pub mod occupancy;
pub mod ratelimit;
pub mod reconcile;
pub mod services;
