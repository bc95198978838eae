//! Stateless services composing the core computations into aging and
//! reporting views.

pub mod aging_service;
pub mod reporting_service;

pub use aging_service::{AgingRow, AgingService, ObligationBalance};
pub use reporting_service::{MethodSlice, MonthlyReport, ReportInputs, ReportingService, RoomUsage};
