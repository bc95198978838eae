//! Pure domain models (payments, obligations, reservations, rooms, periods).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod obligation;
pub mod payment;
pub mod period;
pub mod reservation;
pub mod room;

pub use common::*;
pub use obligation::*;
pub use payment::*;
pub use period::*;
pub use reservation::*;
pub use room::*;
