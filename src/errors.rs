use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for the reconciliation and reporting engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Ledger store error: {0}")]
    Store(String),
    #[error("Invalid date window: {0}")]
    InvalidWindow(String),
    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = StdResult<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serde(err.to_string())
    }
}

impl From<crate::domain::DateWindowError> for EngineError {
    fn from(err: crate::domain::DateWindowError) -> Self {
        EngineError::InvalidWindow(err.to_string())
    }
}

impl From<crate::domain::InvalidStay> for EngineError {
    fn from(err: crate::domain::InvalidStay) -> Self {
        EngineError::InvalidReservation(err.to_string())
    }
}
