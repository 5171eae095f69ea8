//! Error types.

use thiserror::Error;

use crate::model::EmployeeId;

/// Store error type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("preferences error: {0}")]
    Prefs(#[from] PrefsError),
    #[error("employee with id {0} not found")]
    NotFound(EmployeeId),
    #[error("another employee already uses this email")]
    DuplicateEmail,
    #[error("another employee already uses this phone number")]
    DuplicatePhone,
}

/// Preferences error type.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}
