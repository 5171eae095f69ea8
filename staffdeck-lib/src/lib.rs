//! Core library for the staffdeck employee roster dashboard.
//!
//! Holds the persisted employee store, the pagination engine, selection
//! tracking, and the table/card projection consumed by the terminal UI.
//! Everything here is plain state and logic; rendering lives in the
//! `staffdeck-tui` member.

pub mod controller;
pub mod error;
pub mod grid;
pub mod locale;
pub mod model;
pub mod notify;
pub mod pagination;
pub mod prefs;
pub mod selection;
pub mod store;
pub mod validation;

pub use error::StoreError;
pub use model::{Department, Employee, EmployeeDraft, EmployeeId, Position};
pub use store::{EmployeeStore, StoreEvent};
