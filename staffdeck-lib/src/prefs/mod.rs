//! Typed key-value storage for UI preferences.
//!
//! Holds the few settings that survive restarts but are not roster data:
//! the active locale and the list page's view mode. Values are serialized
//! with bincode over a byte-oriented backend.

mod backend;
mod memory;
mod sqlite;

pub use backend::PrefsBackend;
pub use memory::MemoryPrefsBackend;
pub use sqlite::SqlitePrefsBackend;

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub use crate::error::PrefsError;

/// Well-known preference keys.
pub mod keys {
    pub const LOCALE: &str = "locale";
    pub const VIEW_MODE: &str = "view_mode";
}

/// How the list page lays out employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Dense table with a selection column.
    #[default]
    Table,
    /// Labeled cards, two per row.
    Cards,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

/// Typed preferences provider over a [`PrefsBackend`].
#[derive(Clone)]
pub struct PrefsProvider {
    backend: Arc<dyn PrefsBackend>,
}

impl PrefsProvider {
    /// Create a new provider with the given backend.
    pub fn new(backend: impl PrefsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(PrefsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, falling back to a default.
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, PrefsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), PrefsError> {
        let bytes = bincode::serialize(value).map_err(PrefsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await
    }

    /// Delete a key.
    pub async fn delete(&self, key: &str) -> Result<(), PrefsError> {
        self.backend.delete(key).await
    }
}
