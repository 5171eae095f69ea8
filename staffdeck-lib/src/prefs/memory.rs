//! In-memory preferences backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{PrefsBackend, PrefsError};

/// Preference storage that lives only for the process lifetime.
///
/// Used by tests; the application uses [`super::SqlitePrefsBackend`].
#[derive(Debug, Default)]
pub struct MemoryPrefsBackend {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryPrefsBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrefsBackend for MemoryPrefsBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PrefsError> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), PrefsError> {
        self.entries.remove(key);
        Ok(())
    }
}
