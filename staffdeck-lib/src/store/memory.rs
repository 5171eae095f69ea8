//! In-memory employee backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::EmployeeBackend;
use crate::error::StoreError;
use crate::model::{Employee, EmployeeId};

/// Employee storage that lives only for the process lifetime.
///
/// Used by tests; the application uses [`super::SqliteEmployeeBackend`].
#[derive(Debug, Default)]
pub struct MemoryEmployeeBackend {
    rows: DashMap<EmployeeId, Employee>,
}

impl MemoryEmployeeBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the backend is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl EmployeeBackend for MemoryEmployeeBackend {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let mut employees: Vec<_> = self.rows.iter().map(|entry| entry.value().clone()).collect();
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        self.rows.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), StoreError> {
        self.rows.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError> {
        self.rows.remove(&id);
        Ok(())
    }
}
