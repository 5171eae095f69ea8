//! Employee storage backend trait.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Employee, EmployeeId};

/// Backend trait for durable employee storage.
///
/// The store keeps an in-memory mirror for synchronous reads; every
/// mutation is written through one of these implementations before the
/// store notifies its subscribers.
#[async_trait]
pub trait EmployeeBackend: Send + Sync {
    /// Load every stored employee.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert a new employee.
    async fn insert(&self, employee: &Employee) -> Result<(), StoreError>;

    /// Overwrite an existing employee by id.
    async fn update(&self, employee: &Employee) -> Result<(), StoreError>;

    /// Delete an employee by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError>;
}
