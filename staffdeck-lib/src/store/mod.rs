//! Persisted employee store.
//!
//! Owns the employee list, the selection set, and the active locale. Every
//! mutation writes through the backend before subscribers are notified, so
//! a write is durable by the time the next event observes it. The store is
//! constructed once and handed to whichever component needs it; there is no
//! ambient global.

mod backend;
mod memory;
mod sqlite;

pub use backend::EmployeeBackend;
pub use memory::MemoryEmployeeBackend;
pub use sqlite::SqliteEmployeeBackend;

use std::sync::Arc;

use chrono::Utc;
use log::debug;

use crate::error::StoreError;
use crate::locale::Locale;
use crate::model::{Employee, EmployeeDraft, EmployeeId};
use crate::notify::{self, EventReceiver, EventSender};
use crate::prefs::{self, PrefsProvider};
use crate::selection::{HeaderState, Selection};

/// Notification sent to store subscribers after a mutation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    EmployeesChanged,
    SelectionChanged,
    LocaleChanged(Locale),
}

/// The persisted employee store.
pub struct EmployeeStore {
    backend: Arc<dyn EmployeeBackend>,
    prefs: PrefsProvider,
    /// In-memory mirror of the backend, sorted by id ascending.
    employees: Vec<Employee>,
    selection: Selection,
    locale: Locale,
    listeners: Vec<EventSender<StoreEvent>>,
}

impl EmployeeStore {
    /// Open the store, loading the employee list and the persisted locale.
    pub async fn open(
        backend: Arc<dyn EmployeeBackend>,
        prefs: PrefsProvider,
    ) -> Result<Self, StoreError> {
        let mut employees = backend.list().await?;
        employees.sort_by_key(|employee| employee.id);

        let locale = prefs
            .get_or(prefs::keys::LOCALE, Locale::default())
            .await?;

        debug!("store opened with {} employees", employees.len());

        Ok(Self {
            backend,
            prefs,
            employees,
            selection: Selection::new(),
            locale,
            listeners: Vec::new(),
        })
    }

    /// Register a subscriber for change notifications.
    pub fn subscribe(&mut self) -> EventReceiver<StoreEvent> {
        let (tx, rx) = notify::channel();
        self.listeners.push(tx);
        rx
    }

    fn notify(&mut self, event: StoreEvent) {
        self.listeners.retain(|listener| !listener.is_closed());
        for listener in &self.listeners {
            listener.send(event);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All employees, sorted by id ascending.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.email == email)
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.phone == phone)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a new employee, assigning a fresh id.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] or
    /// [`StoreError::DuplicatePhone`] when another record already carries
    /// the draft's email or phone.
    pub async fn add(&mut self, draft: EmployeeDraft) -> Result<EmployeeId, StoreError> {
        self.ensure_unique(&draft, None)?;

        let id = self.next_id();
        let employee = Employee::from_draft(id, draft);
        self.backend.insert(&employee).await?;

        self.employees.push(employee);
        self.employees.sort_by_key(|employee| employee.id);
        self.notify(StoreEvent::EmployeesChanged);

        debug!("added employee {id}");
        Ok(id)
    }

    /// Overwrite every field of an existing employee.
    pub async fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> Result<(), StoreError> {
        if self.find_by_id(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.ensure_unique(&draft, Some(id))?;

        let employee = Employee::from_draft(id, draft);
        self.backend.update(&employee).await?;

        if let Some(slot) = self.employees.iter_mut().find(|e| e.id == id) {
            *slot = employee;
        }
        self.notify(StoreEvent::EmployeesChanged);

        debug!("updated employee {id}");
        Ok(())
    }

    /// Delete an employee by id. Deleting an absent id is a no-op.
    pub async fn delete(&mut self, id: EmployeeId) -> Result<(), StoreError> {
        self.backend.delete(id).await?;
        self.employees.retain(|employee| employee.id != id);
        self.notify(StoreEvent::EmployeesChanged);

        debug!("deleted employee {id}");
        Ok(())
    }

    /// Delete every selected employee and clear the selection.
    ///
    /// Returns the number of records actually removed (selected ids that no
    /// longer exist are skipped, not errors).
    pub async fn delete_selected(&mut self) -> Result<usize, StoreError> {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return Ok(0);
        }

        let mut removed = 0;
        for id in &ids {
            if self.find_by_id(*id).is_some() {
                self.backend.delete(*id).await?;
                removed += 1;
            }
        }
        self.employees.retain(|employee| !ids.contains(&employee.id));
        self.selection.clear();

        self.notify(StoreEvent::SelectionChanged);
        self.notify(StoreEvent::EmployeesChanged);

        debug!("deleted {removed} selected employees");
        Ok(removed)
    }

    /// Millisecond-timestamp id, bumped past any collision.
    fn next_id(&self) -> EmployeeId {
        let mut id = Utc::now().timestamp_millis();
        while self.find_by_id(id).is_some() {
            id += 1;
        }
        id
    }

    fn ensure_unique(
        &self,
        draft: &EmployeeDraft,
        exclude: Option<EmployeeId>,
    ) -> Result<(), StoreError> {
        let others = self
            .employees
            .iter()
            .filter(|employee| Some(employee.id) != exclude);
        for employee in others {
            if employee.email == draft.email {
                return Err(StoreError::DuplicateEmail);
            }
            if employee.phone == draft.phone {
                return Err(StoreError::DuplicatePhone);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<EmployeeId> {
        self.selection.ids()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selection.is_selected(id)
    }

    /// Header checkbox state for the given page slice.
    pub fn header_state(&self, loaded: &[EmployeeId]) -> HeaderState {
        self.selection.header_state(loaded)
    }

    /// Apply a row-selection change.
    pub fn toggle_selected(&mut self, id: EmployeeId, checked: bool) {
        if checked {
            self.add_selected(id);
        } else {
            self.remove_selected(id);
        }
    }

    /// Select one row.
    pub fn add_selected(&mut self, id: EmployeeId) {
        self.selection.toggle_one(id, true);
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Deselect one row.
    pub fn remove_selected(&mut self, id: EmployeeId) {
        self.selection.toggle_one(id, false);
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Apply the header checkbox to the given page slice.
    pub fn toggle_all(&mut self, loaded: &[EmployeeId], checked: bool) {
        self.selection.toggle_all(loaded, checked);
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Replace the selection wholesale.
    pub fn set_selected(&mut self, ids: Vec<EmployeeId>) {
        self.selection.set(ids);
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Clear all selection.
    pub fn clear_selected(&mut self) {
        self.selection.clear();
        self.notify(StoreEvent::SelectionChanged);
    }

    // =========================================================================
    // Locale
    // =========================================================================

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the active locale and persist the choice.
    pub async fn set_locale(&mut self, locale: Locale) -> Result<(), StoreError> {
        self.prefs.set(prefs::keys::LOCALE, &locale).await?;
        self.locale = locale;
        self.notify(StoreEvent::LocaleChanged(locale));
        Ok(())
    }
}
