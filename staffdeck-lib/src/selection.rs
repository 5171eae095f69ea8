//! Row-selection tracking.
//!
//! Selection is kept as a set of employee ids so it stays stable while rows
//! are re-sliced by pagination. The header checkbox derives its state from
//! the ids of the currently loaded page slice.

use std::collections::HashSet;

use crate::model::EmployeeId;

/// State of the header (select-all) checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Every loaded row is selected.
    AllSelected,
    /// No loaded row is selected, or only some are (a partial selection
    /// collapses to unchecked).
    NoneSelected,
    /// There are no loaded rows; the control is disabled entirely.
    Disabled,
}

/// Set of selected employee ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: HashSet<EmployeeId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected ids, sorted for deterministic ordering.
    pub fn ids(&self) -> Vec<EmployeeId> {
        let mut ids: Vec<_> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Membership test for one row.
    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    /// True iff `loaded` is non-empty and every loaded id is selected.
    pub fn is_all_selected(&self, loaded: &[EmployeeId]) -> bool {
        !loaded.is_empty() && loaded.iter().all(|id| self.selected.contains(id))
    }

    /// Header checkbox state for the given page slice.
    pub fn header_state(&self, loaded: &[EmployeeId]) -> HeaderState {
        if loaded.is_empty() {
            HeaderState::Disabled
        } else if self.is_all_selected(loaded) {
            HeaderState::AllSelected
        } else {
            HeaderState::NoneSelected
        }
    }

    /// Select or deselect a single row. Idempotent: applying the same state
    /// twice leaves the set unchanged.
    pub fn toggle_one(&mut self, id: EmployeeId, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Apply the header checkbox.
    ///
    /// Checked replaces the selection with exactly the loaded rows:
    /// last-write-wins over the whole set, so selections made on another
    /// page are discarded. Unchecked clears everything.
    pub fn toggle_all(&mut self, loaded: &[EmployeeId], checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(loaded.iter().copied());
        }
    }

    /// Replace the selection wholesale.
    pub fn set(&mut self, ids: Vec<EmployeeId>) {
        self.selected = ids.into_iter().collect();
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
