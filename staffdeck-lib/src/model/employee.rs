//! Employee record and its enum-like attribute types.

use chrono::NaiveDate;

use crate::grid::GridRow;

/// Unique, stable employee identifier.
///
/// Assigned once at creation from the current Unix time in milliseconds,
/// then never changed. Selection tracking and update/delete targeting key
/// off this value.
pub type EmployeeId = i64;

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    /// Convert to string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Analytics => "Analytics",
            Department::Tech => "Tech",
        }
    }

    /// Parse from database string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Analytics" => Some(Department::Analytics),
            "Tech" => Some(Department::Tech),
            _ => None,
        }
    }
}

/// Seniority level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    /// All positions, in display order.
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    /// Convert to string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }

    /// Parse from database string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Junior" => Some(Position::Junior),
            "Medior" => Some(Position::Medior),
            "Senior" => Some(Position::Senior),
            _ => None,
        }
    }
}

/// An employee record.
///
/// Records are owned by the store. The UI never mutates one in place; edits
/// go through [`EmployeeDraft`] and replace the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub employment_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    /// Build a record from a draft and a freshly assigned id.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            employment_date: draft.employment_date,
            birth_date: draft.birth_date,
            phone: draft.phone,
            email: draft.email,
            department: draft.department,
            position: draft.position,
        }
    }

    /// Full display name, `first last`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Every employee field except the identifier.
///
/// Produced by form validation; consumed by `add` (which assigns an id) and
/// `update` (full-field overwrite of an existing record).
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub employment_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl GridRow for Employee {
    fn id(&self) -> EmployeeId {
        self.id
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "employment_date" => Some(self.employment_date.to_string()),
            "birth_date" => Some(self.birth_date.to_string()),
            "phone" => Some(self.phone.clone()),
            "email" => Some(self.email.clone()),
            "department" => Some(self.department.as_str().to_string()),
            "position" => Some(self.position.as_str().to_string()),
            _ => None,
        }
    }
}
