//! Form-input validation.
//!
//! The add/edit form collects raw strings; [`EmployeeInput::validate`]
//! turns them into a typed [`EmployeeDraft`] or a list of per-field errors.
//! Uniqueness of email and phone is the store's concern, not this module's.

use std::sync::OnceLock;

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;

use crate::locale::Msg;
use crate::model::{Department, Employee, EmployeeDraft, Position};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PHONE_PATTERN: &str = r"^\+90\s\d{3}\s\d{3}\s(\d{2}\s\d{2}|\d{4})$";

/// Field names used in error reporting and form focus.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMPLOYMENT_DATE: &str = "employment_date";
    pub const BIRTH_DATE: &str = "birth_date";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const DEPARTMENT: &str = "department";
    pub const POSITION: &str = "position";
}

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: Msg,
}

impl FieldError {
    fn new(field: &'static str, message: Msg) -> Self {
        Self { field, message }
    }
}

/// Raw form values, one string per employee field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub employment_date: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeInput {
    /// Pre-fill from an existing record, for the edit form.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            employment_date: employee.employment_date.format(DATE_FORMAT).to_string(),
            birth_date: employee.birth_date.format(DATE_FORMAT).to_string(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            department: employee.department.as_str().to_string(),
            position: employee.position.as_str().to_string(),
        }
    }

    /// Validate every field, returning a typed draft or all failures.
    pub fn validate(&self) -> Result<EmployeeDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(message) = check_name(&self.first_name) {
            errors.push(FieldError::new(fields::FIRST_NAME, message));
        }
        if let Some(message) = check_name(&self.last_name) {
            errors.push(FieldError::new(fields::LAST_NAME, message));
        }

        let employment_date = match check_date(&self.employment_date) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.push(FieldError::new(fields::EMPLOYMENT_DATE, message));
                None
            }
        };
        let birth_date = match check_date(&self.birth_date) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.push(FieldError::new(fields::BIRTH_DATE, message));
                None
            }
        };

        if let Some(message) = check_phone(&self.phone) {
            errors.push(FieldError::new(fields::PHONE, message));
        }
        if let Some(message) = check_email(&self.email) {
            errors.push(FieldError::new(fields::EMAIL, message));
        }

        let department = Department::from_str(self.department.trim());
        if department.is_none() {
            errors.push(FieldError::new(fields::DEPARTMENT, Msg::Required));
        }
        let position = Position::from_str(self.position.trim());
        if position.is_none() {
            errors.push(FieldError::new(fields::POSITION, Msg::Required));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // All Nones were reported above.
        Ok(EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            employment_date: employment_date.unwrap_or_default(),
            birth_date: birth_date.unwrap_or_default(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            department: department.unwrap_or(Department::Analytics),
            position: position.unwrap_or(Position::Junior),
        })
    }
}

fn check_name(value: &str) -> Option<Msg> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(Msg::Required)
    } else if trimmed.chars().count() < NAME_MIN {
        Some(Msg::TooShort)
    } else if trimmed.chars().count() > NAME_MAX {
        Some(Msg::TooLong)
    } else {
        None
    }
}

fn check_date(value: &str) -> Result<NaiveDate, Msg> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Msg::Required);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| Msg::InvalidDate)
}

fn check_phone(value: &str) -> Option<Msg> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(Msg::Required)
    } else if !phone_regex().is_match(trimmed) {
        Some(Msg::InvalidPhone)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<Msg> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(Msg::Required)
    } else if !EmailAddress::is_valid(trimmed) {
        Some(Msg::InvalidEmail)
    } else {
        None
    }
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("static pattern compiles"))
}
