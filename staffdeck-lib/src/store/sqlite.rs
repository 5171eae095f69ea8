//! SQLite employee backend.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use chrono::NaiveDate;

use super::EmployeeBackend;
use crate::error::StoreError;
use crate::model::{Department, Employee, EmployeeId, Position};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed employee storage.
pub struct SqliteEmployeeBackend {
    client: Client,
}

impl SqliteEmployeeBackend {
    /// Create a new SQLite employee backend at the given path.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS employees (
                        id INTEGER PRIMARY KEY,
                        first_name TEXT NOT NULL,
                        last_name TEXT NOT NULL,
                        employment_date TEXT NOT NULL,
                        birth_date TEXT NOT NULL,
                        phone TEXT NOT NULL,
                        email TEXT NOT NULL,
                        department TEXT NOT NULL,
                        position TEXT NOT NULL
                    )",
                    [],
                )
            })
            .await?;

        Ok(Self { client })
    }
}

fn employee_from_row(row: &rusqlite::Row<'_>) -> Result<Employee, rusqlite::Error> {
    let employment_date: String = row.get(3)?;
    let birth_date: String = row.get(4)?;
    let department: String = row.get(7)?;
    let position: String = row.get(8)?;

    Ok(Employee {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        employment_date: NaiveDate::parse_from_str(&employment_date, DATE_FORMAT)
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        birth_date: NaiveDate::parse_from_str(&birth_date, DATE_FORMAT)
            .map_err(|_| rusqlite::Error::InvalidQuery)?,
        phone: row.get(5)?,
        email: row.get(6)?,
        department: Department::from_str(&department).ok_or(rusqlite::Error::InvalidQuery)?,
        position: Position::from_str(&position).ok_or(rusqlite::Error::InvalidQuery)?,
    })
}

#[async_trait]
impl EmployeeBackend for SqliteEmployeeBackend {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.client
            .conn(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, first_name, last_name, employment_date, birth_date,
                            phone, email, department, position
                     FROM employees ORDER BY id",
                )?;
                let rows = stmt.query_map([], employee_from_row)?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await
            .map_err(StoreError::from)
    }

    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        let employee = employee.clone();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO employees (id, first_name, last_name, employment_date,
                                            birth_date, phone, email, department, position)
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        employee.id,
                        &employee.first_name,
                        &employee.last_name,
                        employee.employment_date.format(DATE_FORMAT).to_string(),
                        employee.birth_date.format(DATE_FORMAT).to_string(),
                        &employee.phone,
                        &employee.email,
                        employee.department.as_str(),
                        employee.position.as_str(),
                    ],
                )
            })
            .await?;

        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), StoreError> {
        let employee = employee.clone();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "UPDATE employees SET first_name = ?, last_name = ?, employment_date = ?,
                                          birth_date = ?, phone = ?, email = ?,
                                          department = ?, position = ?
                     WHERE id = ?",
                    rusqlite::params![
                        &employee.first_name,
                        &employee.last_name,
                        employee.employment_date.format(DATE_FORMAT).to_string(),
                        employee.birth_date.format(DATE_FORMAT).to_string(),
                        &employee.phone,
                        &employee.email,
                        employee.department.as_str(),
                        employee.position.as_str(),
                        employee.id,
                    ],
                )
            })
            .await?;

        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError> {
        self.client
            .conn(move |conn| conn.execute("DELETE FROM employees WHERE id = ?", [id]))
            .await?;

        Ok(())
    }
}
