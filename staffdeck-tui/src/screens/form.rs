//! The add/edit form screen.
//!
//! Collects raw field values, validates them into a typed draft on submit,
//! and writes through the store. Uniqueness failures come back from the
//! store and surface as the inline banner message.

use std::io;

use crossterm::event::{KeyCode, KeyEvent};
use log::error;

use staffdeck_lib::error::StoreError;
use staffdeck_lib::locale::{Locale, Msg, text};
use staffdeck_lib::model::{Department, EmployeeId, Position};
use staffdeck_lib::store::EmployeeStore;
use staffdeck_lib::validation::{EmployeeInput, FieldError, fields};

use super::{Action, Route};
use crate::ui::{self, Painter, TextStyle};
use crate::widgets::TextField;

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(EmployeeId),
}

/// Focusable fields, in tab order.
const FIELD_ORDER: [&str; 8] = [
    fields::FIRST_NAME,
    fields::LAST_NAME,
    fields::EMPLOYMENT_DATE,
    fields::BIRTH_DATE,
    fields::PHONE,
    fields::EMAIL,
    fields::DEPARTMENT,
    fields::POSITION,
];

pub struct FormScreen {
    mode: FormMode,
    first_name: TextField,
    last_name: TextField,
    employment_date: TextField,
    birth_date: TextField,
    phone: TextField,
    email: TextField,
    department: Option<Department>,
    position: Option<Position>,
    focus: usize,
    errors: Vec<FieldError>,
    banner: Option<Msg>,
}

impl FormScreen {
    /// Empty form for a new employee.
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            first_name: TextField::new(),
            last_name: TextField::new(),
            employment_date: TextField::new(),
            birth_date: TextField::new(),
            phone: TextField::new(),
            email: TextField::new(),
            department: None,
            position: None,
            focus: 0,
            errors: Vec::new(),
            banner: None,
        }
    }

    /// Pre-filled form for an existing employee, or `None` when the id is
    /// unknown (the router shows not-found in that case).
    pub fn edit(store: &EmployeeStore, id: EmployeeId) -> Option<Self> {
        let employee = store.find_by_id(id)?;
        let input = EmployeeInput::from_employee(employee);
        Some(Self {
            mode: FormMode::Edit(id),
            first_name: TextField::with_text(&input.first_name),
            last_name: TextField::with_text(&input.last_name),
            employment_date: TextField::with_text(&input.employment_date),
            birth_date: TextField::with_text(&input.birth_date),
            phone: TextField::with_text(&input.phone),
            email: TextField::with_text(&input.email),
            department: Some(employee.department),
            position: Some(employee.position),
            focus: 0,
            errors: Vec::new(),
            banner: None,
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    fn input(&self) -> EmployeeInput {
        EmployeeInput {
            first_name: self.first_name.text(),
            last_name: self.last_name.text(),
            employment_date: self.employment_date.text(),
            birth_date: self.birth_date.text(),
            phone: self.phone.text(),
            email: self.email.text(),
            department: self
                .department
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            position: self
                .position
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn focused_text_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.employment_date),
            3 => Some(&mut self.birth_date),
            4 => Some(&mut self.phone),
            5 => Some(&mut self.email),
            _ => None,
        }
    }

    pub async fn handle_key(&mut self, key: &KeyEvent, store: &mut EmployeeStore) -> Action {
        match key.code {
            KeyCode::Esc => return Action::Navigate(Route::List),
            KeyCode::Enter => return self.submit(store).await,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELD_ORDER.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_ORDER.len() - 1) % FIELD_ORDER.len();
            }
            _ => match self.focus {
                6 => {
                    if cycles(&key.code) {
                        self.department = cycle_department(self.department, &key.code);
                    }
                }
                7 => {
                    if cycles(&key.code) {
                        self.position = cycle_position(self.position, &key.code);
                    }
                }
                _ => {
                    if let Some(field) = self.focused_text_field() {
                        field.handle_key(key);
                    }
                }
            },
        }
        Action::None
    }

    async fn submit(&mut self, store: &mut EmployeeStore) -> Action {
        self.banner = None;

        let draft = match self.input().validate() {
            Ok(draft) => draft,
            Err(errors) => {
                if let Some(first) = errors.first()
                    && let Some(index) = FIELD_ORDER.iter().position(|f| *f == first.field)
                {
                    self.focus = index;
                }
                self.errors = errors;
                return Action::None;
            }
        };
        self.errors.clear();

        let result = match self.mode {
            FormMode::Add => store.add(draft).await.map(|_| ()),
            FormMode::Edit(id) => store.update(id, draft).await,
        };

        match result {
            Ok(()) => Action::Navigate(Route::List),
            Err(StoreError::DuplicateEmail) => {
                self.banner = Some(Msg::EmailExists);
                Action::None
            }
            Err(StoreError::DuplicatePhone) => {
                self.banner = Some(Msg::PhoneExists);
                Action::None
            }
            Err(StoreError::NotFound(_)) => Action::Navigate(Route::NotFound),
            Err(err) => {
                error!("saving employee failed: {err}");
                Action::None
            }
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    pub fn draw(&self, painter: &mut Painter, store: &EmployeeStore) -> io::Result<()> {
        let locale = store.locale();

        painter.text(1, 0, "STAFFDECK", TextStyle::new().fg(ui::ACCENT).bold())?;
        let title = match self.mode {
            FormMode::Add => text(locale, Msg::AddEmployee),
            FormMode::Edit(_) => text(locale, Msg::EditEmployee),
        };
        painter.text(1, 2, title, TextStyle::new().fg(ui::ACCENT).bold())?;

        let mut y = 4;
        self.draw_text_row(painter, y, locale, 0, Msg::FirstName, &self.first_name, "")?;
        y += 2;
        self.draw_text_row(painter, y, locale, 1, Msg::LastName, &self.last_name, "")?;
        y += 2;
        self.draw_text_row(
            painter,
            y,
            locale,
            2,
            Msg::DateOfEmployment,
            &self.employment_date,
            "YYYY-MM-DD",
        )?;
        y += 2;
        self.draw_text_row(
            painter,
            y,
            locale,
            3,
            Msg::DateOfBirth,
            &self.birth_date,
            "YYYY-MM-DD",
        )?;
        y += 2;
        self.draw_text_row(
            painter,
            y,
            locale,
            4,
            Msg::Phone,
            &self.phone,
            "+90 555 444 3322",
        )?;
        y += 2;
        self.draw_text_row(painter, y, locale, 5, Msg::Email, &self.email, "")?;
        y += 2;
        self.draw_select_row(
            painter,
            y,
            locale,
            6,
            Msg::Department,
            self.department.map(|d| d.as_str()),
        )?;
        y += 2;
        self.draw_select_row(
            painter,
            y,
            locale,
            7,
            Msg::Position,
            self.position.map(|p| p.as_str()),
        )?;
        y += 2;

        if let Some(banner) = self.banner {
            painter.text(
                1,
                y,
                text(locale, banner),
                TextStyle::new().fg(ui::ERROR).bold(),
            )?;
        }

        let hints = format!(
            "[Enter] {}  ·  [Esc] {}  ·  [Tab] ↓",
            text(locale, Msg::Submit),
            text(locale, Msg::Cancel)
        );
        painter.text(
            1,
            painter.height().saturating_sub(1),
            &hints,
            TextStyle::new().fg(ui::MUTED).dim(),
        )?;

        Ok(())
    }

    fn field_error(&self, index: usize) -> Option<Msg> {
        self.errors
            .iter()
            .find(|err| err.field == FIELD_ORDER[index])
            .map(|err| err.message)
    }

    fn draw_text_row(
        &self,
        painter: &mut Painter,
        y: u16,
        locale: Locale,
        index: usize,
        label: Msg,
        field: &TextField,
        placeholder: &str,
    ) -> io::Result<()> {
        let focused = self.focus == index;
        self.draw_label(painter, y, locale, label, focused)?;

        let value_x = 1 + LABEL_WIDTH as u16;
        let value = field.text();
        if value.is_empty() && !placeholder.is_empty() {
            painter.text(value_x, y, placeholder, TextStyle::new().fg(ui::MUTED).dim())?;
        } else {
            painter.text(value_x, y, &ui::pad(&value, VALUE_WIDTH), TextStyle::new())?;
        }

        if focused {
            // Block cursor over the character at the edit position.
            let prefix: String = value.chars().take(field.cursor()).collect();
            let cursor_x = value_x + ui::width_of(&prefix) as u16;
            let under: String = value.chars().nth(field.cursor()).map_or_else(
                || " ".to_string(),
                |ch| ch.to_string(),
            );
            painter.text(cursor_x, y, &under, TextStyle::new().reverse())?;
        }

        self.draw_error(painter, y, locale, index)
    }

    fn draw_select_row(
        &self,
        painter: &mut Painter,
        y: u16,
        locale: Locale,
        index: usize,
        label: Msg,
        value: Option<&'static str>,
    ) -> io::Result<()> {
        let focused = self.focus == index;
        self.draw_label(painter, y, locale, label, focused)?;

        let value_x = 1 + LABEL_WIDTH as u16;
        let shown = value.unwrap_or(text(locale, Msg::Select));
        let style = if value.is_some() {
            TextStyle::new()
        } else {
            TextStyle::new().fg(ui::MUTED)
        };
        painter.text(value_x, y, &ui::pad(shown, VALUE_WIDTH - 6), style)?;

        if focused {
            painter.text(
                value_x + (VALUE_WIDTH as u16) - 5,
                y,
                "◂ ▸",
                TextStyle::new().fg(ui::ACCENT),
            )?;
        }

        self.draw_error(painter, y, locale, index)
    }

    fn draw_label(
        &self,
        painter: &mut Painter,
        y: u16,
        locale: Locale,
        label: Msg,
        focused: bool,
    ) -> io::Result<()> {
        let style = if focused {
            TextStyle::new().fg(ui::ACCENT).bold()
        } else {
            TextStyle::new()
        };
        painter.text(1, y, &ui::pad(text(locale, label), LABEL_WIDTH), style)
    }

    fn draw_error(
        &self,
        painter: &mut Painter,
        y: u16,
        locale: Locale,
        index: usize,
    ) -> io::Result<()> {
        if let Some(message) = self.field_error(index) {
            let x = 1 + (LABEL_WIDTH + VALUE_WIDTH + 2) as u16;
            painter.text(x, y, text(locale, message), TextStyle::new().fg(ui::ERROR))?;
        }
        Ok(())
    }
}

fn cycles(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
    )
}

fn cycle_department(current: Option<Department>, code: &KeyCode) -> Option<Department> {
    let backwards = matches!(code, KeyCode::Left);
    step(&Department::ALL, current, backwards)
}

fn cycle_position(current: Option<Position>, code: &KeyCode) -> Option<Position> {
    let backwards = matches!(code, KeyCode::Left);
    step(&Position::ALL, current, backwards)
}

/// Cycle through `None` (the "Select" entry) and every variant.
fn step<T: Copy + PartialEq>(all: &[T], current: Option<T>, backwards: bool) -> Option<T> {
    let position = current.and_then(|value| all.iter().position(|v| *v == value));
    if backwards {
        match position {
            Some(0) => None,
            Some(i) => Some(all[i - 1]),
            None => all.last().copied(),
        }
    } else {
        match position {
            Some(i) if i + 1 < all.len() => Some(all[i + 1]),
            Some(_) => None,
            None => all.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cycle_passes_through_the_empty_entry() {
        let mut current = None;
        current = step(&Department::ALL, current, false);
        assert_eq!(current, Some(Department::Analytics));
        current = step(&Department::ALL, current, false);
        assert_eq!(current, Some(Department::Tech));
        current = step(&Department::ALL, current, false);
        assert_eq!(current, None);
    }

    #[test]
    fn test_select_cycle_runs_backwards() {
        assert_eq!(step(&Position::ALL, None, true), Some(Position::Senior));
        assert_eq!(
            step(&Position::ALL, Some(Position::Junior), true),
            None
        );
    }
}
