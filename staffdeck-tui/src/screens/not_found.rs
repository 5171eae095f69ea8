//! Catch-all screen for navigation targets that no longer exist.

use std::io;

use crossterm::event::{KeyCode, KeyEvent};

use staffdeck_lib::locale::{Msg, text};
use staffdeck_lib::store::EmployeeStore;

use super::{Action, Route};
use crate::ui::{self, Painter, TextStyle};

#[derive(Debug, Default)]
pub struct NotFoundScreen;

impl NotFoundScreen {
    pub fn handle_key(&self, key: &KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc | KeyCode::Enter => Action::Navigate(Route::List),
            _ => Action::None,
        }
    }

    pub fn draw(&self, painter: &mut Painter, store: &EmployeeStore) -> io::Result<()> {
        let locale = store.locale();

        painter.text(1, 0, "STAFFDECK", TextStyle::new().fg(ui::ACCENT).bold())?;
        painter.text(
            1,
            2,
            text(locale, Msg::PageNotFound),
            TextStyle::new().fg(ui::ACCENT).bold(),
        )?;
        painter.text(1, 4, text(locale, Msg::PageNotFoundBody), TextStyle::new())?;
        painter.text(
            1,
            painter.height().saturating_sub(1),
            "[Esc]",
            TextStyle::new().fg(ui::MUTED).dim(),
        )?;
        Ok(())
    }
}
