//! The roster list screen: table/card views, selection, pagination, and the
//! delete confirmation modal.

use std::io;

use crossterm::event::{KeyCode, KeyEvent};
use log::error;

use staffdeck_lib::controller::{DEFAULT_PAGE_SIZE, PageController};
use staffdeck_lib::grid::{Column, RenderedRow, render_rows};
use staffdeck_lib::locale::{Locale, Msg, text};
use staffdeck_lib::model::{Employee, EmployeeId};
use staffdeck_lib::notify::EventReceiver;
use staffdeck_lib::pagination::{PageItem, Pager};
use staffdeck_lib::prefs::{PrefsProvider, ViewMode, keys};
use staffdeck_lib::selection::HeaderState;
use staffdeck_lib::store::EmployeeStore;

use super::{Action, Route};
use crate::ui::{self, Painter, TextStyle};

const SELECT_COL_WIDTH: u16 = 4;

pub struct ListScreen {
    pager: Pager,
    controller: PageController,
    view_mode: ViewMode,
    /// Focused row within the current page slice.
    cursor: usize,
    confirm_delete: Option<EmployeeId>,
}

impl ListScreen {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            pager: Pager::new(0),
            controller: PageController::new(DEFAULT_PAGE_SIZE),
            view_mode,
            cursor: 0,
            confirm_delete: None,
        }
    }

    /// The pagination bar's page-changed notifications.
    pub fn subscribe_pager(&mut self) -> EventReceiver<u32> {
        self.pager.subscribe()
    }

    /// Apply a page-changed notification.
    pub fn set_page(&mut self, page: u32, item_count: usize) {
        self.controller.set_page(page, item_count);
        self.cursor = 0;
    }

    /// Re-derive pagination state after the employee count changed.
    pub fn refresh(&mut self, item_count: usize) {
        self.controller.reclamp(item_count);
        self.pager.set_total_pages(self.controller.total_pages(item_count));
        if self.pager.current_page() != self.controller.current_page() {
            self.pager.jump_to(self.controller.current_page());
        }
        self.clamp_cursor(item_count);
    }

    fn clamp_cursor(&mut self, item_count: usize) {
        let start =
            (self.controller.current_page().saturating_sub(1)) as usize * self.controller.page_size();
        let slice_len = item_count.saturating_sub(start).min(self.controller.page_size());
        self.cursor = self.cursor.min(slice_len.saturating_sub(1));
    }

    fn page_ids(&self, store: &EmployeeStore) -> Vec<EmployeeId> {
        self.controller
            .page_slice(store.employees())
            .iter()
            .map(|employee| employee.id)
            .collect()
    }

    fn focused_id(&self, store: &EmployeeStore) -> Option<EmployeeId> {
        self.page_ids(store).get(self.cursor).copied()
    }

    pub async fn handle_key(
        &mut self,
        key: &KeyEvent,
        store: &mut EmployeeStore,
        prefs: &PrefsProvider,
    ) -> Action {
        self.pager
            .set_total_pages(self.controller.total_pages(store.len()));

        if let Some(id) = self.confirm_delete {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.confirm_delete = None;
                    if let Err(err) = store.delete(id).await {
                        error!("delete failed: {err}");
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') => self.confirm_delete = None,
                _ => {}
            }
            return Action::None;
        }

        let ids = self.page_ids(store);

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(ids.len().saturating_sub(1));
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.focused_id(store) {
                    let checked = !store.is_selected(id);
                    store.toggle_selected(id, checked);
                }
            }
            KeyCode::Char('t') => {
                // Header checkbox; disabled when the slice is empty.
                if !ids.is_empty() {
                    let checked = !store.selection().is_all_selected(&ids);
                    store.toggle_all(&ids, checked);
                }
            }
            KeyCode::Char('a') => return Action::Navigate(Route::Add),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.focused_id(store) {
                    return Action::Navigate(Route::Edit(id));
                }
            }
            KeyCode::Char('d') => {
                self.confirm_delete = self.focused_id(store);
            }
            KeyCode::Char('x') => {
                if store.selected_count() > 0
                    && let Err(err) = store.delete_selected().await
                {
                    error!("bulk delete failed: {err}");
                }
            }
            KeyCode::Char('v') => {
                self.view_mode = self.view_mode.toggled();
                if let Err(err) = prefs.set(keys::VIEW_MODE, &self.view_mode).await {
                    error!("saving view mode failed: {err}");
                }
            }
            KeyCode::Char('l') => {
                let next = store.locale().next();
                if let Err(err) = store.set_locale(next).await {
                    error!("switching locale failed: {err}");
                }
            }
            KeyCode::Left | KeyCode::PageUp => {
                self.pager.retreat();
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.pager.advance();
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
                let page = u32::from(ch as u8 - b'0');
                if page <= self.pager.total_pages() {
                    self.pager.jump_to(page);
                }
            }
            _ => {}
        }

        Action::None
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    pub fn draw(&self, painter: &mut Painter, store: &EmployeeStore) -> io::Result<()> {
        let locale = store.locale();
        let width = painter.width() as usize;

        painter.text(1, 0, "STAFFDECK", TextStyle::new().fg(ui::ACCENT).bold())?;
        let lang = format!("[a] {}  [l] {}", text(locale, Msg::AddEmployee), locale.as_str());
        let lang_x = width.saturating_sub(ui::width_of(&lang) + 1) as u16;
        painter.text(lang_x, 0, &lang, TextStyle::new().fg(ui::MUTED))?;

        painter.text(
            1,
            2,
            text(locale, Msg::EmployeeList),
            TextStyle::new().fg(ui::ACCENT).bold(),
        )?;
        if store.selected_count() > 0 {
            let bulk = format!(
                "[x] {} ({})",
                text(locale, Msg::DeleteSelected),
                store.selected_count()
            );
            let bulk_x = width.saturating_sub(ui::width_of(&bulk) + 1) as u16;
            painter.text(bulk_x, 2, &bulk, TextStyle::new().fg(ui::ACCENT))?;
        }

        let slice = self.controller.page_slice(store.employees());
        let columns = columns(locale);

        let content_end = match self.view_mode {
            ViewMode::Table => self.draw_table(painter, store, slice, &columns, 4)?,
            ViewMode::Cards => self.draw_cards(painter, slice, &columns, locale, 4)?,
        };

        // Controls stay hidden while everything fits on one page.
        if self.controller.total_pages(store.len()) > 1 {
            self.draw_pagination(painter, store.len(), content_end + 1)?;
        }

        let hints = format!(
            "j/k  ·  space  ·  t {}  ·  e {}  ·  d {}  ·  x  ·  v  ·  l  ·  ←/→  ·  q",
            text(locale, Msg::Select),
            text(locale, Msg::Edit),
            text(locale, Msg::Delete),
        );
        painter.text(
            1,
            painter.height().saturating_sub(1),
            &hints,
            TextStyle::new().fg(ui::MUTED).dim(),
        )?;

        if let Some(id) = self.confirm_delete {
            self.draw_confirm(painter, store, id)?;
        }

        Ok(())
    }

    fn draw_table(
        &self,
        painter: &mut Painter,
        store: &EmployeeStore,
        slice: &[Employee],
        columns: &[Column<Employee>],
        top: u16,
    ) -> io::Result<u16> {
        let ids: Vec<_> = slice.iter().map(|employee| employee.id).collect();

        let header_mark = match store.header_state(&ids) {
            HeaderState::AllSelected => "[x]",
            HeaderState::NoneSelected => "[ ]",
            HeaderState::Disabled => "[-]",
        };
        painter.text(1, top, header_mark, TextStyle::new().fg(ui::MUTED))?;

        let mut x = 1 + SELECT_COL_WIDTH;
        for column in columns {
            let col_width = column.width.unwrap_or(14) as usize;
            painter.text(
                x,
                top,
                &ui::pad(&column.label, col_width),
                TextStyle::new().fg(ui::ACCENT).bold(),
            )?;
            x += col_width as u16 + 1;
        }
        let table_width = x as usize;

        painter.text(
            1,
            top + 1,
            &"─".repeat(table_width.saturating_sub(1)),
            TextStyle::new().fg(ui::MUTED).dim(),
        )?;

        let mut y = top + 2;
        for (index, row) in render_rows(slice, columns).iter().enumerate() {
            match row {
                RenderedRow::Data { id, cells } => {
                    let focused = index == self.cursor;
                    let row_style = if focused {
                        TextStyle::new().reverse()
                    } else {
                        TextStyle::new()
                    };

                    let mark = if store.is_selected(*id) { "[x]" } else { "[ ]" };
                    let mark_style = if focused {
                        row_style
                    } else {
                        TextStyle::new().fg(ui::ACCENT)
                    };
                    painter.text(1, y, mark, mark_style)?;

                    let mut cell_x = 1 + SELECT_COL_WIDTH;
                    for (cell, column) in cells.iter().zip(columns) {
                        let col_width = column.width.unwrap_or(14) as usize;
                        painter.text(cell_x, y, &ui::pad(cell, col_width), row_style)?;
                        cell_x += col_width as u16 + 1;
                    }
                }
                RenderedRow::Placeholder { span: _ } => {
                    painter.text(
                        1,
                        y,
                        &ui::center(
                            text(store.locale(), Msg::NoData),
                            table_width.saturating_sub(1),
                        ),
                        TextStyle::new().fg(ui::MUTED),
                    )?;
                }
            }
            y += 1;
        }

        Ok(y)
    }

    fn draw_cards(
        &self,
        painter: &mut Painter,
        slice: &[Employee],
        columns: &[Column<Employee>],
        locale: Locale,
        top: u16,
    ) -> io::Result<u16> {
        let width = painter.width() as usize;
        let per_row = if width >= 96 { 2 } else { 1 };
        let card_width = (width.saturating_sub(per_row + 1)) / per_row;

        let rendered = render_rows(slice, columns);
        let mut y = top;

        if let [RenderedRow::Placeholder { .. }] = rendered.as_slice() {
            painter.text(1, y, text(locale, Msg::NoData), TextStyle::new().fg(ui::MUTED))?;
            return Ok(y + 1);
        }

        for pair in rendered.chunks(per_row) {
            let mut card_height = 0u16;
            for (slot, row) in pair.iter().enumerate() {
                let RenderedRow::Data { cells, .. } = row else {
                    continue;
                };
                let x = (1 + slot * (card_width + 1)) as u16;

                painter.text(
                    x,
                    y,
                    &"─".repeat(card_width),
                    TextStyle::new().fg(ui::MUTED).dim(),
                )?;

                let mut line = y + 1;
                for (cell, column) in cells.iter().zip(columns) {
                    if !column.hide_label {
                        painter.text(
                            x,
                            line,
                            &ui::pad(&column.label, card_width.min(22)),
                            TextStyle::new().fg(ui::MUTED),
                        )?;
                        painter.text(
                            x + 23,
                            line,
                            &ui::clip(cell, card_width.saturating_sub(24)),
                            TextStyle::new(),
                        )?;
                    } else {
                        painter.text(x, line, &ui::clip(cell, card_width), TextStyle::new().dim())?;
                    }
                    line += 1;
                }
                card_height = card_height.max(line - y);
            }
            y += card_height + 1;
        }

        Ok(y)
    }

    fn draw_pagination(
        &self,
        painter: &mut Painter,
        item_count: usize,
        y: u16,
    ) -> io::Result<()> {
        let current = self.controller.current_page();
        let total = self.controller.total_pages(item_count);

        let mut x = 1u16;
        let prev_style = if current <= 1 {
            TextStyle::new().fg(ui::MUTED).dim()
        } else {
            TextStyle::new().fg(ui::ACCENT)
        };
        painter.text(x, y, "‹", prev_style)?;
        x += 2;

        for item in self.controller.visible_pages(item_count) {
            match item {
                PageItem::Page(page) => {
                    let label = format!(" {page} ");
                    let style = if page == current {
                        TextStyle::new().fg(ui::ACCENT).reverse()
                    } else {
                        TextStyle::new()
                    };
                    painter.text(x, y, &label, style)?;
                    x += label.len() as u16 + 1;
                }
                PageItem::Ellipsis => {
                    painter.text(x, y, "…", TextStyle::new().fg(ui::MUTED))?;
                    x += 2;
                }
            }
        }

        let next_style = if current >= total {
            TextStyle::new().fg(ui::MUTED).dim()
        } else {
            TextStyle::new().fg(ui::ACCENT)
        };
        painter.text(x, y, "›", next_style)?;
        Ok(())
    }

    fn draw_confirm(
        &self,
        painter: &mut Painter,
        store: &EmployeeStore,
        id: EmployeeId,
    ) -> io::Result<()> {
        let locale = store.locale();
        let question = text(locale, Msg::ConfirmDeleteQuestion);
        let warning = text(locale, Msg::CannotBeUndone);
        let name = store
            .find_by_id(id)
            .map(|employee| employee.full_name())
            .unwrap_or_default();
        let buttons = format!(
            "[Enter] {}    [Esc] {}",
            text(locale, Msg::Delete),
            text(locale, Msg::Cancel)
        );

        let inner = [question, name.as_str(), warning, buttons.as_str()]
            .iter()
            .map(|s| ui::width_of(s))
            .max()
            .unwrap_or(0)
            + 4;
        let left = (painter.width() as usize).saturating_sub(inner + 2) as u16 / 2;
        let top = painter.height().saturating_sub(8) / 2;

        let border = TextStyle::new().fg(ui::ACCENT);
        painter.text(left, top, &format!("┌{}┐", "─".repeat(inner)), border)?;
        let body: [(&str, TextStyle); 5] = [
            (question, TextStyle::new().bold()),
            (name.as_str(), TextStyle::new().fg(ui::ACCENT)),
            ("", TextStyle::new()),
            (warning, TextStyle::new()),
            (buttons.as_str(), TextStyle::new().fg(ui::MUTED)),
        ];
        for (offset, (line, style)) in body.iter().enumerate() {
            let y = top + 1 + offset as u16;
            painter.text(left, y, &format!("│{}│", " ".repeat(inner)), border)?;
            painter.text(left + 2, y, line, *style)?;
        }
        painter.text(
            left,
            top + 6,
            &format!("└{}┘", "─".repeat(inner)),
            border,
        )?;
        Ok(())
    }
}

/// Column descriptors for the list views, rebuilt per render pass so labels
/// follow the active locale.
fn columns(locale: Locale) -> Vec<Column<Employee>> {
    vec![
        Column::field(text(locale, Msg::FirstName), "first_name").width(12),
        Column::field(text(locale, Msg::LastName), "last_name").width(12),
        Column::custom(text(locale, Msg::DateOfEmployment), |employee: &Employee| {
            employee.employment_date.format("%m/%d/%Y").to_string()
        })
        .width(12),
        Column::custom(text(locale, Msg::DateOfBirth), |employee: &Employee| {
            employee.birth_date.format("%m/%d/%Y").to_string()
        })
        .width(12),
        Column::field(text(locale, Msg::Phone), "phone").width(18),
        Column::field(text(locale, Msg::Email), "email").width(24),
        Column::field(text(locale, Msg::Department), "department").width(11),
        Column::field(text(locale, Msg::Position), "position").width(9),
        Column::custom(text(locale, Msg::Actions), move |_: &Employee| {
            format!("[e] {}  [d] {}", text(locale, Msg::Edit), text(locale, Msg::Delete))
        })
        .width(22)
        .hide_label(),
    ]
}
