//! Table/card projection.
//!
//! Maps rows and column descriptors to plain display cells. The projection
//! is shared by the table view and the card view; only the terminal drawing
//! differs. Nothing here can fail: a column without a custom renderer falls
//! back to raw field lookup, and a missing field becomes an empty cell.

use std::fmt;
use std::sync::Arc;

use crate::model::EmployeeId;

/// A row that can be projected through [`render_rows`].
pub trait GridRow {
    /// Stable identifier, used for the selection column.
    fn id(&self) -> EmployeeId;

    /// Raw text of a named field, or `None` when the row has no such field.
    fn field_text(&self, field: &str) -> Option<String>;
}

/// Where a column's cell content comes from.
pub enum CellSource<R> {
    /// Look up a named field on the row.
    Field(&'static str),
    /// Invoke a renderer with the row and use its output verbatim.
    Custom(Arc<dyn Fn(&R) -> String + Send + Sync>),
}

impl<R> Clone for CellSource<R> {
    fn clone(&self) -> Self {
        match self {
            CellSource::Field(name) => CellSource::Field(name),
            CellSource::Custom(f) => CellSource::Custom(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for CellSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSource::Field(name) => f.debug_tuple("Field").field(name).finish(),
            CellSource::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Column descriptor: label, cell source, and display hints.
///
/// Constructed once per render pass and treated as immutable.
#[derive(Debug, Clone)]
pub struct Column<R> {
    pub label: String,
    pub source: CellSource<R>,
    /// Preferred width in terminal columns; the view picks one otherwise.
    pub width: Option<u16>,
    /// Suppress the label in views that print per-cell labels.
    pub hide_label: bool,
}

impl<R> Column<R> {
    /// Column backed by raw field lookup.
    pub fn field(label: impl Into<String>, field: &'static str) -> Self {
        Self {
            label: label.into(),
            source: CellSource::Field(field),
            width: None,
            hide_label: false,
        }
    }

    /// Column backed by a custom renderer.
    pub fn custom(
        label: impl Into<String>,
        render: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            source: CellSource::Custom(Arc::new(render)),
            width: None,
            hide_label: false,
        }
    }

    /// Set the preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Suppress the label.
    pub fn hide_label(mut self) -> Self {
        self.hide_label = true;
        self
    }

    /// Cell content for one row.
    pub fn cell(&self, row: &R) -> String
    where
        R: GridRow,
    {
        match &self.source {
            CellSource::Field(name) => row.field_text(name).unwrap_or_default(),
            CellSource::Custom(render) => render(row),
        }
    }
}

/// One projected row of the table/card body.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedRow {
    /// A data row: one cell per column, in column order.
    Data {
        id: EmployeeId,
        cells: Vec<String>,
    },
    /// The "no data" row emitted when there are no rows at all. Spans every
    /// data column plus the reserved selection column.
    Placeholder { span: usize },
}

/// Project rows through the column descriptors.
///
/// Zero rows yield exactly one [`RenderedRow::Placeholder`] so the table
/// keeps its shape; its span is `columns.len() + 1` (the selection column
/// is reserved even when there are no data columns).
pub fn render_rows<R: GridRow>(rows: &[R], columns: &[Column<R>]) -> Vec<RenderedRow> {
    if rows.is_empty() {
        return vec![RenderedRow::Placeholder {
            span: columns.len() + 1,
        }];
    }

    rows.iter()
        .map(|row| RenderedRow::Data {
            id: row.id(),
            cells: columns.iter().map(|column| column.cell(row)).collect(),
        })
        .collect()
}
