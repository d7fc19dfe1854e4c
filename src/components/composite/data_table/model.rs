//! Table Model
//!
//! Window-free half of the DataTable: columns, rows, flags and selection.

use gpui::SharedString;

use super::column::{Column, TableRow};
use crate::states::TableSelection;

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    /// Loading placeholder; rows and selection are ignored
    Loading,
    /// No rows: placeholder plus the "Show Error" action
    Empty,
    /// One body row per data row
    Rows,
}

pub struct TableModel<R: TableRow> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    selection: TableSelection<R>,
}

impl<R: TableRow> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            loading: false,
            selection: TableSelection::new(false),
        }
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the data. The selection is left as it is.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selection.set_selectable(selectable);
    }

    pub fn body(&self) -> TableBody {
        if self.loading {
            TableBody::Loading
        } else if self.rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows
        }
    }

    pub fn header(&self) -> Vec<SharedString> {
        self.columns.iter().map(|col| col.title.clone()).collect()
    }

    pub fn cells(&self, row: &R) -> Vec<SharedString> {
        self.columns.iter().map(|col| col.cell_text(row)).collect()
    }

    pub fn is_selected(&self, row: &R) -> bool {
        self.selection.contains(row)
    }

    /// Toggle the row at `index`. Returns the selection to report, if any.
    pub fn toggle_row(&mut self, index: usize) -> Option<Vec<R>> {
        if self.body() != TableBody::Rows {
            return None;
        }
        let row = self.rows.get(index)?.clone();
        self.selection.toggle(&row)
    }

    pub fn clear_selection(&mut self) -> Vec<R> {
        self.selection.clear()
    }

    pub fn shows_clear_selection(&self) -> bool {
        self.selection.is_selectable() && !self.selection.is_empty()
    }

    pub fn clear_selection_label(&self) -> SharedString {
        format!("Clear Selection ({})", self.selection.len()).into()
    }
}
