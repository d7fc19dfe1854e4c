//! Column Definition
//!
//! Defines table columns and how their cells turn into text.

use gpui::SharedString;
use std::fmt::Debug;
use std::hash::Hash;

/// A record the DataTable can display
///
/// `Field` names the record's displayable fields, so a column can only
/// point at a field the row type actually has. Rows are compared with
/// `PartialEq` to decide selection membership.
pub trait TableRow: Clone + PartialEq + 'static {
    type Field: Copy + Eq + Hash + Debug + 'static;

    /// Raw text of `field`
    fn field(&self, field: Self::Field) -> SharedString;
}

type CellRenderer<R> = Box<dyn Fn(&R) -> SharedString + 'static>;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share the remaining width with other flexible columns
    Flex,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex
    }
}

/// Column definition for the DataTable
pub struct Column<R: TableRow> {
    /// Field shown in this column
    pub key: R::Field,
    /// Column header label
    pub title: SharedString,
    /// Column width
    pub width: ColumnWidth,
    render: Option<CellRenderer<R>>,
}

impl<R: TableRow> Column<R> {
    /// Create a column showing the raw text of `key`
    pub fn new(key: R::Field, title: impl Into<SharedString>) -> Self {
        Self {
            key,
            title: title.into(),
            width: ColumnWidth::default(),
            render: None,
        }
    }

    /// Replace the raw field text with a custom renderer
    pub fn render(mut self, render: impl Fn(&R) -> SharedString + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Text of this column's cell for `row`
    pub fn cell_text(&self, row: &R) -> SharedString {
        match &self.render {
            Some(render) => render(row),
            None => row.field(self.key),
        }
    }
}
