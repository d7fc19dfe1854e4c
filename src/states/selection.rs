//! Table Selection State
//!
//! Multi-select with toggle semantics. Rows are matched by equality and kept
//! in click order.

/// Selected rows of a table, in the order they were clicked
#[derive(Debug, Clone)]
pub struct TableSelection<R> {
    selectable: bool,
    rows: Vec<R>,
}

impl<R: Clone + PartialEq> TableSelection<R> {
    pub fn new(selectable: bool) -> Self {
        Self {
            selectable,
            rows: Vec::new(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Enable or disable selection. Rows already selected stay selected.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, row: &R) -> bool {
        self.rows.contains(row)
    }

    /// Remove `row` if selected, append it otherwise.
    ///
    /// Returns the full updated selection to report, or `None` when selection
    /// is disabled and nothing changed.
    pub fn toggle(&mut self, row: &R) -> Option<Vec<R>> {
        if !self.selectable {
            return None;
        }

        if let Some(pos) = self.rows.iter().position(|r| r == row) {
            self.rows.remove(pos);
        } else {
            self.rows.push(row.clone());
        }

        Some(self.rows.clone())
    }

    /// Drop every selected row. Always reports an empty selection.
    pub fn clear(&mut self) -> Vec<R> {
        self.rows.clear();
        Vec::new()
    }
}

impl<R: Clone + PartialEq> Default for TableSelection<R> {
    fn default() -> Self {
        Self::new(false)
    }
}
