//! Composite Components
//!
//! Widgets built from primitives. Stateful ones are gpui views backed by a
//! headless state type from `crate::states`.

pub mod data_table;
pub mod input_field;
pub mod modal;

pub use data_table::{Column, ColumnWidth, DataTable, TableRow};
pub use input_field::InputField;
pub use modal::ErrorModal;
