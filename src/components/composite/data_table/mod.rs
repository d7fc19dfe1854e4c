//! DataTable Component
//!
//! Column-driven table with click-to-select rows and loading/empty states.

pub mod column;
pub mod data_table;
pub mod model;

pub use column::{Column, ColumnWidth, TableRow};
pub use data_table::DataTable;
pub use model::{TableBody, TableModel};
