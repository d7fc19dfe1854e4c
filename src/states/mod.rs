//! State Management Layer
//!
//! Headless widget state plus the application-wide store. Widget state types
//! are plain Rust and carry no gpui handles; views own one instance each and
//! translate user interaction into calls on it:
//!
//! ```text
//! UI Action → View Handler → State Method → Callback / Notice → notify → UI Refresh
//! ```

mod app;
mod field;
mod notice;
mod selection;
mod users;

pub use app::*;
pub use field::*;
pub use notice::*;
pub use selection::*;
pub use users::*;
