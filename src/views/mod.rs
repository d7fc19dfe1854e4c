//! Views
//!
//! Window content: the root view and the page it hosts.

mod root;
mod users_page;

pub use root::RosterRoot;
pub use users_page::UsersPage;
