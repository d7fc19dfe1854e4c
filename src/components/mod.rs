//! Components - Reusable UI Components
//!
//! Widgets never touch the filesystem. Notices go through the shared host.

pub mod composite;
pub mod primitives;
