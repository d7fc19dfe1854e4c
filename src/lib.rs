//! Roster GUI Library
//!
//! A small native widget kit (button, card, error modal, input field, data
//! table) and a user roster page built from it.

pub mod app;
pub mod assets;
pub mod components;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
