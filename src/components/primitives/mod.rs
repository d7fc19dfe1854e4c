//! Primitive Components
//!
//! Basic building blocks like buttons and cards.

pub mod button;
pub mod card;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
