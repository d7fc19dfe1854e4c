//! Theme - Fixed Color Palette

pub mod colors;
