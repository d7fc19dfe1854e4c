//! Colors - Roster Palette

use gpui::{rgb, rgba, Rgba};

/// Roster color palette - All colors are accessed via associated functions
pub struct RosterColors;

impl RosterColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0x2e1065) }
    /// Card surface
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x000000bf) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Page heading
    pub fn heading() -> Rgba { rgb(0xe8491d) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0xa855f7) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x9333ea) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xec4899) }
    /// Danger button hover
    pub fn button_danger_hover() -> Rgba { rgb(0xdb2777) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x4b5563) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xeff6ff) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }
    /// Selected table row
    pub fn table_row_selected() -> Rgba { rgb(0xdbeafe) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xfdf2f8) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd8b4fe) }
}
