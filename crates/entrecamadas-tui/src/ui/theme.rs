// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use entrecamadas_core::cosmos::Rgb;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE - Night-sky colors matching the cosmos background
// =============================================================================

/// App background - the darkest edge of the cosmos gradient
pub const BG_APP: Color = Color::Rgb(5, 7, 12);

/// Sidebar background - slight lift so the panel reads over the sky
pub const BG_SIDEBAR: Color = Color::Rgb(12, 14, 22);

/// Card background for the visible message and help panel
pub const BG_CARD: Color = Color::Rgb(16, 19, 30);

/// Selected list item background
pub const BG_SELECTED: Color = Color::Rgb(30, 36, 56);

/// Modal background
pub const BG_MODAL: Color = Color::Rgb(20, 22, 34);

/// Overlay tint behind modals
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(3, 4, 8);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 224, 235);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 134, 150);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(86, 92, 110);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Primary accent - ring blue (focus, interactive elements)
pub const ACCENT_PRIMARY: Color = Color::Rgb(122, 167, 255);

/// Success/positive - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning / carpe - glow amber
pub const ACCENT_WARNING: Color = Color::Rgb(247, 166, 60);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple (tone labels)
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

pub const BORDER_INACTIVE: Color = Color::Rgb(50, 56, 72);

/// Convert a cosmos color to a terminal color
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Color for a tone label
pub fn tone_color(tone: &str) -> Color {
    match tone {
        "mystical" => ACCENT_SPECIAL,
        "scientific" => ACCENT_PRIMARY,
        "contemplative" => ACCENT_SUCCESS,
        "purpose" => ACCENT_WARNING,
        _ => TEXT_MUTED,
    }
}

// =============================================================================
// STYLE FUNCTIONS - Semantic styles for common UI patterns
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}
