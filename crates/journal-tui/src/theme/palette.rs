//! Color palette for the Cyber-Glass theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Foreground drawn on top of ACCENT backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Product rows ---
pub const PRODUCT_TYPE: Color = Color::Magenta;
pub const PRICE: Color = Color::LightGreen;
pub const STAR_INGREDIENT: Color = Color::LightYellow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_background_is_rgb() {
        assert!(matches!(POPUP_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
