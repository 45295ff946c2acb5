use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for Stockroom CLI UI.
///
/// Only these semantic colors are used for messages.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
}

/// Prompt theme for the terminal menu; `SimpleTheme` when color is off.
pub fn prompt_theme(color: bool) -> Box<dyn Theme> {
    if color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}
