use ratatui::style::Color;

/// Fixed color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Non-archived idea titles
    pub text_bright: Color,
    /// Archived titles, separators, hints
    pub dim: Color,
    pub date: Color,
    /// Archived marker and notices
    pub warn: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Black,
            text: Color::Gray,
            text_bright: Color::White,
            dim: Color::DarkGray,
            date: Color::Cyan,
            warn: Color::Red,
        }
    }
}
