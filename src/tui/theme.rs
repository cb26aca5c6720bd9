//! Theme module for centralized color and style definitions
//!
//! The clock uses three color pairs: background on background for unlit
//! digit cells, black on green for lit cells and colons, and green on the
//! terminal background for the date line.

use ratatui::style::{Color, Style};

/// Clock color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Terminal background, used for unlit digit cells
    pub background: Color,
    /// Fill color of lit digit cells and colon blocks
    pub highlight: Color,
    /// Foreground over highlighted cells
    pub highlight_fg: Color,
    /// Date line text
    pub accent: Color,
    /// Frame border
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::green()
    }
}

impl Theme {
    /// Green on the terminal's own background (default)
    pub fn green() -> Self {
        Self {
            background: Color::Reset,
            highlight: Color::Green,
            highlight_fg: Color::Black,
            accent: Color::Green,
            border: Color::Reset,
        }
    }

    // === Style Builders ===

    /// Style for unlit digit cells
    pub fn unlit_style(&self) -> Style {
        Style::default().fg(self.background).bg(self.background)
    }

    /// Style for lit digit cells and colons
    pub fn lit_style(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight)
    }

    /// Style for the date line
    pub fn date_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    /// Style for the frame border
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
