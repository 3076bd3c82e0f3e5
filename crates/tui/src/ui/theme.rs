//! Colors and style builders.
//!
//! Keeps every color in one place so widgets style themselves consistently.

use ratatui::style::{Color, Modifier, Style};

/// Runtime color theme.
///
/// Colors are semantically named (error/warning/success/info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(24, 26, 32),
            surface: Color::Rgb(35, 36, 42),
            text: Color::Rgb(224, 224, 224),
            text_dim: Color::Rgb(140, 140, 150),
            accent: Color::Cyan,
            border: Color::Rgb(90, 92, 104),
            highlight_bg: Color::Rgb(55, 58, 70),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Accent + bold.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Selected row.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// A triggered-action box.
    pub fn triggered(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Bound key label.
    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Dimmed backdrop behind modal popups.
    pub fn overlay(&self) -> Style {
        Style::default().bg(self.background)
    }
}
