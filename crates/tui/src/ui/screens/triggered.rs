//! Triggered-actions panel.
//!
//! One row per action whose bound key is currently held, in binding order.

use hotkey_config::{Binding, display_key};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// Formats a triggered row as `'KEY' → action`.
pub fn row_text(binding: &Binding) -> String {
    format!("{} → {}", display_key(&binding.key), binding.action)
}

/// Render the triggered-actions panel.
pub fn render(f: &mut Frame, area: Rect, triggered: &[Binding], theme: &Theme) {
    let lines: Vec<Line> = if triggered.is_empty() {
        vec![Line::from(Span::styled(
            "Hold a bound key to trigger its action",
            theme.text_dim(),
        ))]
    } else {
        triggered
            .iter()
            .map(|binding| Line::from(Span::styled(row_text(binding), theme.triggered())))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Triggered ", theme.title()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_text() {
        assert_eq!(row_text(&Binding::new("jump", "space")), "'SPACE' → jump");
    }
}
