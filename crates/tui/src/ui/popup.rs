//! Modal popups.
//!
//! Two popups exist: the rebind prompt shown while a key is being recorded,
//! and the confirmation before resetting every binding.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

/// Prompt text for the rebind popup.
pub fn rebind_prompt(action: &str) -> String {
    format!("Press a key to rebind \"{action}\"")
}

/// Render the rebind prompt for `action`.
pub fn render_rebind_prompt(f: &mut Frame, action: &str, theme: &Theme) {
    render_popup(
        f,
        " Rebind ",
        vec![
            Line::from(Span::styled(rebind_prompt(action), theme.text())),
            Line::from(""),
            Line::from(Span::styled("^C quits", theme.text_dim())),
        ],
        theme,
    );
}

/// Render the reset-to-defaults confirmation.
pub fn render_reset_confirm(f: &mut Frame, theme: &Theme) {
    render_popup(
        f,
        " Reset ",
        vec![
            Line::from(Span::styled(
                "Reset every binding to its default?",
                theme.text(),
            )),
            Line::from(""),
            Line::from(Span::styled("y/Enter: Reset   n/Esc: Cancel", theme.text_dim())),
        ],
        theme,
    );
}

fn render_popup(f: &mut Frame, title: &str, lines: Vec<Line>, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.overlay())
        .title(Span::styled(title.to_string(), theme.title()));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
