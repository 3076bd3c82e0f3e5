//! Settings panel rendering.
//!
//! Responsibilities:
//! - Render the filter field and the list of default actions with their
//!   current keys.
//! - Highlight the row under the cursor.
//!
//! Does NOT handle:
//! - Processing key input (handled in `app::input`).
//! - Rebinding or resetting (handled by `hotkeys`).
//!
//! Invariants:
//! - Rows arrive already filtered and in default declaration order.

use hotkey_config::{Binding, display_key};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::FilterInput;
use crate::ui::theme::Theme;

/// Render input for the settings panel.
pub struct SettingsView<'a> {
    /// Default actions matching the filter, with their current keys.
    pub rows: &'a [Binding],
    pub filter: &'a FilterInput,
    pub filter_focused: bool,
    /// False when no defaults could be loaded.
    pub has_defaults: bool,
}

/// Render the settings panel.
pub fn render(
    f: &mut Frame,
    area: Rect,
    view: SettingsView,
    state: &mut ListState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filter_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if view.filter_focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(Span::styled(" Filter (^F) ", theme.title()));
    f.render_widget(
        Paragraph::new(Span::styled(view.filter.value(), theme.text())).block(filter_block),
        chunks[0],
    );
    if view.filter_focused {
        let x = chunks[0]
            .x
            .saturating_add(1)
            .saturating_add(view.filter.cursor() as u16);
        f.set_cursor_position(Position::new(x, chunks[0].y + 1));
    }

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Key bindings ", theme.title()));

    if view.rows.is_empty() {
        let message = if view.has_defaults {
            "No actions match the filter"
        } else {
            "No default bindings loaded"
        };
        f.render_widget(
            Paragraph::new(Span::styled(message, theme.text_dim())).block(list_block),
            chunks[1],
        );
        return;
    }

    let action_width = view
        .rows
        .iter()
        .map(|b| b.action.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|binding| {
            let key = if binding.key.is_empty() {
                Span::styled("unbound", theme.text_dim())
            } else {
                Span::styled(display_key(&binding.key), theme.key())
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", binding.action, width = action_width),
                    theme.text(),
                ),
                key,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, chunks[1], state);
}
