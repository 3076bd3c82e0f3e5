//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Place the triggered-actions panel and, when open, the settings panel
//! - Overlay popups and toasts
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for ListState selection)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::input::footer_hints;
use crate::ui::popup::{render_rebind_prompt, render_reset_confirm};
use crate::ui::screens::{settings, triggered};
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let theme = self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Hotkey TUI", theme.title()),
            Span::styled(
                if self.settings_open {
                    " - Settings"
                } else {
                    " - Press ^S to open settings"
                },
                theme.text_dim(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, chunks[0]);

        let triggered_rows = self.dispatcher.triggered_actions();
        if self.settings_open {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[1]);

            triggered::render(f, body[0], &triggered_rows, &theme);

            let rows = self.settings_rows();
            settings::render(
                f,
                body[1],
                settings::SettingsView {
                    rows: &rows,
                    filter: &self.filter,
                    filter_focused: self.filter_focused,
                    has_defaults: !self.dispatcher.store().defaults().is_empty(),
                },
                &mut self.settings_state,
                &theme,
            );
        } else {
            triggered::render(f, chunks[1], &triggered_rows, &theme);
        }

        let footer = Paragraph::new(Span::styled(
            footer_hints(self.settings_open),
            theme.text_dim(),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(footer, chunks[2]);

        if let Some(action) = self.dispatcher.rebind().armed_for() {
            render_rebind_prompt(f, action, &theme);
        } else if self.confirm_reset {
            render_reset_confirm(f, &theme);
        }

        render_toasts(f, &self.toasts, &theme);
    }
}
