//! Toast notification widgets for transient feedback messages.
//!
//! Toasts display in the bottom-right corner of the screen. Each toast has a
//! unique UUID, a severity level, and an automatic expiration time (TTL).
//! Startup warnings (defaults not loadable, stored settings reset) use them too.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::FOOTER_HEIGHT;
use crate::ui::theme::Theme;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(4),
            Self::Warning => Duration::from_secs(8),
            Self::Error => Duration::from_secs(12),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 4;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

/// Renders the most recent non-expired toasts stacked in the bottom-right corner.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let area = f.area();
    let width = TOAST_WIDTH.min(area.width);
    let visible: Vec<&Toast> = toasts
        .iter()
        .filter(|t| !t.is_expired())
        .rev()
        .take(MAX_TOASTS)
        .collect();

    // Stack above the footer block.
    let mut bottom = area.bottom().saturating_sub(FOOTER_HEIGHT);
    for toast in visible {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width),
            y: bottom - TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        bottom -= TOAST_HEIGHT;

        let style = match toast.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Warning => theme.warning(),
            ToastLevel::Error => theme.error(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(format!(" {} ", toast.level.label()), style));

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(&toast.message, theme.text())))
                .block(block)
                .wrap(Wrap { trim: true }),
            rect,
        );
    }
}
