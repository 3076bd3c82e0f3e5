//! Hotkey TUI - terminal hotkey manager.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Binding semantics (see `hotkey_config` and `hotkey_tui::hotkeys`).
//! - Key routing (see `hotkey_tui::app`).
//!
//! Invariants:
//! - `load_dotenv()` is called before CLI parsing so `.env` can supply `HOTKEY_*` variables.
//! - The TUI enters raw mode and alternate screen on startup.
//! - Key releases and bare modifier presses are requested from the terminal
//!   when it supports keyboard enhancement; otherwise releases are synthesized
//!   after the release timeout.
//! - All application state is mutated on the main loop only.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode, supports_keyboard_enhancement},
};
use futures_util::StreamExt;
use hotkey_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use hotkey_config::{FileDefaults, load_dotenv};
use hotkey_tui::action::Action;
use hotkey_tui::app::{App, ReleaseMode, ReleaseTimer};
use hotkey_tui::cli::Cli;
use hotkey_tui::runtime::startup::{build_dispatcher, open_storage};
use hotkey_tui::runtime::terminal::{TerminalGuard, keyboard_enhancement_flags};
use hotkey_tui::ui::Toast;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv()?;
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    // stdout belongs to the TUI, so logs go to a daily file.
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "hotkey-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let mut storage_warning = None;
    let storage = match open_storage(cli.ephemeral, cli.storage_dir.as_deref()) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to in-memory hotkey storage");
            storage_warning = Some(Toast::warning(format!(
                "{e:#}. Hotkeys will not be saved this session."
            )));
            open_storage(true, None)?
        }
    };

    let startup = build_dispatcher(&FileDefaults::new(&cli.defaults), storage);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(keyboard_enhancement_flags())
        )?;
    }

    // Restores the terminal even if the loop below panics.
    let _terminal_guard = TerminalGuard::new(keyboard_enhanced);

    let release_mode = if keyboard_enhanced {
        ReleaseMode::Native
    } else {
        ReleaseMode::Synthesized {
            timeout: Duration::from_millis(cli.release_timeout_ms),
        }
    };
    tracing::info!(?release_mode, "Key release detection");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(startup.dispatcher, ReleaseTimer::new(release_mode));
    app.toasts.extend(storage_warning);
    app.toasts.extend(startup.warnings);

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input task. Presses, repeats and releases all matter to the key-state
    // tracker, so no key event kind is filtered here.
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
            };
            if tx.send(action).await.is_err() {
                // Channel closed, exit task
                break;
            }
        }
    });

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    // TerminalGuard restores raw mode, the alternate screen and keyboard flags on drop.
    terminal.show_cursor()?;

    Ok(())
}
