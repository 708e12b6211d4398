//! Terminal user interface for the focus timer.
//!
//! Built with ratatui and crossterm. The event loop polls for keys with a
//! short timeout and pumps the timer on every pass.

mod app;
mod event;
mod ui;

pub use app::{App, Tab};

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::QuestError;

/// Run the TUI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn run(app: &mut App) -> Result<(), QuestError> {
    enable_raw_mode()
        .map_err(|e| QuestError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| QuestError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| QuestError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: Backend + Write>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), QuestError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| QuestError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(event::Action::Quit) = event::handle_events(app)? {
            break;
        }

        if app.on_loop() {
            ring_bell(terminal.backend_mut())?;
        }
    }

    if app.engine.is_running() {
        log::info!(
            "quit with {}s left on the timer; the partial cycle is not recorded",
            app.engine.seconds_remaining()
        );
    }

    Ok(())
}

/// Write the terminal bell.
fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}
