//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::QuestError;
use crate::tui::app::{App, Tab};

/// Key hints shown in the status bar.
pub const HELP: &str = "space:start/pause | r:reset | tab:switch | j/k:nav | l:reload | q:quit";

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Waits at most 100ms so the timer keeps advancing between key presses.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, QuestError> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| QuestError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| QuestError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_timer(),
        KeyCode::Char('r') => app.request_reset(),

        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
        KeyCode::Char('1') => app.show_tab(Tab::Focus),
        KeyCode::Char('2') => app.show_tab(Tab::Stats),

        KeyCode::Char('j') | KeyCode::Down => {
            app.cancel_pending();
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cancel_pending();
            app.select_previous();
        }
        KeyCode::Char('l') => {
            app.cancel_pending();
            app.reload_stats();
        }

        KeyCode::Char('?') => {
            app.cancel_pending();
            app.status = Some(HELP.to_string());
        }

        _ => app.cancel_pending(),
    }

    Ok(None)
}
