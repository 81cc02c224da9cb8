//! Keyboard Input Handler
//!
//! Maps key events to browser actions and applies them to the app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Logical actions a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Back,
    Exit,
}

/// Translate a key into an action; `None` for keys the browser ignores
pub fn action_for_key(key: &KeyEvent, vim_mode: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        // In raw mode Ctrl+C arrives as a key instead of SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Exit),
        KeyCode::Esc => Some(Action::Exit),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace | KeyCode::Left => Some(Action::Back),
        KeyCode::Char('k') if vim_mode => Some(Action::MoveUp),
        KeyCode::Char('j') if vim_mode => Some(Action::MoveDown),
        KeyCode::Char('l') if vim_mode => Some(Action::Confirm),
        KeyCode::Char('h') if vim_mode => Some(Action::Back),
        KeyCode::Char('q') if vim_mode => Some(Action::Exit),
        _ => None,
    }
}

/// Handle keyboard input
///
/// While a banner is showing, the next keypress only dismisses it (exit
/// keys still exit).
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let action = action_for_key(&key, app.model.ui.vim_mode);

    if action == Some(Action::Exit) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.dismiss_banner() {
        return;
    }

    match action {
        Some(Action::MoveUp) => app.move_up(),
        Some(Action::MoveDown) => app.move_down(),
        Some(Action::Confirm) => app.enter_selected(),
        Some(Action::Back) => app.go_parent(),
        Some(Action::Exit) | None => {}
    }
}
