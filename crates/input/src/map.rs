//! Key mapping from terminal events to game actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// Anything the front end has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// The terminal window lost focus; the game should pause.
    FocusLost,
    FocusGained,
    Quit,
    /// Terminal resized; redraw.
    Resize,
}

/// Map keyboard input to game actions.
///
/// Right and down are separate actions; no key triggers both.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::MoveDown),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::Drop),
        KeyCode::Char('p' | 'P') | KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a raw terminal event.
///
/// Key releases are ignored so terminals that report them do not move the
/// piece twice.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) if should_quit(*key) => Some(InputEvent::Quit),
        Event::Key(key) => handle_key_event(*key).map(InputEvent::Action),
        Event::FocusLost => Some(InputEvent::FocusLost),
        Event::FocusGained => Some(InputEvent::FocusGained),
        Event::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}
