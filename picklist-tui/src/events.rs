//! Event handling - convert crossterm events to select input.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;
use picklist::keys::{Key, KeyCombo, Modifiers};

/// Input the demo reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    KeyDown(KeyCombo),
    KeyUp(KeyCombo),
    Resize { width: u16, height: u16 },
    Quit,
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a KeyCombo.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    let key = convert_key(event.code)?;
    Some(KeyCombo::new(key, convert_modifiers(event.modifiers)))
}

/// Convert a crossterm Event to demo input.
pub fn convert_event(event: CrosstermEvent) -> Option<Input> {
    match event {
        CrosstermEvent::Key(key_event) => {
            trace!(
                "Key event: code={:?}, modifiers={:?}, kind={:?}",
                key_event.code, key_event.modifiers, key_event.kind
            );

            if key_event.modifiers.contains(KeyModifiers::CONTROL)
                && key_event.code == KeyCode::Char('c')
            {
                return Some(Input::Quit);
            }

            let combo = convert_key_event(key_event)?;
            match key_event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Some(Input::KeyDown(combo)),
                KeyEventKind::Release => Some(Input::KeyUp(combo)),
            }
        }
        CrosstermEvent::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}
