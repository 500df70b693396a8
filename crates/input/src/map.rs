//! Key and mouse mapping from terminal events to simulation actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        // Advance one generation (the original UI's "Tick" button).
        KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Enter => {
            Some(SimAction::Step)
        }

        // Classic/plain visualization toggle.
        KeyCode::Char('g') | KeyCode::Char('G') => Some(SimAction::ToggleDrawMode),

        // Field editing helpers.
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SimAction::Clear),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Randomize),

        _ => None,
    }
}

/// Check if key should quit the simulator.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal position of a left-click, if this mouse event is one.
///
/// Only the press is mapped; drags and releases are ignored so one click
/// toggles exactly one cell.
pub fn mouse_toggle_at(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

    #[test]
    fn test_step_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(SimAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(SimAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(SimAction::Step)
        );
    }

    #[test]
    fn test_mode_and_edit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(SimAction::ToggleDrawMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('C'))),
            Some(SimAction::Clear)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(SimAction::Randomize)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('s'))));
    }

    #[test]
    fn test_mouse_left_press_maps_to_position() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_toggle_at(&press), Some((12, 7)));

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(mouse_toggle_at(&release), None);

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..press
        };
        assert_eq!(mouse_toggle_at(&right), None);
    }
}
