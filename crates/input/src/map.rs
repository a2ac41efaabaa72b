//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Turn(Direction::North))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Turn(Direction::South))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Turn(Direction::West))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Turn(Direction::East))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(d: Direction) -> Option<GameAction> {
        Some(GameAction::Turn(d))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), turn(Direction::North));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), turn(Direction::South));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), turn(Direction::West));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), turn(Direction::East));
    }

    #[test]
    fn test_wasd_and_vim_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), turn(Direction::North));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('A'))), turn(Direction::West));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('s'))), turn(Direction::South));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), turn(Direction::East));

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), turn(Direction::North));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('H'))), turn(Direction::West));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), turn(Direction::South));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), turn(Direction::East));
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
