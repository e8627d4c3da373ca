use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameCommand(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Self::turn(Direction::Up),
            KeyCode::Down => Self::turn(Direction::Down),
            KeyCode::Left => Self::turn(Direction::Left),
            KeyCode::Right => Self::turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Self::turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Self::turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Self::turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Self::turn(Direction::Right),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                KeyAction::GameCommand(Command::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::GameCommand(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    fn turn(direction: Direction) -> KeyAction {
        KeyAction::GameCommand(Command::Turn(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::GameCommand(Command::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::GameCommand(Command::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::GameCommand(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::GameCommand(Command::Turn(Direction::Left))
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::GameCommand(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_pause_keys() {
        let handler = InputHandler::new();

        for code in [KeyCode::Char('p'), KeyCode::Char('P'), KeyCode::Char(' ')] {
            assert_eq!(
                handler.handle_key_event(press(code)),
                KeyAction::GameCommand(Command::TogglePause)
            );
        }
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::GameCommand(Command::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }
}
