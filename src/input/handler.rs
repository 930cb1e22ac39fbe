use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Level, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Turn one snake
    Steer(Player, Direction),
    /// Start a round at the given level
    StartLevel(Level),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Keys while a round is live: WASD steers player one, the arrow keys
    /// steer player two. Anything unmapped is a no-op.
    pub fn game_key(&self, key: KeyEvent) -> KeyAction {
        if is_quit(key) {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Steer(Player::One, Direction::Up)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Steer(Player::One, Direction::Down)
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Steer(Player::One, Direction::Left)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Steer(Player::One, Direction::Right)
            }

            KeyCode::Up => KeyAction::Steer(Player::Two, Direction::Up),
            KeyCode::Down => KeyAction::Steer(Player::Two, Direction::Down),
            KeyCode::Left => KeyAction::Steer(Player::Two, Direction::Left),
            KeyCode::Right => KeyAction::Steer(Player::Two, Direction::Right),

            _ => KeyAction::None,
        }
    }

    /// Keys on the level-select screen; the level digits are only honored
    /// here, never during a round
    pub fn menu_key(&self, key: KeyEvent) -> KeyAction {
        if is_quit(key) {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('1') => KeyAction::StartLevel(Level::Easy),
            KeyCode::Char('2') => KeyAction::StartLevel(Level::Medium),
            KeyCode::Char('3') => KeyAction::StartLevel(Level::Hard),
            _ => KeyAction::None,
        }
    }

    /// Keys during the game-over dwell: only quitting is honored
    pub fn game_over_key(&self, key: KeyEvent) -> KeyAction {
        if is_quit(key) {
            KeyAction::Quit
        } else {
            KeyAction::None
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_quit(key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_steers_player_one() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.game_key(press(KeyCode::Char('w'))),
            KeyAction::Steer(Player::One, Direction::Up)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Char('a'))),
            KeyAction::Steer(Player::One, Direction::Left)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Char('s'))),
            KeyAction::Steer(Player::One, Direction::Down)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Char('d'))),
            KeyAction::Steer(Player::One, Direction::Right)
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.game_key(w_upper),
            KeyAction::Steer(Player::One, Direction::Up)
        );
    }

    #[test]
    fn test_arrows_steer_player_two() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.game_key(press(KeyCode::Up)),
            KeyAction::Steer(Player::Two, Direction::Up)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Down)),
            KeyAction::Steer(Player::Two, Direction::Down)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Left)),
            KeyAction::Steer(Player::Two, Direction::Left)
        );
        assert_eq!(
            handler.game_key(press(KeyCode::Right)),
            KeyAction::Steer(Player::Two, Direction::Right)
        );
    }

    #[test]
    fn test_menu_digits_select_level() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.menu_key(press(KeyCode::Char('1'))),
            KeyAction::StartLevel(Level::Easy)
        );
        assert_eq!(
            handler.menu_key(press(KeyCode::Char('2'))),
            KeyAction::StartLevel(Level::Medium)
        );
        assert_eq!(
            handler.menu_key(press(KeyCode::Char('3'))),
            KeyAction::StartLevel(Level::Hard)
        );
    }

    #[test]
    fn test_digits_are_ignored_during_a_round() {
        let handler = InputHandler::new();

        assert_eq!(handler.game_key(press(KeyCode::Char('1'))), KeyAction::None);
        assert_eq!(handler.game_key(press(KeyCode::Char('3'))), KeyAction::None);
    }

    #[test]
    fn test_steering_is_ignored_at_the_menu() {
        let handler = InputHandler::new();

        assert_eq!(handler.menu_key(press(KeyCode::Char('w'))), KeyAction::None);
        assert_eq!(handler.menu_key(press(KeyCode::Up)), KeyAction::None);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.game_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.menu_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.game_over_key(press(KeyCode::Char('Q'))), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.game_key(ctrl_c), KeyAction::Quit);
        assert_eq!(handler.menu_key(ctrl_c), KeyAction::Quit);
        assert_eq!(handler.game_over_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_everything_else_is_ignored_during_dwell() {
        let handler = InputHandler::new();

        assert_eq!(handler.game_over_key(press(KeyCode::Char('1'))), KeyAction::None);
        assert_eq!(handler.game_over_key(press(KeyCode::Char('w'))), KeyAction::None);
        assert_eq!(handler.game_over_key(press(KeyCode::Up)), KeyAction::None);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(handler.game_key(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.menu_key(press(KeyCode::Char('x'))), KeyAction::None);
    }
}
