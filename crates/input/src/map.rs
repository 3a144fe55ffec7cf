//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Edits to the name field of the win prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Insert(char),
    Backspace,
    /// Save the score under the typed name.
    Submit,
    /// Leave the prompt and deal a new board.
    Reset,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveDown)
        }

        // Tap
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Flip),

        // Reset
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Map keyboard input while the name prompt has focus.
///
/// Letters are text here, so only control keys leave the prompt.
pub fn handle_prompt_key(key: KeyEvent) -> Option<PromptKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(PromptKey::Reset),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(PromptKey::Submit),
        KeyCode::Backspace => Some(PromptKey::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(PromptKey::Insert(c)),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` only quits during play; the prompt treats it as text.
pub fn should_quit(key: KeyEvent, prompt_active: bool) -> bool {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }
    !prompt_active && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::MoveUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameAction::MoveUp)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Reset)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_prompt_keys() {
        assert_eq!(
            handle_prompt_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(PromptKey::Insert('q'))
        );
        assert_eq!(
            handle_prompt_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(PromptKey::Insert(' '))
        );
        assert_eq!(
            handle_prompt_key(KeyEvent::from(KeyCode::Backspace)),
            Some(PromptKey::Backspace)
        );
        assert_eq!(
            handle_prompt_key(KeyEvent::from(KeyCode::Enter)),
            Some(PromptKey::Submit)
        );
        assert_eq!(
            handle_prompt_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(PromptKey::Reset)
        );
        assert_eq!(handle_prompt_key(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), false));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), true));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), true));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), false));
    }
}
