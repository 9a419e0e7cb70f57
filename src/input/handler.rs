use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};

use crate::app::{Input, Mode};
use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(Input),
    Quit,
    None,
}

/// Translates terminal events into state machine inputs for the current mode
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, mode: Mode, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let input = match mode {
            Mode::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
                code => Self::cursor_input(code),
            },
            Mode::Options => match key.code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    Some(Input::AdjustSpeed(-1))
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    Some(Input::AdjustSpeed(1))
                }
                code => Self::cursor_input(code),
            },
            Mode::HighScoreView => match key.code {
                KeyCode::Esc => Some(Input::Cancel),
                _ => None,
            },
            Mode::Playing | Mode::Paused => match key.code {
                KeyCode::Char('p') | KeyCode::Char('P') => Some(Input::TogglePause),
                KeyCode::Esc => Some(Input::Cancel),
                code => Self::direction_for(code).map(Input::SetHeading),
            },
            Mode::GameOver => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Restart),
                KeyCode::Esc => Some(Input::Cancel),
                _ => None,
            },
        };

        input.map_or(KeyAction::None, KeyAction::Input)
    }

    /// Map a left click to the menu entry under the pointer
    ///
    /// `targets` are the screen areas of the selectable entries, in order.
    pub fn handle_mouse_event(&self, mouse: MouseEvent, targets: &[Rect]) -> KeyAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }

        let point = ScreenPosition::new(mouse.column, mouse.row);
        targets
            .iter()
            .position(|area| area.contains(point))
            .map_or(KeyAction::None, |index| {
                KeyAction::Input(Input::PointerSelect(index))
            })
    }

    fn cursor_input(code: KeyCode) -> Option<Input> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Input::MoveCursor(-1)),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Input::MoveCursor(1)),
            KeyCode::Enter => Some(Input::Confirm),
            KeyCode::Esc => Some(Input::Cancel),
            _ => None,
        }
    }

    fn direction_for(code: KeyCode) -> Option<Direction> {
        match code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
