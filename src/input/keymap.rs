//! Key bindings: key events to session commands.
//!
//! Unmodified movement keys drive both panes. Holding Alt moves the
//! bottom pane only (the top stays frozen); holding Control moves the
//! top pane only. Keys with no binding return `None` and are ignored.

use super::event::{Key, KeyCode};
use crate::session::{Command, Direction, Panes, StepSize};

/// Translate one key press into a session command.
pub fn command_for(key: Key) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        KeyCode::Char('c' | 'C') if key.ctrl => Some(Command::Quit),
        KeyCode::Enter => Some(Command::NextDiff),

        KeyCode::Right => movement(StepSize::Byte, Direction::Forward, key),
        KeyCode::Left => movement(StepSize::Byte, Direction::Backward, key),
        KeyCode::Down => movement(StepSize::Line, Direction::Forward, key),
        KeyCode::Up => movement(StepSize::Line, Direction::Backward, key),
        KeyCode::PageDown => movement(StepSize::Page, Direction::Forward, key),
        KeyCode::PageUp => movement(StepSize::Page, Direction::Backward, key),

        KeyCode::Char(_) => None,
    }
}

/// Build a movement command, picking the pane set from the modifiers.
fn movement(step: StepSize, direction: Direction, key: Key) -> Option<Command> {
    let panes = if key.alt {
        Panes::BOTTOM
    } else if key.ctrl {
        Panes::TOP
    } else {
        Panes::BOTH
    };
    Some(Command::movement(step, direction, panes))
}
