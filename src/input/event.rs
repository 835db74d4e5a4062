//! Event types for the input thread protocol.

/// Key codes the viewer reacts to.
///
/// A deliberately small subset of what the terminal can report; anything
/// else is dropped at the conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
}

/// One key press with the modifiers that select the target pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// The key code.
    pub code: KeyCode,
    /// Alt/Option held (moves the bottom pane only).
    pub alt: bool,
    /// Control held (moves the top pane only).
    pub ctrl: bool,
}

impl Key {
    /// A key press with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            alt: false,
            ctrl: false,
        }
    }

    /// A key press with Alt held.
    pub const fn with_alt(code: KeyCode) -> Self {
        Self {
            code,
            alt: true,
            ctrl: false,
        }
    }

    /// A key press with Control held.
    pub const fn with_ctrl(code: KeyCode) -> Self {
        Self {
            code,
            alt: false,
            ctrl: true,
        }
    }
}

/// Events sent from the input thread to the main loop.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A key was pressed.
    Key(Key),
    /// The terminal was resized; the frame needs a redraw.
    Resize,
    /// The event source failed; carries the error text.
    Error(String),
    /// The input thread is exiting.
    Shutdown,
}
