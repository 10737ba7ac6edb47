//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the application crate and the headless runner never depend on crossterm.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Printable character, if this key types one
    pub fn as_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}
