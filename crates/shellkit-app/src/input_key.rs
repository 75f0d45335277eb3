//! Abstract input key event, independent of terminal library.
//!
//! The shell stores and dispatcher only ever see `InputKey`; the TUI crate
//! converts crossterm events at its boundary.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+b, Ctrl+s, ...)
    CharCtrl(char),
    /// Character with the Meta/Super modifier (Cmd on macOS terminals that report it)
    CharMeta(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// The character and whether a shortcut modifier (Ctrl or Meta) was held
    pub fn modified_char(&self) -> Option<char> {
        match self {
            InputKey::CharCtrl(c) | InputKey::CharMeta(c) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }
}
