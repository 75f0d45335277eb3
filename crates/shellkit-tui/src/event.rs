//! crossterm events to shell messages

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shellkit_app::message::Message;
use shellkit_app::InputKey;
use shellkit_core::prelude::*;

/// One frame at 20 FPS. Each timeout is a `Tick` for the debounce timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Translate a key press into the shell's terminal-agnostic key.
///
/// Super and Meta report as `CharMeta`; Alt does too, since most terminals
/// send Alt where a browser would see the Meta key. Ctrl wins when both are held.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let input = match key.code {
        KeyCode::Char(c) => char_input(c, key.modifiers),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        _ => return None,
    };
    Some(input)
}

fn char_input(c: char, modifiers: KeyModifiers) -> InputKey {
    let meta = KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::ALT;
    if modifiers.contains(KeyModifiers::CONTROL) {
        InputKey::CharCtrl(c)
    } else if modifiers.intersects(meta) {
        InputKey::CharMeta(c)
    } else {
        InputKey::Char(c)
    }
}

/// Key presses and resizes; everything else (mouse, focus, paste) is dropped
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Resize(columns, _) => Some(Message::Resize { columns }),
        _ => None,
    }
}

/// Elapsed-time tick source.
///
/// A timed-out poll already yields a `Tick`, but a steady stream of input
/// never times out; the loop asks this clock after every event so debounce
/// timers keep advancing at the poll rate.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Note that a tick was delivered at `now`
    pub fn ticked(&mut self, now: Instant) {
        self.last = now;
    }

    /// Whether a tick is owed at `now`; if so, records it
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < POLL_INTERVAL {
            return false;
        }
        self.last = now;
        true
    }
}

/// Wait up to one frame for input
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }
    Ok(event_to_message(event::read()?))
}
