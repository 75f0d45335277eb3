//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::ShellState;

/// Convert key events to messages. Open menus capture navigation keys;
/// registered shortcuts win over single-letter bindings.
pub fn handle_key(state: &ShellState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    if state.team_switcher.is_menu_open() {
        return handle_key_team_menu(key);
    }
    if state.user_menu.is_open() {
        return handle_key_user_menu(key);
    }
    if let Some(action) = state.dispatcher.dispatch(&key) {
        return Some(Message::Shortcut(action));
    }
    handle_key_normal(state, key)
}

fn handle_key_team_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::TeamMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::TeamMenuDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::TeamMenuActivate),
        InputKey::Esc | InputKey::Char('t') => Some(Message::ToggleTeamMenu),
        // 1-9 pick a team directly
        InputKey::Char(c @ '1'..='9') => Some(Message::SelectTeam(c as usize - '1' as usize)),
        _ => None,
    }
}

fn handle_key_user_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::UserMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::UserMenuDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::UserMenuActivate),
        InputKey::Esc | InputKey::Char('u') => Some(Message::ToggleUserMenu),
        _ => None,
    }
}

fn handle_key_normal(state: &ShellState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::Dismiss),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),

        InputKey::Char('t') if state.team_switcher.is_visible() => Some(Message::ToggleTeamMenu),
        InputKey::Char('u') => Some(Message::ToggleUserMenu),
        InputKey::Char('g') => Some(Message::ActivateLogo),

        InputKey::Char('c') => Some(Message::ToggleHighContrast),
        InputKey::Char('m') => Some(Message::CycleTheme),
        InputKey::Char('n') => Some(Message::MarkNotificationsRead),
        InputKey::Char('r') => Some(Message::RetryRegions),
        InputKey::Char('R') => Some(Message::ResetLayout),
        _ => None,
    }
}
