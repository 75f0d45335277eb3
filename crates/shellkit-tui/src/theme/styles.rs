//! Semantic style builders over a [`ShellPalette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use shellkit_app::shell::{ContentCorners, Corner};

use super::palette::{self, ShellPalette};

// --- Text styles ---
pub fn sidebar_text(p: &ShellPalette) -> Style {
    Style::default().fg(p.sidebar_fg).bg(p.sidebar_bg)
}

pub fn content_text(p: &ShellPalette) -> Style {
    Style::default().fg(p.content_fg).bg(p.content_bg)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &ShellPalette) -> Style {
    Style::default().fg(p.border)
}

pub fn border_active(p: &ShellPalette) -> Style {
    Style::default().fg(p.primary)
}

// --- Accent styles ---
/// Active navigation item
pub fn accent(p: &ShellPalette) -> Style {
    Style::default().fg(p.accent_fg).bg(p.accent_bg)
}

/// Cursor row in a focused list, or highlighted menu entry
pub fn focused_selected(p: &ShellPalette) -> Style {
    Style::default()
        .fg(p.primary_fg)
        .bg(p.primary)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

// --- Block builders ---
pub fn glass_block(p: &ShellPalette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
}

/// Content frame. A large leading corner rounds the frame; otherwise the
/// frame sits square against its neighbours.
pub fn content_block(p: &ShellPalette, corners: ContentCorners, focused: bool) -> Block<'static> {
    let border_type = match corners.leading {
        Corner::Large => BorderType::Rounded,
        Corner::Small | Corner::None => BorderType::Plain,
    };
    glass_block(p, focused)
        .border_type(border_type)
        .style(content_text(p))
}

pub fn modal_block(p: &ShellPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_border_styles_follow_palette() {
        let p = ShellPalette::default();
        assert_eq!(border_inactive(&p).fg, Some(p.border));
        assert_eq!(border_active(&p).fg, Some(p.primary));
    }

    #[test]
    fn test_focused_selected_uses_primary() {
        let p = ShellPalette {
            primary: Color::Rgb(1, 2, 3),
            primary_fg: Color::White,
            ..Default::default()
        };
        let style = focused_selected(&p);
        assert_eq!(style.bg, Some(Color::Rgb(1, 2, 3)));
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_muted() {
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }
}
