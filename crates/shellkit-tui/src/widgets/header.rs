//! Header bar above the content
//!
//! Sidebar trigger and current section on the left; notifications, theme
//! mode and the user avatar on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shellkit_app::{Region, ShellState};

use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

pub struct MainHeader<'a> {
    state: &'a ShellState,
    palette: &'a ShellPalette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a ShellState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).style(styles::content_text(self.palette));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.regions.is_failed(Region::Header) {
            let line = Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(Region::Header.fallback_title(), styles::status_red()),
                Span::raw("  "),
                Span::styled("[r]", styles::keybinding()),
                Span::raw(" Try again"),
            ]);
            Paragraph::new(line).render(inner, buf);
            return;
        }

        let left = self.left_line();
        let right = self.right_line();
        let right_width = right.width() as u16;

        Paragraph::new(left).render(inner, buf);
        if right_width < inner.width {
            let right_area = Rect {
                x: inner.right() - right_width,
                width: right_width,
                ..inner
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

impl MainHeader<'_> {
    fn left_line(&self) -> Line<'_> {
        let layout = self.state.layout_store.state();
        let section = layout
            .active_section
            .as_deref()
            .unwrap_or(self.state.config.site.name.as_str());
        Line::from(vec![
            Span::styled(
                self.icons.sidebar_trigger(),
                Style::default().fg(self.palette.primary),
            ),
            Span::raw(" "),
            Span::styled(section, styles::heading()),
        ])
    }

    fn right_line(&self) -> Line<'_> {
        let layout = self.state.layout_store.state();
        let mut spans = Vec::new();

        if layout.notifications.count > 0 {
            spans.push(Span::raw(self.icons.bell()));
            spans.push(Span::raw(format!(" {}", layout.notifications.count)));
            if layout.notifications.has_unread {
                spans.push(Span::styled(
                    self.icons.unread_dot(),
                    styles::status_red(),
                ));
            }
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled(layout.theme.as_str(), styles::text_muted()));
        if layout.high_contrast {
            spans.push(Span::styled(" HC", styles::keybinding()));
        }
        spans.push(Span::raw("  "));

        let profile = self.state.user_menu.profile();
        spans.push(Span::styled(
            format!("({})", profile.initials()),
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(profile.username.as_str()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(self.icons.chevron_down(), styles::text_muted()));
        spans.push(Span::raw(" "));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use shellkit_app::{AppLayoutAction, IconMode, ShellConfig};
    use std::path::Path;

    fn render(state: &ShellState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 3);
        let palette = ShellPalette::default();
        term.render_widget(
            MainHeader::new(state, &palette, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_default_header() {
        let state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        let term = render(&state);
        assert!(term.buffer_contains("Shellkit"));
        assert!(term.buffer_contains("(US) User"));
        assert!(term.buffer_contains("system"));
    }

    #[test]
    fn test_active_section_and_notifications() {
        let mut state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        state.dispatch_layout(AppLayoutAction::SetActiveSection(Some("Reports".into())));
        state.dispatch_layout(AppLayoutAction::SetNotificationCount(4));
        state.dispatch_layout(AppLayoutAction::ToggleHighContrast);
        let term = render(&state);

        assert!(term.buffer_contains("Reports"));
        assert!(term.buffer_contains(" 4"));
        assert!(term.buffer_contains("HC"));
    }

    #[test]
    fn test_failed_header_shows_fallback() {
        let mut state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        state.regions.fail(
            Region::Header,
            shellkit_core::Error::render("header", "boom"),
        );
        let term = render(&state);
        assert!(term.buffer_contains("Header Error"));
        assert!(term.buffer_contains("Try again"));
    }
}
