//! Main content frame with its header row and the settings panel trigger

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shellkit_app::shell::{ContentCorners, Corner};
use shellkit_app::{FocusArea, Region, ShellState, TriggerState};

use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

use super::RegionFallback;

pub const EMPTY_CONTENT_TEXT: &str = "Nothing to show yet.";
pub const SETTINGS_TRIGGER_LABEL: &str = "Settings";

pub struct ContentFrame<'a> {
    state: &'a ShellState,
    palette: &'a ShellPalette,
    icons: IconSet,
    corners: ContentCorners,
    trigger: TriggerState,
}

impl<'a> ContentFrame<'a> {
    pub fn new(state: &'a ShellState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
            corners: ContentCorners {
                leading: Corner::None,
                trailing: Corner::Large,
            },
            trigger: TriggerState::Hidden,
        }
    }

    pub fn corners(mut self, corners: ContentCorners) -> Self {
        self.corners = corners;
        self
    }

    pub fn trigger(mut self, trigger: TriggerState) -> Self {
        self.trigger = trigger;
        self
    }
}

impl Widget for ContentFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusArea::Content;
        let block = styles::content_block(self.palette, self.corners, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let header_area = Rect { height: 1, ..inner };
        self.render_header_row(header_area, buf);

        if inner.height < 3 {
            return;
        }
        let body_area = Rect {
            y: inner.y + 2,
            height: inner.height - 2,
            ..inner
        };

        if self.state.regions.is_failed(Region::Content) {
            RegionFallback::new(Region::Content, self.icons)
                .detail(self.state.regions.failure(Region::Content))
                .render(body_area, buf);
            return;
        }

        let body = match self.state.content.as_deref() {
            Some(text) => Paragraph::new(text),
            None => Paragraph::new(Span::styled(EMPTY_CONTENT_TEXT, styles::text_muted())),
        };
        body.wrap(Wrap { trim: false })
            .scroll((self.state.content_scroll, 0))
            .render(body_area, buf);
    }
}

impl ContentFrame<'_> {
    fn render_header_row(&self, area: Rect, buf: &mut Buffer) {
        let title = self
            .state
            .config
            .content
            .header
            .as_deref()
            .unwrap_or(self.state.config.site.name.as_str());

        let mut left = vec![Span::styled(title, styles::heading())];
        if let Some(notice) = self.state.notice.as_deref() {
            left.push(Span::raw("  "));
            left.push(Span::styled(notice, styles::keybinding()));
        }
        Paragraph::new(Line::from(left)).render(area, buf);

        let trigger_style = match self.trigger {
            TriggerState::Hidden => return,
            TriggerState::Enabled => styles::border_active(self.palette),
            TriggerState::Disabled => styles::disabled(),
        };
        let trigger = Line::from(vec![
            Span::styled(self.icons.settings_trigger(), trigger_style),
            Span::raw(" "),
            Span::styled(SETTINGS_TRIGGER_LABEL, trigger_style),
        ]);
        let width = trigger.width() as u16;
        if width < area.width {
            let trigger_area = Rect {
                x: area.right() - width,
                width,
                ..area
            };
            Paragraph::new(trigger).render(trigger_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;
    use shellkit_app::{IconMode, ShellConfig};
    use std::path::Path;

    fn render(state: &ShellState, trigger: TriggerState) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 10);
        let palette = ShellPalette::default();
        term.render_widget(
            ContentFrame::new(state, &palette, IconSet::new(IconMode::Unicode)).trigger(trigger),
            term.area(),
        );
        term
    }

    #[test]
    fn test_placeholder_without_content() {
        let state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        let term = render(&state, TriggerState::Hidden);
        assert!(term.buffer_contains("Shellkit"));
        assert!(term.buffer_contains(EMPTY_CONTENT_TEXT));
        assert!(!term.buffer_contains(SETTINGS_TRIGGER_LABEL));
    }

    #[test]
    fn test_content_header_and_body() {
        let mut config = ShellConfig::default();
        config.content.header = Some("Overview".into());
        let mut state = ShellState::new(config, Path::new("."), None);
        state.content = Some("Quarterly numbers".into());
        state.notice = Some("Layout reset".into());
        let term = render(&state, TriggerState::Enabled);

        assert!(term.buffer_contains("Overview"));
        assert!(term.buffer_contains("Quarterly numbers"));
        assert!(term.buffer_contains("Layout reset"));
        assert!(term.buffer_contains(SETTINGS_TRIGGER_LABEL));
    }

    #[test]
    fn test_disabled_trigger_is_dimmed() {
        let state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        let term = render(&state, TriggerState::Disabled);
        assert!(term.buffer_contains(SETTINGS_TRIGGER_LABEL));

        // "Settings" ends one cell before the right border
        assert_eq!(term.cell_at(58, 1), Some("s"));
        assert!(term.buffer()[(55, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_failed_content_is_isolated() {
        let mut state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        state.regions.fail(
            Region::Content,
            shellkit_core::Error::render("content", "boom"),
        );
        let term = render(&state, TriggerState::Enabled);
        assert!(term.buffer_contains("Content Error"));
        // The header row still renders
        assert!(term.buffer_contains(SETTINGS_TRIGGER_LABEL));
    }
}
