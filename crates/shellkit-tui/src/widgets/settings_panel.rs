//! Settings panel: heading plus one block per configured section
//!
//! Each section is its own region; a failed section shows a fallback while
//! its siblings keep rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shellkit_app::{FocusArea, Region, ShellState};

use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

pub const LOADING_TEXT: &str = "Loading…";

pub struct SettingsPanel<'a> {
    state: &'a ShellState,
    palette: &'a ShellPalette,
    icons: IconSet,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a ShellState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }

    fn section_lines(&self, index: usize) -> Vec<Line<'a>> {
        let state = self.state;
        let Some(section) = state.sections.get(index) else {
            return Vec::new();
        };
        let region = Region::SettingsSection(index);
        let mut lines = vec![Line::from(Span::styled(
            section.title.as_str(),
            styles::heading(),
        ))];

        if state.regions.is_failed(region) {
            lines.push(Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(region.fallback_title(), styles::status_red()),
            ]));
            lines.push(Line::from(region.fallback_message()));
            lines.push(Line::from(vec![
                Span::styled("[r] ", styles::keybinding()),
                Span::raw("Try again"),
            ]));
        } else {
            match section.body.as_deref() {
                Some(body) => lines.extend(body.lines().map(Line::from)),
                None => lines.push(Line::from(Span::styled(LOADING_TEXT, styles::text_muted()))),
            }
        }
        lines.push(Line::default());
        lines
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusArea::SettingsPanel;
        let block = styles::glass_block(self.palette, focused)
            .title(format!(" {} ", self.state.config.settings_panel.heading()))
            .style(styles::content_text(self.palette));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = (0..self.state.sections.len())
            .flat_map(|i| self.section_lines(i))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.state.settings_scroll, 0))
            .render(inner, buf);
    }
}
