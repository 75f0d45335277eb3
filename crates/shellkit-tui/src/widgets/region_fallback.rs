//! Fallback shown in place of a failed region

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shellkit_app::Region;

use crate::theme::{icons::IconSet, styles};

pub const RETRY_HINT: &str = "Try again";

pub struct RegionFallback<'a> {
    region: Region,
    detail: Option<&'a str>,
    icons: IconSet,
}

impl<'a> RegionFallback<'a> {
    pub fn new(region: Region, icons: IconSet) -> Self {
        Self {
            region,
            detail: None,
            icons,
        }
    }

    /// Error text recorded for the region
    pub fn detail(mut self, detail: Option<&'a str>) -> Self {
        self.detail = detail;
        self
    }
}

impl Widget for RegionFallback<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::raw(" "),
                Span::styled(
                    self.region.fallback_title(),
                    styles::status_red().patch(styles::heading()),
                ),
            ]),
            Line::from(self.region.fallback_message()),
        ];
        if let Some(detail) = self.detail {
            lines.push(Line::from(Span::styled(detail, styles::text_muted())));
        }
        lines.push(Line::from(vec![
            Span::styled("[r] ", styles::keybinding()),
            Span::raw(RETRY_HINT),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
