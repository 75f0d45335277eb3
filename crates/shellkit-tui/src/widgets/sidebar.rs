//! Sidebar: logo, team switcher and navigation sections
//!
//! Rendered inline as a full column, as a collapsed icon rail, or inside a
//! sheet overlay on mobile.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shellkit_app::nav::{NavRow, NO_DATA_TEXT};
use shellkit_app::{FocusArea, Region, ShellState};

use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

use super::RegionFallback;

/// Rows taken by the logo and the team switcher above the navigation
pub const HEADER_ROWS: u16 = 4;

pub struct Sidebar<'a> {
    state: &'a ShellState,
    palette: &'a ShellPalette,
    icons: IconSet,
    rail: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a ShellState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
            rail: false,
        }
    }

    /// Collapsed to badges and icons only
    pub fn rail(mut self, rail: bool) -> Self {
        self.rail = rail;
        self
    }

    fn focused(&self) -> bool {
        self.state.focus == FocusArea::Sidebar
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, self.focused())
            .style(styles::sidebar_text(self.palette));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.regions.is_failed(Region::Sidebar) {
            RegionFallback::new(Region::Sidebar, self.icons)
                .detail(self.state.regions.failure(Region::Sidebar))
                .render(inner, buf);
            return;
        }

        let lines = if self.rail {
            self.rail_lines()
        } else {
            self.full_lines()
        };
        // Long titles and empty-state texts wrap on narrow screens
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Sidebar<'_> {
    fn full_lines(&self) -> Vec<Line<'_>> {
        let site = &self.state.config.site;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}]", site.logo),
                    Style::default()
                        .fg(self.palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(site.name.as_str(), styles::heading()),
            ]),
            Line::from(Span::styled(site.subtitle(), styles::text_muted())),
        ];

        let switcher = &self.state.team_switcher;
        if switcher.is_visible() {
            let logo = switcher
                .active_team()
                .map(|t| t.logo.as_str())
                .unwrap_or("?");
            lines.push(Line::from(vec![
                Span::styled(format!("[{}]", logo), styles::accent(self.palette)),
                Span::raw(" "),
                Span::raw(switcher.label()),
                Span::raw(" "),
                Span::styled(self.icons.chevrons_up_down(), styles::text_muted()),
            ]));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());

        let nav = &self.state.nav;
        if !nav.has_data() {
            lines.push(Line::from(Span::styled(NO_DATA_TEXT, styles::text_muted())));
            return lines;
        }

        let rows = nav.rows();
        let cursor_row = rows.get(nav.cursor()).copied();
        let cursor_style = |row: NavRow| {
            (self.focused() && cursor_row == Some(row)).then(|| styles::focused_selected(self.palette))
        };

        for (s, section) in nav.sections().iter().enumerate() {
            let chevron = if section.open {
                self.icons.chevron_down()
            } else {
                self.icons.chevron_right()
            };
            let header_style = cursor_style(NavRow::Header(s)).unwrap_or_else(styles::heading);
            lines.push(Line::from(vec![
                Span::styled(chevron, header_style),
                Span::raw(" "),
                Span::styled(section.title.as_str(), header_style),
            ]));

            if !section.open {
                continue;
            }
            if section.items.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", section.empty_text()),
                    styles::text_muted(),
                )));
                continue;
            }
            for (i, item) in section.items.iter().enumerate() {
                let base = if item.is_active {
                    styles::accent(self.palette).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let style = cursor_style(NavRow::Item(s, i)).unwrap_or(base);
                let glyph = item
                    .icon
                    .as_deref()
                    .and_then(|name| self.icons.named(name))
                    .unwrap_or(" ");
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(glyph, style),
                    Span::raw(" "),
                    Span::styled(item.title.as_str(), style),
                ]));
            }
        }
        lines
    }

    fn rail_lines(&self) -> Vec<Line<'_>> {
        let site = &self.state.config.site;
        let badge: String = site.logo.chars().take(2).collect();
        let mut lines = vec![
            Line::from(Span::styled(
                badge,
                Style::default()
                    .fg(self.palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for section in self.state.nav.sections().iter().filter(|s| s.open) {
            for item in &section.items {
                let glyph = item
                    .icon
                    .as_deref()
                    .and_then(|name| self.icons.named(name))
                    .map(str::to_string)
                    .unwrap_or_else(|| item.title.chars().take(1).collect());
                let style = if item.is_active {
                    styles::accent(self.palette)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(glyph, style)));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use shellkit_app::{IconMode, ShellConfig};
    use shellkit_core::{NavGroup, NavItem, Team};
    use std::path::Path;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn config_with_nav() -> ShellConfig {
        let mut config = ShellConfig::default();
        config.teams = vec![Team::new("Acme", "A")];
        config.navigation.main = Some(NavGroup {
            title: "Platform".into(),
            url: "#".into(),
            items: vec![NavItem::new("Home", "/").with_icon("home")],
        });
        config.navigation.secondary = Some(NavGroup {
            title: "Projects".into(),
            url: "#".into(),
            items: vec![NavItem::new("Archive", "/archive")],
        });
        config
    }

    fn render(state: &ShellState, rail: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(crate::layout::SIDEBAR_WIDTH, 16);
        let palette = ShellPalette::default();
        term.render_widget(
            Sidebar::new(state, &palette, icons()).rail(rail),
            term.area(),
        );
        term
    }

    #[test]
    fn test_renders_logo_team_and_sections() {
        let state = ShellState::new(config_with_nav(), Path::new("."), None);
        let term = render(&state, false);

        assert!(term.buffer_contains("[SK] Shellkit"));
        assert!(term.buffer_contains("Acme"));
        assert!(term.buffer_contains("Platform"));
        assert!(term.buffer_contains("Home"));
        // Secondary group starts closed
        assert!(term.buffer_contains("Projects"));
        assert!(!term.buffer_contains("Archive"));
    }

    #[test]
    fn test_no_data_empty_state() {
        let state = ShellState::new(ShellConfig::default(), Path::new("."), None);
        let term = render(&state, false);
        assert!(term.buffer_contains(NO_DATA_TEXT));
        assert!(!term.buffer_contains("Select a Team"));
    }

    #[test]
    fn test_empty_primary_group_text() {
        let mut config = ShellConfig::default();
        config.navigation.main = Some(NavGroup {
            title: String::new(),
            url: "#".into(),
            items: vec![],
        });
        let state = ShellState::new(config, Path::new("."), None);
        let term = render(&state, false);
        assert!(term.buffer_contains("Navigation"));
        assert!(term.buffer_contains("No navigation items available"));
    }

    #[test]
    fn test_narrow_sidebar_wraps_instead_of_cutting() {
        let mut config = ShellConfig::default();
        config.navigation.main = Some(NavGroup {
            title: String::new(),
            url: "#".into(),
            items: vec![],
        });
        let state = ShellState::new(config, Path::new("."), None);
        let mut term = TestTerminal::with_size(20, 12);
        let palette = ShellPalette::default();
        term.render_widget(Sidebar::new(&state, &palette, icons()), term.area());

        assert!(term.buffer_contains("No navigation"));
        assert!(term.buffer_contains("available"));
    }

    #[test]
    fn test_rail_shows_icons_only() {
        let state = ShellState::new(config_with_nav(), Path::new("."), None);
        let term = render(&state, true);
        assert!(term.buffer_contains("SK"));
        assert!(term.buffer_contains("\u{2302}"));
        assert!(!term.buffer_contains("Platform"));
    }

    #[test]
    fn test_failed_region_shows_fallback() {
        let mut state = ShellState::new(config_with_nav(), Path::new("."), None);
        state.regions.fail(
            Region::Sidebar,
            shellkit_core::Error::render("sidebar", "bad data"),
        );
        let term = render(&state, false);
        assert!(term.buffer_contains("Sidebar Error"));
        assert!(!term.buffer_contains("Platform"));
    }
}
