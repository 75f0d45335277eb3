//! Dropdown menus: team switcher and user menu
//!
//! Both draw over the shell; callers clear the area first.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shellkit_app::team_switcher::{TeamSwitcherState, ADD_TEAM_LABEL};
use shellkit_app::user_menu::UserMenuState;

use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

pub const TEAMS_LABEL: &str = "Teams";
pub const MENU_WIDTH: u16 = 30;

/// Team dropdown: label, one row per team with its shortcut, then "Add team"
pub struct TeamMenu<'a> {
    switcher: &'a TeamSwitcherState,
    palette: &'a ShellPalette,
    icons: IconSet,
}

impl<'a> TeamMenu<'a> {
    pub fn new(switcher: &'a TeamSwitcherState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            switcher,
            palette,
            icons,
        }
    }

    /// Borders, label, teams, separator and the add entry
    pub fn height(&self) -> u16 {
        self.switcher.teams().len() as u16 + 5
    }
}

impl Widget for TeamMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block(self.palette);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let highlight = |i: usize| {
            if self.switcher.highlighted() == i {
                styles::focused_selected(self.palette)
            } else {
                Style::default()
            }
        };

        let mut lines = vec![Line::from(Span::styled(TEAMS_LABEL, styles::text_muted()))];
        for (i, team) in self.switcher.teams().iter().enumerate() {
            let style = highlight(i);
            let marker = if self.switcher.active_index() == Some(i) {
                "*"
            } else {
                " "
            };
            let shortcut = TeamSwitcherState::shortcut_label(i).unwrap_or_default();
            let label = format!("{} [{}] {}", marker, team.logo, team.name);
            let pad = (inner.width as usize)
                .saturating_sub(unicode_width::UnicodeWidthStr::width(label.as_str()))
                .saturating_sub(unicode_width::UnicodeWidthStr::width(shortcut.as_str()));
            lines.push(Line::from(vec![
                Span::styled(label, style),
                Span::styled(" ".repeat(pad), style),
                Span::styled(shortcut, style.patch(styles::text_muted())),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            styles::border_inactive(self.palette),
        )));
        let add_style = highlight(self.switcher.teams().len());
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", self.icons.plus()), add_style),
            Span::styled(ADD_TEAM_LABEL, add_style),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// User dropdown: identity header, configured items, then "Log out"
pub struct UserMenu<'a> {
    menu: &'a UserMenuState,
    palette: &'a ShellPalette,
    icons: IconSet,
}

impl<'a> UserMenu<'a> {
    pub fn new(menu: &'a UserMenuState, palette: &'a ShellPalette, icons: IconSet) -> Self {
        Self {
            menu,
            palette,
            icons,
        }
    }

    /// Borders, two identity rows, two separators and the items
    pub fn height(&self) -> u16 {
        self.menu.items().len() as u16 + 6
    }
}

impl Widget for UserMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block(self.palette);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let profile = self.menu.profile();
        let separator = || {
            Line::from(Span::styled(
                "─".repeat(inner.width as usize),
                styles::border_inactive(self.palette),
            ))
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("({})", profile.initials()),
                    Style::default().fg(self.palette.primary),
                ),
                Span::raw(" "),
                Span::styled(profile.username.as_str(), styles::heading()),
            ]),
            Line::from(Span::styled(profile.email.as_str(), styles::text_muted())),
            separator(),
        ];

        let items = self.menu.items();
        let last = items.len() - 1;
        for (i, item) in items.into_iter().enumerate() {
            if i == last {
                lines.push(separator());
            }
            let style = if self.menu.highlighted() == i {
                styles::focused_selected(self.palette)
            } else {
                Style::default()
            };
            let prefix = if i == last {
                format!("{} ", self.icons.logout())
            } else {
                "  ".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(item, style),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
