//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use shellkit_app::{PanelKind, ShellState};
use shellkit_core::Error;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette::ShellPalette, styles};

/// Render the complete shell
///
/// Pure with respect to `state`: everything shown is derived from the
/// composed layout and the widget models.
pub fn view(frame: &mut Frame, state: &ShellState) {
    let area = frame.area();
    let palette = ShellPalette::from_theme(&state.theme());
    let icons = IconSet::new(state.config.ui.icons);

    frame.render_widget(Block::default().style(styles::content_text(&palette)), area);

    let shell = match state.layout() {
        Ok(shell) => shell,
        Err(e) => {
            render_error(frame, area, &e);
            return;
        }
    };
    let areas = layout::create(area, &shell);

    if let Some(sidebar_area) = areas.sidebar {
        frame.render_widget(
            widgets::Sidebar::new(state, &palette, icons).rail(areas.sidebar_rail),
            sidebar_area,
        );
    }

    frame.render_widget(widgets::MainHeader::new(state, &palette, icons), areas.header);

    frame.render_widget(
        widgets::ContentFrame::new(state, &palette, icons)
            .corners(shell.corners)
            .trigger(shell.settings_trigger),
        areas.content,
    );

    if let Some(settings_area) = areas.settings_panel {
        frame.render_widget(
            widgets::SettingsPanel::new(state, &palette, icons),
            settings_area,
        );
    }

    for sheet in &areas.sheets {
        frame.render_widget(Clear, sheet.area);
        match sheet.kind {
            PanelKind::Sidebar => {
                frame.render_widget(widgets::Sidebar::new(state, &palette, icons), sheet.area)
            }
            PanelKind::SettingsPanel => frame.render_widget(
                widgets::SettingsPanel::new(state, &palette, icons),
                sheet.area,
            ),
        }
    }

    render_menus(frame, area, &areas, state, &palette, icons);
}

/// Open dropdowns draw last, over everything else
fn render_menus(
    frame: &mut Frame,
    area: Rect,
    areas: &layout::ShellAreas,
    state: &ShellState,
    palette: &ShellPalette,
    icons: IconSet,
) {
    if state.team_switcher.is_menu_open() {
        // Anchor under the switcher row of whichever sidebar is showing
        let anchor = areas
            .sheets
            .iter()
            .find(|s| s.kind == PanelKind::Sidebar)
            .map(|s| s.area)
            .or(areas.sidebar.filter(|_| !areas.sidebar_rail))
            .map(|a| (a.x + 1, a.y + widgets::SIDEBAR_HEADER_ROWS))
            .unwrap_or((area.x, areas.header.bottom()));

        let menu = widgets::TeamMenu::new(&state.team_switcher, palette, icons);
        let rect = layout::popup_rect(area, anchor.0, anchor.1, widgets::MENU_WIDTH, menu.height());
        frame.render_widget(Clear, rect);
        frame.render_widget(menu, rect);
    }

    if state.user_menu.is_open() {
        let menu = widgets::UserMenu::new(&state.user_menu, palette, icons);
        let x = area.right().saturating_sub(widgets::MENU_WIDTH + 1);
        let rect = layout::popup_rect(area, x, areas.header.bottom(), widgets::MENU_WIDTH, menu.height());
        frame.render_widget(Clear, rect);
        frame.render_widget(menu, rect);
    }
}

/// Composition failed; nothing of the shell can be trusted to render
fn render_error(frame: &mut Frame, area: Rect, error: &Error) {
    let lines = vec![
        Line::from(Span::styled("Shell error", styles::status_red())),
        Line::from(error.to_string()),
        Line::from(vec![
            Span::styled("[q] ", styles::keybinding()),
            Span::raw("Quit"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
