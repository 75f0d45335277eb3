//! Screen layout for the shell
//!
//! Turns a composed [`ShellLayout`] into terminal rectangles: an inline
//! sidebar column (full width or an icon rail), a header row over the main
//! column, the content frame and an inline settings column. Sheets overlay
//! the whole screen from the left (sidebar) or right (settings panel).

use ratatui::layout::{Constraint, Layout, Rect};

use shellkit_app::{PanelKind, PanelPresentation, ShellLayout};

/// Expanded inline sidebar: 16rem at 8px per column, plus the borders
pub const SIDEBAR_WIDTH: u16 = 34;
/// Collapsed inline sidebar, icons only
pub const SIDEBAR_RAIL_WIDTH: u16 = 5;
/// Expanded inline settings panel
pub const SETTINGS_WIDTH: u16 = 34;
/// Sheet overlay width, capped by the screen
pub const SHEET_WIDTH: u16 = 34;
/// Header: top border + one row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetArea {
    pub kind: PanelKind,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellAreas {
    /// Inline sidebar column, absent on mobile
    pub sidebar: Option<Rect>,
    /// The inline sidebar is collapsed to a rail
    pub sidebar_rail: bool,
    pub header: Rect,
    pub content: Rect,
    /// Inline settings column, absent when collapsed, disabled or a sheet
    pub settings_panel: Option<Rect>,
    /// Visible sheet overlays, sidebar first
    pub sheets: Vec<SheetArea>,
}

pub fn create(area: Rect, layout: &ShellLayout) -> ShellAreas {
    let (sidebar_width, sidebar_rail) = match layout.sidebar {
        PanelPresentation::Inline { expanded: true } => (SIDEBAR_WIDTH, false),
        PanelPresentation::Inline { expanded: false } => (SIDEBAR_RAIL_WIDTH, true),
        _ => (0, false),
    };
    let sidebar_width = sidebar_width.min(area.width / 2);

    let [sidebar_col, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main);

    let settings_width = match layout.settings_panel {
        Some(PanelPresentation::Inline { expanded: true }) => SETTINGS_WIDTH.min(body.width / 2),
        _ => 0,
    };
    let [content, settings_col] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(settings_width)]).areas(body);

    let mut sheets = Vec::new();
    if layout.sidebar.is_visible_sheet() {
        sheets.push(SheetArea {
            kind: PanelKind::Sidebar,
            area: sheet_rect(area, false),
        });
    }
    if layout
        .settings_panel
        .is_some_and(|p| p.is_visible_sheet())
    {
        sheets.push(SheetArea {
            kind: PanelKind::SettingsPanel,
            area: sheet_rect(area, true),
        });
    }

    ShellAreas {
        sidebar: (sidebar_width > 0).then_some(sidebar_col),
        sidebar_rail: sidebar_rail && sidebar_width > 0,
        header,
        content,
        settings_panel: (settings_width > 0).then_some(settings_col),
        sheets,
    }
}

/// Full-height overlay at one edge, leaving a strip of the shell visible.
fn sheet_rect(area: Rect, right: bool) -> Rect {
    let width = SHEET_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let x = if right {
        area.right().saturating_sub(width)
    } else {
        area.x
    };
    Rect::new(x, area.y, width, area.height)
}

/// Popup rectangle clamped inside `bounds`
pub fn popup_rect(bounds: Rect, x: u16, y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let y = y.min(bounds.bottom().saturating_sub(height)).max(bounds.y);
    Rect::new(x, y, width, height)
}
