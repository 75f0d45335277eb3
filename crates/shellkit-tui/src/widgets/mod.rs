//! Shell widget components

mod content;
mod header;
mod menus;
mod region_fallback;
mod settings_panel;
mod sidebar;

pub use content::{ContentFrame, EMPTY_CONTENT_TEXT, SETTINGS_TRIGGER_LABEL};
pub use header::MainHeader;
pub use menus::{TeamMenu, UserMenu, MENU_WIDTH, TEAMS_LABEL};
pub use region_fallback::{RegionFallback, RETRY_HINT};
pub use settings_panel::{SettingsPanel, LOADING_TEXT};
pub use sidebar::{Sidebar, HEADER_ROWS as SIDEBAR_HEADER_ROWS};
