//! Configuration types for shellkit
//!
//! Defines:
//! - `ShellConfig` - Everything read from `.shellkit/config.toml`
//! - One struct per `[section]`
//! - `IconMode` - Glyph set used by the TUI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use shellkit_core::{NavGroup, SidebarData, SiteInfo, Team, ThemeConfig};

use crate::layout_state::AppLayoutStatePatch;
use crate::panel::PanelOptions;
use crate::user_menu::UserProfile;
use crate::viewport::{
    DEFAULT_MID_WIDTH_MAX, DEFAULT_MID_WIDTH_MIN, DEFAULT_PANEL_BREAKPOINT, DEFAULT_PX_PER_COLUMN,
};

/// Root of the configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub teams: Vec<Team>,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub sidebar: SidebarSettings,

    #[serde(default)]
    pub settings_panel: SettingsPanelSettings,

    /// Partial colour overrides, merged over the light or dark baseline
    #[serde(default)]
    pub theme: Option<ThemeConfig>,

    #[serde(default)]
    pub appearance: AppearanceSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub persistence: PersistenceSettings,

    #[serde(default)]
    pub user: UserProfile,

    #[serde(default)]
    pub content: ContentSettings,

    /// Explicit layout state, applied over anything restored from storage.
    /// Keys use the persisted camelCase names (`sidebarOpen`, `theme`, ...).
    #[serde(default)]
    pub initial_state: Option<AppLayoutStatePatch>,
}

impl ShellConfig {
    /// Sidebar data built from `[[teams]]` and `[navigation]`. `None` when
    /// neither is configured.
    pub fn sidebar_data(&self) -> Option<SidebarData> {
        let nav = &self.navigation;
        if self.teams.is_empty() && nav.main.is_none() && nav.secondary.is_none() {
            return None;
        }
        let main = nav.main.clone().unwrap_or_else(|| NavGroup {
            title: "Navigation".to_string(),
            url: "#".to_string(),
            items: Vec::new(),
        });
        let secondary = nav.secondary.clone().unwrap_or_else(|| NavGroup {
            title: "More".to_string(),
            url: "#".to_string(),
            items: Vec::new(),
        });
        Some(SidebarData {
            teams: self.teams.clone(),
            nav_main: vec![main, secondary],
        })
    }
}

/// `[navigation]` groups
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavigationSettings {
    #[serde(default)]
    pub main: Option<NavGroup>,

    #[serde(default)]
    pub secondary: Option<NavGroup>,
}

/// `[sidebar]` settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SidebarSettings {
    /// Width in px below which the sidebar becomes a sheet
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,

    #[serde(default = "default_true")]
    pub default_open: bool,

    /// Let the layout store own the open flag instead of the panel
    #[serde(default)]
    pub bind_to_store: bool,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            breakpoint: default_breakpoint(),
            default_open: true,
            bind_to_store: false,
        }
    }
}

impl SidebarSettings {
    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            default_open: self.default_open,
            breakpoint: self.breakpoint,
            mid_width: None,
        }
    }
}

/// `[settings_panel]` settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsPanelSettings {
    #[serde(default = "default_true")]
    pub show: bool,

    /// Show the trigger button in the content header
    #[serde(default = "default_true")]
    pub show_trigger: bool,

    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,

    #[serde(default = "default_true")]
    pub default_open: bool,

    /// Lower edge of the auto-collapse band. Setting either edge enables it.
    #[serde(default)]
    pub mid_width_min: Option<u32>,

    #[serde(default)]
    pub mid_width_max: Option<u32>,

    #[serde(default)]
    pub bind_to_store: bool,

    /// Panel heading, "My preferences" when unset
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub sections: Vec<SectionSettings>,
}

impl Default for SettingsPanelSettings {
    fn default() -> Self {
        Self {
            show: true,
            show_trigger: true,
            breakpoint: default_breakpoint(),
            default_open: true,
            mid_width_min: None,
            mid_width_max: None,
            bind_to_store: false,
            title: None,
            sections: Vec::new(),
        }
    }
}

impl SettingsPanelSettings {
    pub fn mid_width_band(&self) -> Option<(u32, u32)> {
        if self.mid_width_min.is_none() && self.mid_width_max.is_none() {
            return None;
        }
        Some((
            self.mid_width_min.unwrap_or(DEFAULT_MID_WIDTH_MIN),
            self.mid_width_max.unwrap_or(DEFAULT_MID_WIDTH_MAX),
        ))
    }

    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            default_open: self.default_open,
            breakpoint: self.breakpoint,
            mid_width: self.mid_width_band(),
        }
    }

    pub fn heading(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("My preferences")
    }

    pub fn has_content(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// One `[[settings_panel.sections]]` entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SectionSettings {
    pub title: String,

    /// Inline body text
    #[serde(default)]
    pub text: Option<String>,

    /// Body loaded from a file, relative to the config directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[appearance]` settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppearanceSettings {
    /// Resolve the `system` theme mode to dark
    #[serde(default)]
    pub dark_base: bool,
}

/// Glyph set for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// `[ui]` settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Pixels per terminal column when converting the terminal width to a viewport width
    #[serde(default = "default_px_per_column")]
    pub px_per_column: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            px_per_column: default_px_per_column(),
        }
    }
}

/// `[persistence]` settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersistenceSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Storage directory, overridden by `SHELLKIT_DATA_DIR`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

/// `[content]` settings for the main region
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentSettings {
    /// Title in the content header
    #[serde(default)]
    pub header: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// Takes precedence over `text`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_breakpoint() -> u32 {
    DEFAULT_PANEL_BREAKPOINT
}

fn default_px_per_column() -> u32 {
    DEFAULT_PX_PER_COLUMN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.sidebar.breakpoint, 1024);
        assert!(config.sidebar.default_open);
        assert!(config.settings_panel.show);
        assert_eq!(config.settings_panel.mid_width_band(), None);
        assert_eq!(config.settings_panel.heading(), "My preferences");
        assert_eq!(config.ui.px_per_column, 8);
        assert!(config.persistence.enabled);
        assert!(config.sidebar_data().is_none());
    }

    #[test]
    fn test_mid_width_band_partial() {
        let settings = SettingsPanelSettings {
            mid_width_max: Some(1200),
            ..Default::default()
        };
        assert_eq!(settings.mid_width_band(), Some((1000, 1200)));
        assert_eq!(settings.panel_options().mid_width, Some((1000, 1200)));
    }

    #[test]
    fn test_sidebar_data_fallback_groups() {
        let config = ShellConfig {
            teams: vec![Team::new("Acme", "A")],
            ..Default::default()
        };
        let data = config.sidebar_data().unwrap();
        assert_eq!(data.nav_main.len(), 2);
        assert_eq!(data.nav_main[0].title, "Navigation");
        assert_eq!(data.nav_main[1].title, "More");
        assert_eq!(data.nav_main[1].url, "#");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r##"
[site]
name = "Acme Console"
logo = "AC"

[[teams]]
name = "Acme"
logo = "A"

[navigation.main]
title = "Main"
items = [{ title = "Home", url = "/", icon = "home" }]

[settings_panel]
mid_width_min = 1000
mid_width_max = 1170
title = "Prefs"

[[settings_panel.sections]]
title = "General"
text = "Hello"

[theme.sidebar]
background = "#101010"

[ui]
icons = "nerd_fonts"
px_per_column = 10

[initial_state]
sidebarOpen = false
theme = "dark"
"##;
        let config: ShellConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Acme Console");
        assert_eq!(config.teams.len(), 1);
        let main = config.navigation.main.as_ref().unwrap();
        assert_eq!(main.items[0].icon.as_deref(), Some("home"));
        assert_eq!(config.settings_panel.mid_width_band(), Some((1000, 1170)));
        assert_eq!(config.settings_panel.heading(), "Prefs");
        assert!(config.settings_panel.has_content());
        assert_eq!(
            config.theme.unwrap().sidebar.unwrap().background.as_deref(),
            Some("#101010")
        );
        assert_eq!(config.ui.icons, IconMode::NerdFonts);
        assert_eq!(config.ui.px_per_column, 10);
        let initial = config.initial_state.unwrap();
        assert_eq!(initial.sidebar_open, Some(false));
    }
}
