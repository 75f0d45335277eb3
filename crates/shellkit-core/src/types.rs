//! Core domain types shared by every layer of the shell

use serde::{Deserialize, Serialize};

/// Branding shown at the top of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    /// Short badge text (a terminal stands in for the logo image)
    pub logo: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Shellkit".to_string(),
            logo: "SK".to_string(),
            description: None,
            url: None,
        }
    }
}

impl SiteInfo {
    /// Subtitle line under the site name
    pub fn subtitle(&self) -> &str {
        self.description.as_deref().unwrap_or("Application shell")
    }

    /// The logo is activatable only when it points somewhere
    pub fn is_activatable(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// A team the user can switch between. Read-only caller data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

impl Team {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }
}

/// A single navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl NavItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            icon: None,
            is_active: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A titled group of navigation items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavGroup {
    pub title: String,
    pub url: String,
    pub items: Vec<NavItem>,
}

/// Everything the sidebar needs from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarData {
    pub teams: Vec<Team>,
    pub nav_main: Vec<NavGroup>,
}

impl SidebarData {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.nav_main.is_empty()
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// light → dark → system → light
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolve to a concrete dark flag. `System` defers to the caller's base.
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(mode, ThemeMode::System);
    }

    #[test]
    fn test_theme_mode_cycle() {
        let mut mode = ThemeMode::Light;
        mode = mode.next();
        assert_eq!(mode, ThemeMode::Dark);
        mode = mode.next();
        assert_eq!(mode, ThemeMode::System);
        assert_eq!(mode.next(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_is_dark() {
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
    }

    #[test]
    fn test_nav_item_camel_case() {
        let json = r##"{"title":"Home","url":"#home","isActive":true}"##;
        let item: NavItem = serde_json::from_str(json).unwrap();
        assert!(item.is_active);
        assert_eq!(item.icon, None);
    }

    #[test]
    fn test_team_logo_optional() {
        let team: Team = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(team, Team::new("Acme", ""));
    }

    #[test]
    fn test_site_info_activatable() {
        let mut site = SiteInfo::default();
        assert!(!site.is_activatable());
        site.url = Some("https://example.com".into());
        assert!(site.is_activatable());
    }

    #[test]
    fn test_sidebar_data_is_empty() {
        assert!(SidebarData::default().is_empty());
        let data = SidebarData {
            teams: vec![Team::new("Acme", "A")],
            nav_main: vec![],
        };
        assert!(!data.is_empty());
    }
}
