//! Theme configuration, colour validation and high-contrast derivation
//!
//! A [`ThemeConfig`] is caller-supplied and may be partial or contain junk.
//! [`validate_theme`] completes it from one of two baselines and strips every
//! value that is not a recognised colour syntax. Nothing here is an error:
//! invalid input simply becomes "absent".

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Colours used by the sidebar surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarColors {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent_background: Option<String>,
    pub accent_foreground: Option<String>,
    pub border: Option<String>,
    pub primary: Option<String>,
    pub primary_foreground: Option<String>,
}

/// Colours used by the main content surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentColors {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub dark_background: Option<String>,
}

/// A (possibly partial) theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub sidebar: Option<SidebarColors>,
    pub content: Option<ContentColors>,
}

/// The two themed surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Sidebar,
    Content,
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Light baseline theme
pub fn default_light_theme() -> ThemeConfig {
    ThemeConfig {
        sidebar: Some(SidebarColors {
            background: some("#f9fafb"),
            foreground: some("#111827"),
            accent_background: some("#f3f4f6"),
            accent_foreground: some("#111827"),
            border: some("#e5e7eb"),
            primary: some("#3b82f6"),
            primary_foreground: some("#ffffff"),
        }),
        content: Some(ContentColors {
            background: some("#ffffff"),
            foreground: some("#111827"),
            dark_background: some("#111827"),
        }),
    }
}

/// Dark baseline theme
pub fn default_dark_theme() -> ThemeConfig {
    ThemeConfig {
        sidebar: Some(SidebarColors {
            background: some("#111827"),
            foreground: some("#f9fafb"),
            accent_background: some("#1f2937"),
            accent_foreground: some("#f9fafb"),
            border: some("#374151"),
            primary: some("#3b82f6"),
            primary_foreground: some("#ffffff"),
        }),
        content: Some(ContentColors {
            background: some("#1f2937"),
            foreground: some("#f9fafb"),
            dark_background: some("#111827"),
        }),
    }
}

static COLOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^#([A-Fa-f0-9]{3}){1,2}$",
        r"^rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)$",
        r"^rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)$",
        r"^hsl\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*\)$",
        r"^hsla\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*,\s*[\d.]+\s*\)$",
        r"^oklch\(.*\)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("colour pattern is valid"))
    .collect()
});

/// Returns the colour unchanged when it matches a supported syntax, else `None`.
///
/// Supported: `#rgb`, `#rrggbb`, `rgb()`, `rgba()`, `hsl()`, `hsla()`,
/// `oklch()` and CSS custom properties (`var(--…)`).
pub fn validate_color(color: Option<&str>) -> Option<String> {
    let color = color.filter(|c| !c.is_empty())?;
    let valid = color.starts_with("var(--") || COLOR_PATTERNS.iter().any(|re| re.is_match(color));
    valid.then(|| color.to_string())
}

fn checked(value: &Option<String>) -> Option<String> {
    validate_color(value.as_deref())
}

/// Deep-merge `theme` over the light or dark baseline, then drop every
/// invalid colour. The baselines are never mixed.
pub fn validate_theme(theme: Option<&ThemeConfig>, is_dark: bool) -> ThemeConfig {
    let base = if is_dark {
        default_dark_theme()
    } else {
        default_light_theme()
    };
    let Some(theme) = theme else {
        return base;
    };

    let base_sidebar = base.sidebar.unwrap_or_default();
    let user_sidebar = theme.sidebar.clone().unwrap_or_default();
    let merged_sidebar = SidebarColors {
        background: user_sidebar.background.or(base_sidebar.background),
        foreground: user_sidebar.foreground.or(base_sidebar.foreground),
        accent_background: user_sidebar
            .accent_background
            .or(base_sidebar.accent_background),
        accent_foreground: user_sidebar
            .accent_foreground
            .or(base_sidebar.accent_foreground),
        border: user_sidebar.border.or(base_sidebar.border),
        primary: user_sidebar.primary.or(base_sidebar.primary),
        primary_foreground: user_sidebar
            .primary_foreground
            .or(base_sidebar.primary_foreground),
    };

    let base_content = base.content.unwrap_or_default();
    let user_content = theme.content.clone().unwrap_or_default();
    let merged_content = ContentColors {
        background: user_content.background.or(base_content.background),
        foreground: user_content.foreground.or(base_content.foreground),
        dark_background: user_content.dark_background.or(base_content.dark_background),
    };

    ThemeConfig {
        sidebar: Some(SidebarColors {
            background: checked(&merged_sidebar.background),
            foreground: checked(&merged_sidebar.foreground),
            accent_background: checked(&merged_sidebar.accent_background),
            accent_foreground: checked(&merged_sidebar.accent_foreground),
            border: checked(&merged_sidebar.border),
            primary: checked(&merged_sidebar.primary),
            primary_foreground: checked(&merged_sidebar.primary_foreground),
        }),
        content: Some(ContentColors {
            background: checked(&merged_content.background),
            foreground: checked(&merged_content.foreground),
            dark_background: checked(&merged_content.dark_background),
        }),
    }
}

/// Copy of `theme` with maximum contrast. Only fields present on the input
/// are overwritten, so a partial theme stays partial.
pub fn create_high_contrast_theme(theme: &ThemeConfig) -> ThemeConfig {
    let mut out = theme.clone();

    if let Some(sidebar) = out.sidebar.as_mut() {
        let flip = |slot: &mut Option<String>, to: &str| {
            if slot.is_some() {
                *slot = some(to);
            }
        };
        flip(&mut sidebar.foreground, "#ffffff");
        flip(&mut sidebar.background, "#000000");
        flip(&mut sidebar.primary, "#ffffff");
        flip(&mut sidebar.primary_foreground, "#000000");
    }

    if let Some(content) = out.content.as_mut() {
        if content.foreground.is_some() {
            content.foreground = some("#ffffff");
        }
        if content.background.is_some() {
            content.background = some("#000000");
        }
    }

    out
}

/// Look up a colour by its camelCase property name, falling back when the
/// surface or property is absent.
pub fn theme_color(theme: &ThemeConfig, surface: Surface, property: &str, fallback: &str) -> String {
    let value = match surface {
        Surface::Sidebar => theme.sidebar.as_ref().and_then(|s| match property {
            "background" => s.background.clone(),
            "foreground" => s.foreground.clone(),
            "accentBackground" => s.accent_background.clone(),
            "accentForeground" => s.accent_foreground.clone(),
            "border" => s.border.clone(),
            "primary" => s.primary.clone(),
            "primaryForeground" => s.primary_foreground.clone(),
            _ => None,
        }),
        Surface::Content => theme.content.as_ref().and_then(|c| match property {
            "background" => c.background.clone(),
            "foreground" => c.foreground.clone(),
            "darkBackground" => c.dark_background.clone(),
            _ => None,
        }),
    };
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// The `--sidebar-*` / `--content-*` variable assignments for a theme.
/// Absent fields produce no assignment.
pub fn css_variables(theme: &ThemeConfig) -> Vec<(&'static str, String)> {
    let mut vars = Vec::new();
    let mut push = |name: &'static str, value: &Option<String>| {
        if let Some(v) = value.as_ref().filter(|v| !v.is_empty()) {
            vars.push((name, v.clone()));
        }
    };

    if let Some(s) = &theme.sidebar {
        push("--sidebar-bg", &s.background);
        push("--sidebar-fg", &s.foreground);
        push("--sidebar-hover-bg", &s.accent_background);
        push("--sidebar-hover-fg", &s.accent_foreground);
        push("--sidebar-primary", &s.primary);
        push("--sidebar-primary-fg", &s.primary_foreground);
        push("--sidebar-primary-icon", &s.primary_foreground);
    }
    if let Some(c) = &theme.content {
        push("--content-bg", &c.background);
        push("--content-fg", &c.foreground);
        push("--content-dark-bg", &c.dark_background);
    }

    vars
}
