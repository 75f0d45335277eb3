//! Terminal palette derived from a validated [`ThemeConfig`].
//!
//! CSS colour strings map to `Color::Rgb`. A `var(--...)` reference is
//! resolved against the theme's own variable table ([`css_variables`]);
//! absent fields and unknown variables fall back to `Color::Reset`, the
//! terminal's own default.

use ratatui::style::Color;

use shellkit_core::{css_variables, theme_color, Surface, ThemeConfig};

// --- Fixed colours, independent of the theme ---
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const POPUP_BG: Color = Color::Reset;

/// Colours for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellPalette {
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub accent_bg: Color,
    pub accent_fg: Color,
    pub border: Color,
    pub primary: Color,
    pub primary_fg: Color,
    pub content_bg: Color,
    pub content_fg: Color,
}

impl Default for ShellPalette {
    fn default() -> Self {
        Self {
            sidebar_bg: Color::Reset,
            sidebar_fg: Color::Reset,
            accent_bg: Color::Reset,
            accent_fg: Color::Reset,
            border: Color::DarkGray,
            primary: Color::Cyan,
            primary_fg: Color::Black,
            content_bg: Color::Reset,
            content_fg: Color::Reset,
        }
    }
}

impl ShellPalette {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let fallback = Self::default();
        let vars = css_variables(theme);
        let pick = |surface: Surface, property: &str, default: Color| {
            let value = theme_color(theme, surface, property, "");
            resolve_var(&value, &vars)
                .and_then(parse_color)
                .unwrap_or(default)
        };

        Self {
            sidebar_bg: pick(Surface::Sidebar, "background", fallback.sidebar_bg),
            sidebar_fg: pick(Surface::Sidebar, "foreground", fallback.sidebar_fg),
            accent_bg: pick(Surface::Sidebar, "accentBackground", fallback.accent_bg),
            accent_fg: pick(Surface::Sidebar, "accentForeground", fallback.accent_fg),
            border: pick(Surface::Sidebar, "border", fallback.border),
            primary: pick(Surface::Sidebar, "primary", fallback.primary),
            primary_fg: pick(Surface::Sidebar, "primaryForeground", fallback.primary_fg),
            content_bg: pick(Surface::Content, "background", fallback.content_bg),
            content_fg: pick(Surface::Content, "foreground", fallback.content_fg),
        }
    }
}

/// Follow `var(--name)` through the variable table. `None` for an empty
/// value, an unknown name or a reference cycle.
fn resolve_var<'a>(value: &'a str, vars: &'a [(&'static str, String)]) -> Option<&'a str> {
    let mut current = value.trim();
    for _ in 0..=vars.len() {
        let Some(inner) = current
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return (!current.is_empty()).then_some(current);
        };
        let name = inner.split(',').next().unwrap_or_default().trim();
        current = vars
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, v)| v.trim())?;
    }
    None
}

/// Parse a CSS colour into a terminal colour. `None` for anything a terminal
/// cannot display directly.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let (name, args) = value.split_once('(')?;
    let args = args.strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match name.trim() {
        "rgb" | "rgba" if parts.len() >= 3 => {
            let channel = |s: &str| s.parse::<u8>().ok();
            Some(Color::Rgb(
                channel(parts[0])?,
                channel(parts[1])?,
                channel(parts[2])?,
            ))
        }
        "hsl" | "hsla" if parts.len() >= 3 => {
            let h = parts[0].parse::<f64>().ok()?;
            let s = parts[1].strip_suffix('%')?.parse::<f64>().ok()?;
            let l = parts[2].strip_suffix('%')?.parse::<f64>().ok()?;
            let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
        )),
        6 => Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}
