//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime based on `IconMode`.
//! - `IconMode::Unicode` - characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a Nerd Font)

use shellkit_app::icon::{self, IconName};
use shellkit_app::IconMode;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a navigation icon name. Unknown names render nothing.
    pub fn named(&self, name: &str) -> Option<&'static str> {
        icon::resolve(name).map(|i| self.glyph(i))
    }

    pub fn glyph(&self, icon: IconName) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd_glyph(icon),
            IconMode::Unicode => unicode_glyph(icon),
        }
    }

    // --- Shell chrome ---

    pub fn sidebar_trigger(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn settings_trigger(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    pub fn chevrons_up_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0dc}", // nf-fa-sort
            IconMode::Unicode => "\u{2195}",   // ↕
        }
    }

    pub fn plus(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f067}", // nf-fa-plus
            IconMode::Unicode => "+",
        }
    }

    pub fn bell(&self) -> &'static str {
        self.glyph(IconName::Bell)
    }

    pub fn logout(&self) -> &'static str {
        self.glyph(IconName::Logout)
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn unread_dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}

fn nerd_glyph(icon: IconName) -> &'static str {
    match icon {
        IconName::Home => "\u{f015}",
        IconName::Dashboard => "\u{f0e4}",
        IconName::Chat => "\u{f086}",
        IconName::Users => "\u{f0c0}",
        IconName::Settings => "\u{f013}",
        IconName::Help => "\u{f059}",
        IconName::ArrowDown => "\u{f063}",
        IconName::ArrowRight => "\u{f061}",
        IconName::ArrowLeft => "\u{f060}",
        IconName::ArrowUp => "\u{f062}",
        IconName::Bell => "\u{f0f3}",
        IconName::File => "\u{f15b}",
        IconName::Folder => "\u{f07b}",
        IconName::Search => "\u{f002}",
        IconName::Menu => "\u{f0c9}",
        IconName::Close => "\u{f00d}",
        IconName::Logout => "\u{f08b}",
        IconName::Info => "\u{f05a}",
        IconName::Bard => "\u{f0d0}",
        IconName::Mickey => "\u{f118}",
        IconName::Mic => "\u{f130}",
        IconName::CheckDouble => "\u{f560}",
        IconName::Braces => "\u{f121}",
        IconName::Planet => "\u{f0ac}",
        IconName::Seedling => "\u{f4d8}",
        IconName::Computer => "\u{f108}",
        IconName::Stack => "\u{f5fd}",
    }
}

fn unicode_glyph(icon: IconName) -> &'static str {
    match icon {
        IconName::Home => "\u{2302}",        // ⌂
        IconName::Dashboard => "\u{25a6}",   // ▦
        IconName::Chat => "\u{2709}",        // ✉
        IconName::Users => "\u{263a}",       // ☺
        IconName::Settings => "\u{2699}",    // ⚙
        IconName::Help => "?",
        IconName::ArrowDown => "\u{2193}",   // ↓
        IconName::ArrowRight => "\u{2192}",  // →
        IconName::ArrowLeft => "\u{2190}",   // ←
        IconName::ArrowUp => "\u{2191}",     // ↑
        IconName::Bell => "\u{266a}",        // ♪
        IconName::File => "\u{2261}",        // ≡
        IconName::Folder => "\u{25a4}",      // ▤
        IconName::Search => "\u{2315}",      // ⌕
        IconName::Menu => "\u{2630}",        // ☰
        IconName::Close => "\u{2715}",       // ✕
        IconName::Logout => "\u{21a9}",      // ↩
        IconName::Info => "i",
        IconName::Bard => "\u{2726}",        // ✦
        IconName::Mickey => "\u{263b}",      // ☻
        IconName::Mic => "\u{266b}",         // ♫
        IconName::CheckDouble => "\u{2713}", // ✓
        IconName::Braces => "{}",
        IconName::Planet => "\u{25cd}",      // ◍
        IconName::Seedling => "\u{2698}",    // ⚘
        IconName::Computer => "\u{25a3}",    // ▣
        IconName::Stack => "\u{2630}",       // ☰
    }
}
