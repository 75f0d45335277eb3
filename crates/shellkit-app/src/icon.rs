//! Icon name resolution
//!
//! Navigation data refers to icons by string. Glyphs are a rendering concern
//! and live in the TUI crate; this module only validates names.

use shellkit_core::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    Dashboard,
    Chat,
    Users,
    Settings,
    Help,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    Bell,
    File,
    Folder,
    Search,
    Menu,
    Close,
    Logout,
    Info,
    Bard,
    Mickey,
    Mic,
    CheckDouble,
    Braces,
    Planet,
    Seedling,
    Computer,
    Stack,
}

impl IconName {
    pub const ALL: [IconName; 27] = [
        IconName::Home,
        IconName::Dashboard,
        IconName::Chat,
        IconName::Users,
        IconName::Settings,
        IconName::Help,
        IconName::ArrowDown,
        IconName::ArrowRight,
        IconName::ArrowLeft,
        IconName::ArrowUp,
        IconName::Bell,
        IconName::File,
        IconName::Folder,
        IconName::Search,
        IconName::Menu,
        IconName::Close,
        IconName::Logout,
        IconName::Info,
        IconName::Bard,
        IconName::Mickey,
        IconName::Mic,
        IconName::CheckDouble,
        IconName::Braces,
        IconName::Planet,
        IconName::Seedling,
        IconName::Computer,
        IconName::Stack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Home => "home",
            IconName::Dashboard => "dashboard",
            IconName::Chat => "chat",
            IconName::Users => "users",
            IconName::Settings => "settings",
            IconName::Help => "help",
            IconName::ArrowDown => "arrowDown",
            IconName::ArrowRight => "arrowRight",
            IconName::ArrowLeft => "arrowLeft",
            IconName::ArrowUp => "arrowUp",
            IconName::Bell => "bell",
            IconName::File => "file",
            IconName::Folder => "folder",
            IconName::Search => "search",
            IconName::Menu => "menu",
            IconName::Close => "close",
            IconName::Logout => "logout",
            IconName::Info => "info",
            IconName::Bard => "bard",
            IconName::Mickey => "mickey",
            IconName::Mic => "mic",
            IconName::CheckDouble => "checkDouble",
            IconName::Braces => "braces",
            IconName::Planet => "planet",
            IconName::Seedling => "seedling",
            IconName::Computer => "computer",
            IconName::Stack => "stack",
        }
    }

    /// Exact lookup, no logging
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.as_str() == name)
    }
}

/// Resolve an icon name. Unknown names are logged and render nothing.
pub fn resolve(name: &str) -> Option<IconName> {
    let icon = IconName::from_name(name);
    if icon.is_none() {
        warn!("Icon \"{}\" not found", name);
    }
    icon
}
